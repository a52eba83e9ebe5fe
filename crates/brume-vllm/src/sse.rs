// SPDX-FileCopyrightText: 2026 Brume Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SSE decoding for streaming chat completions.
//!
//! OpenAI-compatible servers stream newline-delimited `data: <json>` events
//! terminated by a `data: [DONE]` sentinel line. This module converts a
//! reqwest response byte stream into typed [`ChatCompletionChunk`]s using the
//! `eventsource-stream` crate, ending the stream at the sentinel so nothing
//! past it is ever pulled.

use std::pin::Pin;

use brume_core::BrumeError;
use eventsource_stream::Eventsource;
use futures::future;
use futures::stream::{Stream, StreamExt};

use crate::types::ChatCompletionChunk;

/// Terminator line sent as the final `data:` event of a stream.
const DONE_SENTINEL: &str = "[DONE]";

/// The decoded chunk stream handed to the pull cursor.
pub type ChunkStream =
    Pin<Box<dyn Stream<Item = Result<ChatCompletionChunk, BrumeError>> + Send>>;

/// Parses a reqwest streaming response into a stream of typed chunks.
///
/// Each SSE event's data payload is deserialized as a
/// [`ChatCompletionChunk`]; the `[DONE]` sentinel ends the stream. Transport
/// read failures and malformed chunk JSON surface as stream item errors.
pub fn parse_chunk_stream(response: reqwest::Response) -> ChunkStream {
    let events = response.bytes_stream().eventsource();

    let chunks = events
        .map(|result| match result {
            Ok(event) => {
                if event.data.trim() == DONE_SENTINEL {
                    return Ok(None);
                }
                serde_json::from_str::<ChatCompletionChunk>(&event.data)
                    .map(Some)
                    .map_err(|e| BrumeError::Provider {
                        message: format!("failed to parse stream chunk: {e}"),
                        source: Some(Box::new(e)),
                    })
            }
            Err(e) => Err(BrumeError::Provider {
                message: format!("SSE stream error: {e}"),
                source: None,
            }),
        })
        // Ok(None) marks the [DONE] sentinel; stop there.
        .take_while(|item| future::ready(!matches!(item, Ok(None))))
        .filter_map(|item| future::ready(item.transpose()));

    Box::pin(chunks)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: serve raw SSE text through wiremock to get a real
    /// reqwest::Response with a live byte stream.
    async fn mock_sse_response(sse_text: &str) -> reqwest::Response {
        use wiremock::matchers::method;
        use wiremock::{Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/event-stream")
                    .set_body_string(sse_text.to_string()),
            )
            .mount(&server)
            .await;

        reqwest::get(&server.uri()).await.unwrap()
    }

    #[tokio::test]
    async fn parse_two_content_chunks_then_done() {
        let sse = concat!(
            "data: {\"choices\":[{\"index\":0,\"delta\":{\"content\":\"hello \"}}]}\n\n",
            "data: {\"choices\":[{\"index\":0,\"delta\":{\"content\":\"world\"}}]}\n\n",
            "data: [DONE]\n\n",
        );
        let response = mock_sse_response(sse).await;
        let mut stream = parse_chunk_stream(response);

        let first = stream.next().await.unwrap().unwrap();
        assert_eq!(
            first.choices[0].delta.content.as_deref(),
            Some("hello ")
        );

        let second = stream.next().await.unwrap().unwrap();
        assert_eq!(second.choices[0].delta.content.as_deref(), Some("world"));

        assert!(stream.next().await.is_none(), "stream ends after [DONE]");
    }

    #[tokio::test]
    async fn nothing_after_done_sentinel_is_surfaced() {
        let sse = concat!(
            "data: {\"choices\":[{\"index\":0,\"delta\":{\"content\":\"real\"}}]}\n\n",
            "data: [DONE]\n\n",
            "data: {\"choices\":[{\"index\":0,\"delta\":{\"content\":\"ghost\"}}]}\n\n",
        );
        let response = mock_sse_response(sse).await;
        let mut stream = parse_chunk_stream(response);

        let first = stream.next().await.unwrap().unwrap();
        assert_eq!(first.choices[0].delta.content.as_deref(), Some("real"));
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn keepalive_chunk_with_no_choices_passes_through() {
        let sse = concat!(
            "data: {\"choices\":[]}\n\n",
            "data: [DONE]\n\n",
        );
        let response = mock_sse_response(sse).await;
        let mut stream = parse_chunk_stream(response);

        let chunk = stream.next().await.unwrap().unwrap();
        assert!(chunk.choices.is_empty());
        assert!(stream.next().await.is_none());
    }

    #[tokio::test]
    async fn malformed_chunk_json_yields_error() {
        let sse = "data: {not json}\n\n";
        let response = mock_sse_response(sse).await;
        let mut stream = parse_chunk_stream(response);

        let item = stream.next().await.unwrap();
        match item {
            Err(BrumeError::Provider { message, .. }) => {
                assert!(message.contains("failed to parse stream chunk"), "got: {message}");
            }
            other => panic!("expected Provider error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_body_ends_immediately() {
        let response = mock_sse_response("").await;
        let mut stream = parse_chunk_stream(response);
        assert!(stream.next().await.is_none());
    }
}
