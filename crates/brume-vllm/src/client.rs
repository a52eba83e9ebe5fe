// SPDX-FileCopyrightText: 2026 Brume Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for OpenAI-compatible chat completions endpoints.
//!
//! Provides [`VllmClient`] which handles request construction, bearer
//! authentication, and streaming SSE responses. The client imposes no
//! retries and no timeouts: failures surface immediately, and timeout
//! policy belongs to the caller (dropping the in-flight future aborts the
//! request).

use reqwest::header::{HeaderMap, HeaderValue};
use tracing::debug;

use brume_core::BrumeError;

use crate::sse::{self, ChunkStream};
use crate::types::{ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse};

/// HTTP client bound to one OpenAI-compatible API root.
///
/// The API root is the configured base URL with `/v1` appended exactly once;
/// connection pooling is handled by the inner reqwest client, so one
/// `VllmClient` is safely shared across sequential or concurrent calls.
#[derive(Debug, Clone)]
pub struct VllmClient {
    client: reqwest::Client,
    api_root: String,
}

impl VllmClient {
    /// Creates a new client for the server at `base_url`.
    ///
    /// `base_url` must not include the `/v1` suffix; it is appended here.
    /// `api_key` is forwarded verbatim as a Bearer token on every request,
    /// empty string included (vLLM commonly accepts a dummy key).
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, BrumeError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "authorization",
            HeaderValue::from_str(&format!("Bearer {api_key}")).map_err(|e| {
                BrumeError::Config(format!("invalid API key header value: {e}"))
            })?,
        );
        headers.insert(
            "content-type",
            HeaderValue::from_static("application/json"),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| BrumeError::Provider {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        // The server exposes its OpenAI-compatible API at `${base_url}/v1`.
        let api_root = format!("{}/v1", base_url.trim_end_matches('/'));

        Ok(Self { client, api_root })
    }

    /// Returns the derived API root (base URL plus the `/v1` segment).
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.api_root)
    }

    /// Sends a non-streaming request and returns the full response.
    pub async fn complete_chat(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, BrumeError> {
        let mut req = request.clone();
        req.stream = false;

        let response = self
            .client
            .post(self.completions_url())
            .json(&req)
            .send()
            .await
            .map_err(|e| BrumeError::Provider {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "completion response received");

        if !status.is_success() {
            return Err(decode_error_response(status, response).await);
        }

        let body = response.text().await.map_err(|e| BrumeError::Provider {
            message: format!("failed to read response body: {e}"),
            source: Some(Box::new(e)),
        })?;
        serde_json::from_str(&body).map_err(|e| BrumeError::Provider {
            message: format!("failed to parse completion response: {e}"),
            source: Some(Box::new(e)),
        })
    }

    /// Opens a streaming request and returns the decoded chunk stream.
    ///
    /// A bad status at open time (before any chunk is read) fails here and
    /// no stream is produced.
    pub async fn stream_chat(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChunkStream, BrumeError> {
        let mut req = request.clone();
        req.stream = true;

        let response = self
            .client
            .post(self.completions_url())
            .json(&req)
            .send()
            .await
            .map_err(|e| BrumeError::Provider {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        debug!(status = %status, "streaming response received");

        if !status.is_success() {
            return Err(decode_error_response(status, response).await);
        }

        Ok(sse::parse_chunk_stream(response))
    }
}

/// Decodes a non-success response into a provider error, preferring the
/// server's structured error body when it parses.
async fn decode_error_response(
    status: reqwest::StatusCode,
    response: reqwest::Response,
) -> BrumeError {
    let body = response.text().await.unwrap_or_default();
    let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
        Ok(api_err) => match api_err.error.type_ {
            Some(type_) => format!("server error ({type_}): {}", api_err.error.message),
            None => format!("server error: {}", api_err.error.message),
        },
        Err(_) => format!("server returned {status}: {body}"),
    };
    BrumeError::Provider {
        message,
        source: None,
    }
}
