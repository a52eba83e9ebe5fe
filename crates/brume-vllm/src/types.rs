// SPDX-FileCopyrightText: 2026 Brume Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! OpenAI-compatible chat completions wire types.
//!
//! Request and response shapes for `POST /v1/chat/completions`, plus the
//! streaming chunk shape carried by `data:` events. Unknown response fields
//! (id, object, created, usage, ...) are tolerated and ignored.

use serde::{Deserialize, Serialize};

// --- Request types ---

/// A request to the chat completions endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    /// Model identifier understood by the server, e.g. "mistral".
    pub model: String,

    /// Conversation messages, oldest first. Forwarded in order, unmodified.
    pub messages: Vec<WireMessage>,

    /// Whether the server should stream the response as SSE chunks.
    pub stream: bool,
}

/// A single message in the chat completions wire format.
///
/// The role is a bare string label ("system", "user", "assistant").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WireMessage {
    pub role: String,
    pub content: String,
}

// --- Response types ---

/// A full (non-streaming) response from the chat completions endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    /// Candidate completions. Only the first is used.
    pub choices: Vec<Choice>,
}

/// One candidate completion.
#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    /// The complete reply message for this candidate.
    pub message: WireMessage,
}

// --- Streaming chunk types ---

/// One unit of a streaming response, parsed from a `data:` event.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionChunk {
    /// Candidate deltas. May be empty on keepalive/metadata chunks.
    #[serde(default)]
    pub choices: Vec<ChunkChoice>,
}

/// One candidate inside a streaming chunk.
#[derive(Debug, Clone, Deserialize)]
pub struct ChunkChoice {
    /// The incremental update for this candidate.
    pub delta: ChunkDelta,
}

/// The incremental content fragment inside a chunk's candidate.
///
/// Role-announcement chunks carry a `role` field and no `content`; both are
/// optional on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct ChunkDelta {
    #[serde(default)]
    pub content: Option<String>,
}

// --- Error body ---

/// Error response body returned by OpenAI-compatible servers on non-2xx.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    /// Error details.
    pub error: ApiErrorDetail,
}

/// Error detail within an API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    /// Human-readable error message.
    pub message: String,
    /// Error type identifier, when the server provides one.
    #[serde(rename = "type", default)]
    pub type_: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialize_request_with_stream_flag() {
        let req = ChatCompletionRequest {
            model: "mistral".into(),
            messages: vec![
                WireMessage {
                    role: "system".into(),
                    content: "You are terse.".into(),
                },
                WireMessage {
                    role: "user".into(),
                    content: "Hello".into(),
                },
            ],
            stream: true,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["model"], "mistral");
        assert_eq!(json["stream"], true);
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "You are terse.");
        assert_eq!(json["messages"][1]["role"], "user");
    }

    #[test]
    fn serialize_request_with_empty_messages() {
        let req = ChatCompletionRequest {
            model: "mistral".into(),
            messages: vec![],
            stream: false,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert!(json["messages"].as_array().unwrap().is_empty());
        assert_eq!(json["stream"], false);
    }

    #[test]
    fn deserialize_response_ignores_extra_fields() {
        let json = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion",
            "created": 1700000000,
            "model": "mistral",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "Hi!"}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 10, "completion_tokens": 2, "total_tokens": 12}
        }"#;
        let resp: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.choices.len(), 1);
        assert_eq!(resp.choices[0].message.role, "assistant");
        assert_eq!(resp.choices[0].message.content, "Hi!");
    }

    #[test]
    fn deserialize_response_with_no_choices() {
        let json = r#"{"choices": []}"#;
        let resp: ChatCompletionResponse = serde_json::from_str(json).unwrap();
        assert!(resp.choices.is_empty());
    }

    #[test]
    fn deserialize_chunk_with_content_delta() {
        let json = r#"{
            "id": "chatcmpl-123",
            "object": "chat.completion.chunk",
            "choices": [{"index": 0, "delta": {"content": "Hel"}, "finish_reason": null}]
        }"#;
        let chunk: ChatCompletionChunk = serde_json::from_str(json).unwrap();
        assert_eq!(chunk.choices.len(), 1);
        assert_eq!(chunk.choices[0].delta.content.as_deref(), Some("Hel"));
    }

    #[test]
    fn deserialize_role_only_chunk_has_no_content() {
        let json = r#"{
            "choices": [{"index": 0, "delta": {"role": "assistant"}, "finish_reason": null}]
        }"#;
        let chunk: ChatCompletionChunk = serde_json::from_str(json).unwrap();
        assert!(chunk.choices[0].delta.content.is_none());
    }

    #[test]
    fn deserialize_chunk_with_no_choices() {
        // Some servers emit usage-only or keepalive chunks with an empty or
        // missing choices array.
        let chunk: ChatCompletionChunk = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(chunk.choices.is_empty());

        let chunk: ChatCompletionChunk =
            serde_json::from_str(r#"{"usage": {"total_tokens": 5}}"#).unwrap();
        assert!(chunk.choices.is_empty());
    }

    #[test]
    fn deserialize_api_error_response() {
        let json = r#"{
            "error": {"message": "model `nope` does not exist", "type": "invalid_request_error", "code": 404}
        }"#;
        let err: ApiErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(err.error.message, "model `nope` does not exist");
        assert_eq!(err.error.type_.as_deref(), Some("invalid_request_error"));
    }

    #[test]
    fn deserialize_api_error_without_type() {
        let json = r#"{"error": {"message": "boom"}}"#;
        let err: ApiErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(err.error.message, "boom");
        assert!(err.error.type_.is_none());
    }
}
