// SPDX-FileCopyrightText: 2026 Brume Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across adapter traits and the Brume framework.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Health status reported by adapter health checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// Adapter is fully operational.
    Healthy,
    /// Adapter is operational but experiencing issues.
    Degraded(String),
    /// Adapter is not operational.
    Unhealthy(String),
}

/// Identifies the type of adapter in the plugin registry.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
pub enum AdapterType {
    Channel,
    Provider,
    Storage,
}

// --- Chat types ---

/// The author of a chat message.
///
/// Serialized as a lowercase bare label (`"system"`, `"user"`, `"assistant"`),
/// which is exactly what OpenAI-compatible wire formats expect.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// A single message in a conversation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who authored the message.
    pub role: ChatRole,
    /// Text content of the message.
    pub content: String,
}

impl ChatMessage {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    /// Creates an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// An ordered conversation sent to a chat provider.
///
/// Message order is semantically meaningful and is preserved end-to-end;
/// providers forward the sequence as-is without mutation, reordering, or
/// truncation. An empty sequence is forwarded too -- the server decides
/// whether that is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The conversation messages, oldest first.
    pub messages: Vec<ChatMessage>,
}

impl ChatRequest {
    /// Creates a request from an ordered message sequence.
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self { messages }
    }
}

/// A complete reply from a chat provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    /// The model's reply.
    pub message: ChatMessage,
}

/// The outcome of one pull on a [`crate::traits::ChatStream`].
///
/// Errors travel in the surrounding `Result`; this enum covers the three
/// non-error outcomes. `Done` is a first-class terminal signal, not an error,
/// and callers must check for it explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamPull {
    /// An incremental content fragment. Role is always assistant; content is
    /// exactly what the chunk carried, with no concatenation or buffering.
    /// Accumulation is the caller's responsibility.
    Delta(ChatMessage),
    /// A keepalive or metadata chunk with nothing to surface. Pull again.
    Empty,
    /// The stream has ended.
    Done,
}
