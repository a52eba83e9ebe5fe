// SPDX-FileCopyrightText: 2026 Brume Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat provider trait for LLM provider integrations (vLLM, etc.).

use async_trait::async_trait;

use crate::error::BrumeError;
use crate::traits::adapter::PluginAdapter;
use crate::types::{ChatRequest, ChatResponse, StreamPull};

/// Adapter for LLM chat provider integrations.
///
/// Chat providers handle communication with language model APIs, supporting
/// both single-shot completion and streaming responses. The synchronous call
/// blocks for one network round trip; the streaming call returns a
/// [`ChatStream`] cursor the caller drives pull by pull.
#[async_trait]
pub trait ChatProvider: PluginAdapter {
    /// Sends a full conversation and returns one complete reply.
    async fn chat(&self, request: ChatRequest) -> Result<ChatResponse, BrumeError>;

    /// Sends a full conversation and returns a live cursor of incremental
    /// deltas.
    ///
    /// If the transport rejects the streaming request synchronously (bad
    /// status before any chunk is read), this call itself fails and no
    /// cursor is returned.
    async fn chat_stream(&self, request: ChatRequest)
        -> Result<Box<dyn ChatStream>, BrumeError>;
}

/// A live handle over an open streaming exchange.
///
/// The cursor owns the underlying network connection for the duration of the
/// exchange. It must be driven by exactly one consumer issuing sequential
/// [`recv`](ChatStream::recv) calls, and released exactly once via
/// [`close`](ChatStream::close) (or by dropping the cursor) on every exit
/// path -- normal completion, early abort, or error.
#[async_trait]
pub trait ChatStream: Send {
    /// Pulls the next outcome from the stream.
    ///
    /// Returns:
    /// - `Ok(StreamPull::Delta(_))` for a non-empty content fragment
    /// - `Ok(StreamPull::Empty)` for a keepalive or role-only chunk; pull again
    /// - `Ok(StreamPull::Done)` when the stream has ended -- not an error
    /// - `Err(_)` on a read failure; the cursor is unusable afterwards and
    ///   should be closed
    async fn recv(&mut self) -> Result<StreamPull, BrumeError>;

    /// Releases the underlying connection. Repeated calls are no-ops.
    fn close(&mut self);
}
