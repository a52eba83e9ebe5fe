// SPDX-FileCopyrightText: 2026 Brume Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pull cursor over a streaming chat completion.
//!
//! [`VllmChatStream`] adapts the decoded chunk stream into the framework's
//! [`ChatStream`] contract: one pull yields at most one delta, keepalive and
//! role-only chunks yield [`StreamPull::Empty`], and end-of-stream is the
//! explicit [`StreamPull::Done`] signal rather than an error.

use async_trait::async_trait;
use brume_core::{BrumeError, ChatMessage, ChatStream, StreamPull};
use futures::stream::StreamExt;

use crate::sse::ChunkStream;

/// Live cursor over an open streaming exchange with the vLLM server.
///
/// Owns the underlying connection; `close` (or drop) releases it. Not safe
/// for concurrent pulls -- one consumer drives it sequentially.
pub struct VllmChatStream {
    /// The decoded chunk stream; `None` once closed.
    inner: Option<ChunkStream>,
}

impl VllmChatStream {
    pub(crate) fn new(inner: ChunkStream) -> Self {
        Self { inner: Some(inner) }
    }
}

#[async_trait]
impl ChatStream for VllmChatStream {
    async fn recv(&mut self) -> Result<StreamPull, BrumeError> {
        let Some(inner) = self.inner.as_mut() else {
            // Closed cursors have nothing left to pull.
            return Ok(StreamPull::Done);
        };

        match inner.next().await {
            None => Ok(StreamPull::Done),
            Some(Err(e)) => Err(e),
            Some(Ok(chunk)) => {
                let Some(choice) = chunk.choices.into_iter().next() else {
                    // Keepalive/metadata chunk; let the caller pull again.
                    return Ok(StreamPull::Empty);
                };
                match choice.delta.content {
                    Some(text) if !text.is_empty() => {
                        Ok(StreamPull::Delta(ChatMessage::assistant(text)))
                    }
                    // Role announcement or other contentless delta.
                    _ => Ok(StreamPull::Empty),
                }
            }
        }
    }

    fn close(&mut self) {
        // Dropping the inner stream aborts the underlying connection.
        self.inner = None;
    }
}
