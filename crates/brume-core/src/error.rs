// SPDX-FileCopyrightText: 2026 Brume Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Brume agent framework.

use thiserror::Error;

/// The primary error type used across all Brume adapter traits and core operations.
#[derive(Debug, Error)]
pub enum BrumeError {
    /// Configuration errors (invalid TOML, missing required fields, empty
    /// endpoint or model identifier).
    #[error("configuration error: {0}")]
    Config(String),

    /// LLM provider errors (transport failure, non-success status, malformed
    /// response body, mid-stream read failure).
    #[error("provider error: {message}")]
    Provider {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// The provider returned a structurally valid completion with zero
    /// choices. Distinct from [`BrumeError::Provider`] so callers can treat
    /// an empty-but-successful completion differently from a hard failure.
    #[error("completion response contained no choices")]
    NoChoices,

    /// Requested adapter was not found in the registry.
    #[error("adapter not found: {adapter_type}/{name}")]
    AdapterNotFound { adapter_type: String, name: String },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
