// SPDX-FileCopyrightText: 2026 Brume Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes. Note that `vllm.model` is deliberately NOT required here: the
//! provider rejects an empty model identifier before issuing any request, so
//! a config without one still loads (and fails only when the provider is
//! actually used).

use crate::diagnostic::ConfigError;
use crate::model::BrumeConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &BrumeConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.agent.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "agent.name must not be empty".to_string(),
        });
    }

    if config.vllm.base_url.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "vllm.base_url must not be empty".to_string(),
        });
    }

    // Catch the common mistake of configuring the OpenAI-compatibility root
    // directly; the provider appends /v1 itself.
    let base = config.vllm.base_url.trim().trim_end_matches('/');
    if !base.is_empty() {
        if !base.starts_with("http://") && !base.starts_with("https://") {
            errors.push(ConfigError::Validation {
                message: format!(
                    "vllm.base_url `{base}` must start with http:// or https://"
                ),
            });
        }
        if base.ends_with("/v1") {
            errors.push(ConfigError::Validation {
                message: format!(
                    "vllm.base_url `{base}` must not include the /v1 suffix (it is appended automatically)"
                ),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
