// SPDX-FileCopyrightText: 2026 Brume Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Brume agent framework.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Brume configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BrumeConfig {
    /// Agent identity and behavior settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// vLLM (OpenAI-compatible) inference server settings.
    #[serde(default)]
    pub vllm: VllmConfig,
}

/// Agent identity and behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the agent.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_agent_name() -> String {
    "brume".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// vLLM inference server configuration.
///
/// The server exposes an OpenAI-compatible API; `base_url` must NOT include
/// the `/v1` suffix (the provider appends it).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct VllmConfig {
    /// Base URL of the vLLM server, e.g. "http://localhost:8000".
    #[serde(default = "default_vllm_base_url")]
    pub base_url: String,

    /// Model identifier understood by the server, e.g. "mistral".
    /// May be left empty in the config file; the provider rejects an empty
    /// model before issuing any request.
    #[serde(default)]
    pub model: String,

    /// API key forwarded as a Bearer token. vLLM commonly accepts a dummy
    /// value; whatever is configured is forwarded verbatim.
    #[serde(default)]
    pub api_key: String,
}

impl Default for VllmConfig {
    fn default() -> Self {
        Self {
            base_url: default_vllm_base_url(),
            model: String::new(),
            api_key: String::new(),
        }
    }
}

fn default_vllm_base_url() -> String {
    "http://localhost:8000".to_string()
}
