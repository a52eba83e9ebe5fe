// SPDX-FileCopyrightText: 2026 Brume Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./brume.toml` > `~/.config/brume/brume.toml` > `/etc/brume/brume.toml`
//! with environment variable overrides via `BRUME_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::BrumeConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/brume/brume.toml` (system-wide)
/// 3. `~/.config/brume/brume.toml` (user XDG config)
/// 4. `./brume.toml` (local directory)
/// 5. `BRUME_*` environment variables
pub fn load_config() -> Result<BrumeConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<BrumeConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BrumeConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<BrumeConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(BrumeConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used internally for config loading (exposed for diagnostic use).
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(BrumeConfig::default()))
        .merge(Toml::file("/etc/brume/brume.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("brume/brume.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("brume.toml"))
        .merge(env_provider())
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `BRUME_VLLM_BASE_URL` must map to
/// `vllm.base_url`, not `vllm.base.url`.
fn env_provider() -> Env {
    Env::prefixed("BRUME_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: BRUME_VLLM_BASE_URL -> "vllm_base_url"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("vllm_", "vllm.", 1);
        mapped.into()
    })
}
