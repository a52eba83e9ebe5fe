// SPDX-FileCopyrightText: 2026 Brume Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin manifest parsing from `plugin.toml` files.
//!
//! Plugin manifests describe adapter plugins (Provider, Channel, Storage)
//! compiled into the Brume workspace.

use brume_core::types::AdapterType;
use brume_core::BrumeError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Parsed plugin manifest describing an adapter plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginManifest {
    /// Unique name of the plugin (e.g., "vllm").
    pub name: String,
    /// Semantic version string.
    pub version: String,
    /// Human-readable description.
    pub description: String,
    /// Type of adapter this plugin provides.
    pub adapter_type: AdapterType,
    /// Optional author identifier.
    pub author: Option<String>,
    /// Capabilities the plugin provides (e.g., ["chat", "streaming"]).
    pub capabilities: Vec<String>,
    /// Minimum Brume version required (e.g., "0.1.0").
    pub min_brume_version: Option<String>,
    /// Required config keys (e.g., ["vllm.base_url", "vllm.model"]).
    pub config_keys: Vec<String>,
}

/// Intermediate TOML deserialization struct for `plugin.toml`.
#[derive(Debug, Deserialize)]
struct PluginManifestFile {
    plugin: PluginSection,
}

/// The `[plugin]` section of a `plugin.toml` file.
#[derive(Debug, Deserialize)]
struct PluginSection {
    name: String,
    version: String,
    description: String,
    adapter_type: String,
    author: Option<String>,
    #[serde(default)]
    capabilities: Vec<String>,
    min_brume_version: Option<String>,
    #[serde(default)]
    config_keys: Vec<String>,
}

/// Parse a plugin manifest from TOML content.
///
/// Validates that the adapter_type is a valid `AdapterType` variant and that
/// name and version are non-empty.
pub fn parse_plugin_manifest(toml_content: &str) -> Result<PluginManifest, BrumeError> {
    let file: PluginManifestFile = toml::from_str(toml_content)
        .map_err(|e| BrumeError::Config(format!("invalid plugin manifest: {e}")))?;

    let section = file.plugin;

    if section.name.is_empty() {
        return Err(BrumeError::Config(
            "plugin manifest: name must not be empty".to_string(),
        ));
    }

    if section.version.is_empty() {
        return Err(BrumeError::Config(
            "plugin manifest: version must not be empty".to_string(),
        ));
    }

    let adapter_type = AdapterType::from_str(&section.adapter_type).map_err(|_| {
        BrumeError::Config(format!(
            "plugin manifest: invalid adapter_type '{}'. Expected one of: Channel, Provider, Storage",
            section.adapter_type
        ))
    })?;

    Ok(PluginManifest {
        name: section.name,
        version: section.version,
        description: section.description,
        adapter_type,
        author: section.author,
        capabilities: section.capabilities,
        min_brume_version: section.min_brume_version,
        config_keys: section.config_keys,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_manifest() {
        let toml = r#"
[plugin]
name = "vllm"
version = "0.1.0"
description = "vLLM OpenAI-compatible LLM provider"
adapter_type = "Provider"
author = "Brume Contributors"
capabilities = ["chat", "streaming"]
min_brume_version = "0.1.0"
config_keys = ["vllm.base_url", "vllm.model"]
"#;
        let manifest = parse_plugin_manifest(toml).unwrap();
        assert_eq!(manifest.name, "vllm");
        assert_eq!(manifest.version, "0.1.0");
        assert_eq!(manifest.adapter_type, AdapterType::Provider);
        assert_eq!(manifest.capabilities, vec!["chat", "streaming"]);
        assert_eq!(
            manifest.config_keys,
            vec!["vllm.base_url", "vllm.model"]
        );
        assert_eq!(manifest.author.as_deref(), Some("Brume Contributors"));
        assert_eq!(manifest.min_brume_version.as_deref(), Some("0.1.0"));
    }

    #[test]
    fn parse_invalid_adapter_type() {
        let toml = r#"
[plugin]
name = "bad"
version = "0.1.0"
description = "invalid type"
adapter_type = "FooBar"
"#;
        let result = parse_plugin_manifest(toml);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("invalid adapter_type"));
    }

    #[test]
    fn parse_missing_name() {
        let toml = r#"
[plugin]
name = ""
version = "0.1.0"
description = "empty name"
adapter_type = "Provider"
"#;
        let result = parse_plugin_manifest(toml);
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("name must not be empty"));
    }

    #[test]
    fn parse_minimal_manifest() {
        let toml = r#"
[plugin]
name = "minimal"
version = "1.0.0"
description = "a minimal plugin"
adapter_type = "Storage"
"#;
        let manifest = parse_plugin_manifest(toml).unwrap();
        assert_eq!(manifest.name, "minimal");
        assert_eq!(manifest.adapter_type, AdapterType::Storage);
        assert!(manifest.capabilities.is_empty());
        assert!(manifest.config_keys.is_empty());
        assert!(manifest.author.is_none());
        assert!(manifest.min_brume_version.is_none());
    }
}
