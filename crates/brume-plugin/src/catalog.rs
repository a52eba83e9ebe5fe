// SPDX-FileCopyrightText: 2026 Brume Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in adapter catalog.
//!
//! Returns hardcoded `PluginManifest` entries for the adapters compiled into
//! the Brume workspace. No network calls are made.

use brume_core::types::AdapterType;

use crate::manifest::PluginManifest;

/// Returns manifests for all built-in adapters.
///
/// The catalog currently lists one adapter: the vLLM OpenAI-compatible
/// provider.
pub fn builtin_catalog() -> Vec<PluginManifest> {
    vec![PluginManifest {
        name: "vllm".to_string(),
        version: "0.1.0".to_string(),
        description: "vLLM OpenAI-compatible LLM provider".to_string(),
        adapter_type: AdapterType::Provider,
        author: Some("Brume Contributors".to_string()),
        capabilities: vec!["chat".to_string(), "streaming".to_string()],
        min_brume_version: Some("0.1.0".to_string()),
        config_keys: vec!["vllm.base_url".to_string(), "vllm.model".to_string()],
    }]
}

/// Search the built-in catalog by query string.
///
/// Filters entries whose name or description contains the query
/// (case-insensitive). If query is empty, returns all entries.
pub fn search_catalog(query: &str) -> Vec<PluginManifest> {
    if query.is_empty() {
        return builtin_catalog();
    }
    let query_lower = query.to_lowercase();
    builtin_catalog()
        .into_iter()
        .filter(|m| {
            m.name.to_lowercase().contains(&query_lower)
                || m.description.to_lowercase().contains(&query_lower)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_lists_vllm_provider() {
        let catalog = builtin_catalog();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog[0].name, "vllm");
        assert_eq!(catalog[0].adapter_type, AdapterType::Provider);
    }

    #[test]
    fn catalog_entry_names_required_config_keys() {
        let catalog = builtin_catalog();
        assert!(catalog[0]
            .config_keys
            .contains(&"vllm.base_url".to_string()));
        assert!(catalog[0].config_keys.contains(&"vllm.model".to_string()));
    }

    #[test]
    fn search_catalog_finds_vllm() {
        let results = search_catalog("vllm");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "vllm");
    }

    #[test]
    fn search_catalog_case_insensitive() {
        let results = search_catalog("OPENAI-COMPATIBLE");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "vllm");
    }

    #[test]
    fn search_catalog_empty_returns_all() {
        let results = search_catalog("");
        assert_eq!(results.len(), builtin_catalog().len());
    }

    #[test]
    fn search_catalog_no_match() {
        let results = search_catalog("xyz_nonexistent");
        assert!(results.is_empty());
    }
}
