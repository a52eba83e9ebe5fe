// SPDX-FileCopyrightText: 2026 Brume Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry for managing compiled-in adapter plugins.
//!
//! The `PluginRegistry` stores `PluginEntry` records keyed by plugin name.
//! Each entry contains a manifest, status, and optional factory for creating
//! adapter instances at runtime. This is the named-entry side channel through
//! which providers such as the vLLM adapter are made available to the rest of
//! the framework.

use std::collections::HashMap;

use brume_core::traits::adapter::PluginAdapter;
use brume_core::types::AdapterType;
use brume_core::BrumeError;
use tracing::debug;

use crate::manifest::PluginManifest;

/// Status of a plugin in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PluginStatus {
    /// Plugin is active and will be initialized.
    Enabled,
    /// Plugin is explicitly disabled by user.
    Disabled,
    /// Plugin is compiled in but missing required configuration.
    NotConfigured,
}

impl std::fmt::Display for PluginStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginStatus::Enabled => write!(f, "enabled"),
            PluginStatus::Disabled => write!(f, "disabled"),
            PluginStatus::NotConfigured => write!(f, "not-configured"),
        }
    }
}

/// Factory trait for creating adapter instances from configuration.
///
/// Factories are optional -- the registry can hold manifests without
/// factories for catalog display purposes (plugin list/search).
pub trait PluginFactory: Send + Sync {
    /// The adapter type this factory produces.
    fn adapter_type(&self) -> AdapterType;

    /// Create a new adapter instance from the given configuration.
    fn create(&self, config: &serde_json::Value) -> Result<Box<dyn PluginAdapter>, BrumeError>;
}

/// A single entry in the plugin registry.
pub struct PluginEntry {
    /// Plugin manifest with metadata.
    pub manifest: PluginManifest,
    /// Current status of the plugin.
    pub status: PluginStatus,
    /// Optional factory for creating adapter instances.
    pub factory: Option<Box<dyn PluginFactory>>,
}

impl std::fmt::Debug for PluginEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginEntry")
            .field("manifest", &self.manifest)
            .field("status", &self.status)
            .field("factory", &self.factory.is_some())
            .finish()
    }
}

/// Registry of compiled-in adapter plugins.
///
/// Stores plugin entries keyed by name, supporting registration, lookup,
/// filtering by adapter type, and status toggling.
pub struct PluginRegistry {
    entries: HashMap<String, PluginEntry>,
}

impl PluginRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Register a plugin with default status `Enabled`.
    pub fn register(
        &mut self,
        manifest: PluginManifest,
        factory: Option<Box<dyn PluginFactory>>,
    ) {
        self.register_with_status(manifest, factory, PluginStatus::Enabled);
    }

    /// Register a plugin with an explicit status.
    pub fn register_with_status(
        &mut self,
        manifest: PluginManifest,
        factory: Option<Box<dyn PluginFactory>>,
        status: PluginStatus,
    ) {
        let name = manifest.name.clone();
        debug!(plugin = %name, status = %status, "registering plugin");
        self.entries.insert(
            name,
            PluginEntry {
                manifest,
                status,
                factory,
            },
        );
    }

    /// Get a plugin entry by name.
    pub fn get(&self, name: &str) -> Option<&PluginEntry> {
        self.entries.get(name)
    }

    /// Get all enabled plugins matching the given adapter type.
    pub fn get_enabled(&self, adapter_type: AdapterType) -> Vec<&PluginEntry> {
        self.entries
            .values()
            .filter(|e| {
                e.status == PluginStatus::Enabled && e.manifest.adapter_type == adapter_type
            })
            .collect()
    }

    /// List all plugin entries, sorted by name.
    pub fn list_all(&self) -> Vec<&PluginEntry> {
        let mut entries: Vec<&PluginEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.manifest.name.cmp(&b.manifest.name));
        entries
    }

    /// Toggle a plugin's enabled status.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> Result<(), BrumeError> {
        let entry =
            self.entries
                .get_mut(name)
                .ok_or_else(|| BrumeError::AdapterNotFound {
                    adapter_type: "unknown".to_string(),
                    name: name.to_string(),
                })?;
        entry.status = if enabled {
            PluginStatus::Enabled
        } else {
            PluginStatus::Disabled
        };
        Ok(())
    }

    /// Returns the number of registered plugins.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no plugins are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for PluginRegistry {
    fn default() -> Self {
        Self::new()
    }
}
