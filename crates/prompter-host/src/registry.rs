// SPDX-FileCopyrightText: 2026 Prompter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin registry for managing compiled-in channel plugins.
//!
//! The `PluginRegistry` stores `PluginEntry` records keyed by plugin name.
//! Entries are bookkeeping only: the host constructs enabled plugins and
//! binds them to a messenger itself.

use std::collections::HashMap;

use prompter_core::PrompterError;
use tracing::{info, warn};

use crate::catalog::builtin_catalog;
use crate::manifest::PluginManifest;

/// Status of a plugin in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginStatus {
    /// Plugin is active and will be bound to its channel.
    Enabled,
    /// Plugin is explicitly disabled by user.
    Disabled,
}

impl std::fmt::Display for PluginStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PluginStatus::Enabled => write!(f, "enabled"),
            PluginStatus::Disabled => write!(f, "disabled"),
        }
    }
}

/// A single entry in the plugin registry.
#[derive(Debug, Clone)]
pub struct PluginEntry {
    /// Plugin manifest with metadata.
    pub manifest: PluginManifest,
    /// Current status of the plugin.
    pub status: PluginStatus,
}

/// Registry of compiled-in channel plugins.
///
/// Stores plugin entries keyed by name, supporting registration, lookup,
/// and status toggling.
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
    pub fn register(&mut self, manifest: PluginManifest) {
        self.register_with_status(manifest, PluginStatus::Enabled);
    }

    /// Register a plugin with an explicit status.
    pub fn register_with_status(&mut self, manifest: PluginManifest, status: PluginStatus) {
        let name = manifest.name.clone();
        self.entries.insert(name, PluginEntry { manifest, status });
    }

    /// Get a plugin entry by name.
    pub fn get(&self, name: &str) -> Option<&PluginEntry> {
        self.entries.get(name)
    }

    /// Returns true if the named plugin is registered and enabled.
    pub fn is_enabled(&self, name: &str) -> bool {
        self.entries
            .get(name)
            .is_some_and(|e| e.status == PluginStatus::Enabled)
    }

    /// List all plugin entries, sorted by name.
    pub fn list_all(&self) -> Vec<&PluginEntry> {
        let mut entries: Vec<&PluginEntry> = self.entries.values().collect();
        entries.sort_by(|a, b| a.manifest.name.cmp(&b.manifest.name));
        entries
    }

    /// Toggle a plugin's enabled status.
    ///
    /// If `enabled` is true, sets status to `Enabled`.
    /// If `enabled` is false, sets status to `Disabled`.
    pub fn set_enabled(&mut self, name: &str, enabled: bool) -> Result<(), PrompterError> {
        let entry = self
            .entries
            .get_mut(name)
            .ok_or_else(|| PrompterError::PluginNotFound {
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

/// Initializes the plugin registry with the built-in catalog.
///
/// Each plugin in the catalog is registered with a status determined by the
/// `disabled` name list. By default, all compiled-in plugins are enabled.
pub fn initialize_plugin_registry(disabled: &[String]) -> PluginRegistry {
    let mut registry = PluginRegistry::new();
    let catalog = builtin_catalog();

    for name in disabled {
        if !catalog.iter().any(|m| &m.name == name) {
            warn!(plugin = %name, "disabled list names an unknown plugin");
        }
    }

    for manifest in catalog {
        let status = if disabled.iter().any(|n| n == &manifest.name) {
            PluginStatus::Disabled
        } else {
            PluginStatus::Enabled
        };
        registry.register_with_status(manifest, status);
    }

    info!(count = registry.len(), "plugin registry initialized");
    registry
}
