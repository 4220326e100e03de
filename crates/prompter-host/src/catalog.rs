// SPDX-FileCopyrightText: 2026 Prompter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Built-in plugin catalog.
//!
//! Returns hardcoded `PluginManifest` entries for the plugins compiled into
//! the Prompter binary. No network calls are made.

use crate::manifest::PluginManifest;

/// Returns manifests for all built-in plugins.
///
/// The catalog currently contains a single plugin:
/// - app_prompter (answers calls with the host platform name and OS version)
pub fn builtin_catalog() -> Vec<PluginManifest> {
    vec![PluginManifest {
        name: "app_prompter".to_string(),
        version: "0.1.0".to_string(),
        description: "Answers every call on its channel with the host platform name and OS version"
            .to_string(),
        channel: "app_prompter".to_string(),
        author: Some("Prompter Contributors".to_string()),
        capabilities: vec!["platform_version".to_string()],
    }]
}

/// Search the built-in catalog by query string.
///
/// Filters entries whose name or description contains the query (case-insensitive).
/// If query is empty, returns all entries.
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
