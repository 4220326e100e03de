// SPDX-FileCopyrightText: 2026 Prompter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `prompter plugins` command implementation.
//!
//! Lists the built-in plugin catalog with per-entry status after the
//! user's disabled list is applied. Supports `--search` filtering and
//! `--json` output for scripting.

use std::io::IsTerminal;

use prompter_config::model::PrompterConfig;
use prompter_core::PrompterError;
use prompter_host::{initialize_plugin_registry, search_catalog, PluginStatus};
use serde::Serialize;

/// One row of `prompter plugins` output in `--json` mode.
#[derive(Debug, Serialize)]
pub struct PluginRow {
    pub name: String,
    pub version: String,
    pub channel: String,
    pub status: String,
    pub description: String,
}

/// Collects catalog entries matching `search`, annotated with registry status.
fn collect_rows(config: &PrompterConfig, search: Option<&str>) -> Vec<PluginRow> {
    let registry = initialize_plugin_registry(&config.plugins.disabled);

    search_catalog(search.unwrap_or(""))
        .iter()
        .map(|manifest| {
            let status = match registry.get(&manifest.name) {
                Some(entry) => entry.status,
                None => PluginStatus::Enabled,
            };
            PluginRow {
                name: manifest.name.clone(),
                version: manifest.version.clone(),
                channel: manifest.channel.clone(),
                status: status.to_string(),
                description: manifest.description.clone(),
            }
        })
        .collect()
}

/// Runs the `prompter plugins` command.
pub fn run_plugins(
    config: &PrompterConfig,
    search: Option<&str>,
    json: bool,
) -> Result<(), PrompterError> {
    let rows = collect_rows(config, search);

    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).unwrap_or_else(|_| "[]".to_string())
        );
        return Ok(());
    }

    if rows.is_empty() {
        println!("no plugins match");
        return Ok(());
    }

    let use_color = std::io::stdout().is_terminal();

    println!();
    println!("  prompter plugins");
    println!("  {}", "-".repeat(60));

    for row in &rows {
        let status = if use_color {
            use colored::Colorize;
            if row.status == "enabled" {
                row.status.green().to_string()
            } else {
                row.status.yellow().to_string()
            }
        } else {
            format!("[{}]", row.status)
        };
        println!(
            "    {:<14} {:<8} {:<10} {}",
            row.name, row.version, status, row.description
        );
        println!("    {:<14} channel: {}", "", row.channel);
    }

    println!();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collect_rows_lists_the_builtin_plugin() {
        let config = PrompterConfig::default();
        let rows = collect_rows(&config, None);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "app_prompter");
        assert_eq!(rows[0].channel, "app_prompter");
        assert_eq!(rows[0].status, "enabled");
    }

    #[test]
    fn collect_rows_reflects_disabled_status() {
        let config = PrompterConfig {
            plugins: prompter_config::model::PluginsConfig {
                disabled: vec!["app_prompter".to_string()],
            },
            ..PrompterConfig::default()
        };
        let rows = collect_rows(&config, None);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].status, "disabled");
    }

    #[test]
    fn collect_rows_filters_by_search() {
        let config = PrompterConfig::default();

        let hit = collect_rows(&config, Some("version"));
        assert_eq!(hit.len(), 1);

        let miss = collect_rows(&config, Some("zzzzzz"));
        assert!(miss.is_empty());
    }

    #[test]
    fn plugin_row_serializes() {
        let row = PluginRow {
            name: "app_prompter".to_string(),
            version: "0.1.0".to_string(),
            channel: "app_prompter".to_string(),
            status: "enabled".to_string(),
            description: "test".to_string(),
        };
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"name\":\"app_prompter\""));
        assert!(json.contains("\"status\":\"enabled\""));
    }
}
