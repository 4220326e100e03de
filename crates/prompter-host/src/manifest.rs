// SPDX-FileCopyrightText: 2026 Prompter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Plugin manifest parsing from `plugin.toml` files.
//!
//! Plugin manifests describe channel plugins compiled into the Prompter
//! binary: their identity, the channel they claim, and the capabilities
//! they advertise.

use prompter_core::PrompterError;
use serde::{Deserialize, Serialize};

/// Parsed plugin manifest describing a channel plugin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PluginManifest {
    /// Unique name of the plugin (e.g., "app_prompter").
    pub name: String,
    /// Semantic version string.
    pub version: String,
    /// Human-readable description.
    pub description: String,
    /// The method channel this plugin claims as exclusive receiver.
    pub channel: String,
    /// Optional author identifier.
    pub author: Option<String>,
    /// Capabilities the plugin advertises (e.g., ["platform_version"]).
    pub capabilities: Vec<String>,
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
    channel: String,
    author: Option<String>,
    #[serde(default)]
    capabilities: Vec<String>,
}

/// Parse a plugin manifest from TOML content.
///
/// Validates that name, version, and channel are non-empty and that the
/// version parses as semver.
pub fn parse_plugin_manifest(toml_content: &str) -> Result<PluginManifest, PrompterError> {
    let file: PluginManifestFile = toml::from_str(toml_content)
        .map_err(|e| PrompterError::Config(format!("invalid plugin manifest: {e}")))?;

    let section = file.plugin;

    if section.name.is_empty() {
        return Err(PrompterError::Config(
            "plugin manifest: name must not be empty".to_string(),
        ));
    }

    if section.version.is_empty() {
        return Err(PrompterError::Config(
            "plugin manifest: version must not be empty".to_string(),
        ));
    }

    if section.channel.is_empty() {
        return Err(PrompterError::Config(
            "plugin manifest: channel must not be empty".to_string(),
        ));
    }

    semver::Version::parse(&section.version).map_err(|e| {
        PrompterError::Config(format!(
            "plugin manifest: version '{}' is not valid semver: {e}",
            section.version
        ))
    })?;

    Ok(PluginManifest {
        name: section.name,
        version: section.version,
        description: section.description,
        channel: section.channel,
        author: section.author,
        capabilities: section.capabilities,
    })
}
