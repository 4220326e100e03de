// SPDX-FileCopyrightText: 2026 Prompter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Prompter host.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Top-level Prompter configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PrompterConfig {
    /// Host identity and logging settings.
    #[serde(default)]
    pub host: HostConfig,

    /// Plugin enablement settings.
    #[serde(default)]
    pub plugins: PluginsConfig,
}

/// Host identity and logging configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct HostConfig {
    /// Display name of the host.
    #[serde(default = "default_host_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            name: default_host_name(),
            log_level: default_log_level(),
        }
    }
}

fn default_host_name() -> String {
    "prompter".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Plugin enablement configuration.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct PluginsConfig {
    /// Names of built-in plugins to disable.
    #[serde(default)]
    pub disabled: Vec<String>,
}

/// The log levels `host.log_level` accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}
