// SPDX-FileCopyrightText: 2026 Prompter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./prompter.toml` > `~/.config/prompter/prompter.toml`
//! > `/etc/prompter/prompter.toml` with environment variable overrides via
//! the `PROMPTER_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::PrompterConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/prompter/prompter.toml` (system-wide)
/// 3. `~/.config/prompter/prompter.toml` (user XDG config)
/// 4. `./prompter.toml` (local directory)
/// 5. `PROMPTER_*` environment variables
pub fn load_config() -> Result<PrompterConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PrompterConfig::default()))
        .merge(Toml::file("/etc/prompter/prompter.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("prompter/prompter.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("prompter.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup, no env vars).
///
/// Used for testing and explicit configuration.
pub fn load_config_from_str(toml_content: &str) -> Result<PrompterConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PrompterConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<PrompterConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(PrompterConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `PROMPTER_HOST_LOG_LEVEL` must map to
/// `host.log_level`, not `host.log.level`.
fn env_provider() -> Env {
    Env::prefixed("PROMPTER_").map(|key| {
        // `key` arrives with the prefix stripped but the variable's case
        // preserved; figment lowercases only after this mapper runs.
        // Example: PROMPTER_HOST_LOG_LEVEL -> "HOST_LOG_LEVEL" -> "host.log_level"
        let key_str = key.as_str().to_ascii_lowercase();
        let mapped = key_str
            .replacen("host_", "host.", 1)
            .replacen("plugins_", "plugins.", 1);
        mapped.into()
    })
}
