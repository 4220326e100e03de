// SPDX-FileCopyrightText: 2026 Prompter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as recognized log levels and well-formed plugin name
//! lists.

use std::collections::HashSet;

use crate::diagnostic::ConfigError;
use crate::model::{LogLevel, PrompterConfig};

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &PrompterConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    // Validate host.name is not empty
    if config.host.name.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "host.name must not be empty".to_string(),
        });
    }

    // Validate host.log_level is a recognized level
    if config.host.log_level.parse::<LogLevel>().is_err() {
        errors.push(ConfigError::Validation {
            message: format!(
                "host.log_level `{}` is not a valid log level. Expected one of: trace, debug, info, warn, error",
                config.host.log_level
            ),
        });
    }

    // Validate no duplicate names in plugins.disabled
    let mut seen_names = HashSet::new();
    for name in &config.plugins.disabled {
        if !seen_names.insert(name) {
            errors.push(ConfigError::Validation {
                message: format!("duplicate plugin name `{name}` in plugins.disabled"),
            });
        }
    }

    // Validate disabled names are non-empty
    for (i, name) in config.plugins.disabled.iter().enumerate() {
        if name.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("plugins.disabled[{i}] must not be empty"),
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
