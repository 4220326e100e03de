// SPDX-FileCopyrightText: 2026 Prompter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Prompter host toolkit.

use thiserror::Error;

/// The primary error type used across the Prompter traits and host operations.
#[derive(Debug, Error)]
pub enum PrompterError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// A call was dispatched on a channel with no registered handler.
    #[error("no handler registered for channel `{channel}`")]
    ChannelNotFound { channel: String },

    /// A handler failed while answering a call on its channel.
    #[error("handler error on channel `{channel}`: {message}")]
    Handler {
        channel: String,
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Requested plugin was not found in the registry.
    #[error("plugin not found: {name}")]
    PluginNotFound { name: String },

    /// Call arguments could not be parsed or encoded.
    #[error("invalid call arguments: {0}")]
    InvalidArguments(String),

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
