// SPDX-FileCopyrightText: 2026 Prompter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common call types exchanged between hosts and channel handlers.

use serde::{Deserialize, Serialize};

/// A single method invocation delivered over a named channel.
///
/// The method name travels with the call, but a handler is free to ignore
/// it; whether the name carries meaning is part of each channel's contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MethodCall {
    /// Name of the invoked method.
    pub method: String,
    /// Optional structured arguments, opaque to the dispatch layer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub arguments: Option<serde_json::Value>,
}

impl MethodCall {
    /// Creates a call with no arguments.
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments: None,
        }
    }

    /// Attaches structured arguments to the call.
    pub fn with_arguments(mut self, arguments: serde_json::Value) -> Self {
        self.arguments = Some(arguments);
        self
    }
}

/// The value a handler produces in answer to a [`MethodCall`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CallReply(pub serde_json::Value);

impl CallReply {
    /// Builds a plain-text reply.
    pub fn text(value: impl Into<String>) -> Self {
        Self(serde_json::Value::String(value.into()))
    }

    /// Returns the reply as text, if it is a string value.
    pub fn as_text(&self) -> Option<&str> {
        self.0.as_str()
    }
}

impl std::fmt::Display for CallReply {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            serde_json::Value::String(s) => f.write_str(s),
            other => write!(f, "{other}"),
        }
    }
}
