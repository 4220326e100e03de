// SPDX-FileCopyrightText: 2026 Prompter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Canned method-call handlers for deterministic testing.
//!
//! Each handler exercises one dispatch path: `StaticHandler` for the happy
//! path, `EchoHandler` for payload fidelity, `FailingHandler` for the error
//! path.

use async_trait::async_trait;
use serde_json::json;

use prompter_core::{CallReply, MethodCall, MethodCallHandler, PrompterError};

/// Replies with a fixed text no matter what the call contains.
pub struct StaticHandler {
    reply: String,
}

impl StaticHandler {
    /// Create a handler that always replies with `reply`.
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
        }
    }
}

#[async_trait]
impl MethodCallHandler for StaticHandler {
    async fn handle(&self, _call: MethodCall) -> Result<CallReply, PrompterError> {
        Ok(CallReply::text(self.reply.clone()))
    }
}

/// Echoes the received call back as a JSON object.
///
/// The reply carries `method` and `arguments` fields, so tests can assert
/// the dispatch substrate delivers calls unchanged.
pub struct EchoHandler;

#[async_trait]
impl MethodCallHandler for EchoHandler {
    async fn handle(&self, call: MethodCall) -> Result<CallReply, PrompterError> {
        Ok(CallReply(json!({
            "method": call.method,
            "arguments": call.arguments,
        })))
    }
}

/// Always fails with an internal error carrying the configured message.
pub struct FailingHandler {
    message: String,
}

impl FailingHandler {
    /// Create a handler that always fails with `message`.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl MethodCallHandler for FailingHandler {
    async fn handle(&self, _call: MethodCall) -> Result<CallReply, PrompterError> {
        Err(PrompterError::Internal(self.message.clone()))
    }
}
