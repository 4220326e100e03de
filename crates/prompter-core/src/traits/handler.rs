// SPDX-FileCopyrightText: 2026 Prompter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Receiver trait for method calls arriving on a channel.

use async_trait::async_trait;

use crate::error::PrompterError;
use crate::types::{CallReply, MethodCall};

/// A receiver for method calls on a single channel.
///
/// Implementations answer every call with a reply or an error. Handlers are
/// shared across dispatches, so any mutable state must be interior.
#[async_trait]
pub trait MethodCallHandler: Send + Sync + 'static {
    /// Answers one incoming call.
    async fn handle(&self, call: MethodCall) -> Result<CallReply, PrompterError>;
}
