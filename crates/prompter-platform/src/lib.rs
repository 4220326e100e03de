// SPDX-FileCopyrightText: 2026 Prompter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Platform version plugin for the Prompter host.
//!
//! [`AppPrompter`] claims the `app_prompter` method channel and answers
//! every call on it with `"<platform> <version>"`, e.g. `"Linux 6.8.0"`.
//! The method name is never inspected; any call gets the same answer.

pub mod os;

use std::sync::Arc;

use async_trait::async_trait;
use prompter_core::{CallReply, Messenger, MethodCall, MethodCallHandler, PrompterError};
use tracing::debug;

/// The method channel [`AppPrompter`] claims on registration.
pub const CHANNEL: &str = "app_prompter";

/// Channel plugin answering every call with the host platform and OS version.
///
/// The response string is captured once at construction, so every call over
/// the plugin's lifetime receives the identical answer.
pub struct AppPrompter {
    response: String,
}

impl AppPrompter {
    /// Creates the plugin, capturing the platform response string.
    pub fn new() -> Self {
        Self {
            response: os::platform_version_string(),
        }
    }

    /// Creates the plugin and designates it as the exclusive receiver for
    /// [`CHANNEL`] on the given messenger.
    ///
    /// Registering again replaces the previous receiver, so the channel
    /// never has more than one.
    pub fn register(messenger: &dyn Messenger) -> Arc<Self> {
        let plugin = Arc::new(Self::new());
        messenger.set_handler(CHANNEL, plugin.clone());
        debug!(channel = CHANNEL, response = %plugin.response, "version plugin registered");
        plugin
    }

    /// The response string every call receives.
    pub fn response(&self) -> &str {
        &self.response
    }
}

impl Default for AppPrompter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MethodCallHandler for AppPrompter {
    async fn handle(&self, _call: MethodCall) -> Result<CallReply, PrompterError> {
        Ok(CallReply::text(self.response.clone()))
    }
}
