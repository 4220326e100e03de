// SPDX-FileCopyrightText: 2026 Prompter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end integration testing.
//!
//! `TestHarness` assembles a live messenger and a plugin registry seeded
//! from the built-in catalog, registering every enabled built-in plugin.
//! Provides `invoke()` to drive calls through the same dispatch path the
//! CLI uses.

use std::sync::Arc;

use prompter_core::{CallReply, Messenger, MethodCall, MethodCallHandler, PrompterError};
use prompter_host::{initialize_plugin_registry, LocalMessenger, PluginRegistry};
use prompter_platform::AppPrompter;

/// Builder for assembling a test environment.
pub struct TestHarnessBuilder {
    disabled: Vec<String>,
    extra_handlers: Vec<(String, Arc<dyn MethodCallHandler>)>,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            disabled: Vec::new(),
            extra_handlers: Vec::new(),
        }
    }

    /// Mark plugin names as disabled before the registry is seeded.
    pub fn with_disabled(mut self, names: Vec<String>) -> Self {
        self.disabled = names;
        self
    }

    /// Bind an extra handler to `channel` after the built-ins register.
    pub fn with_handler(
        mut self,
        channel: impl Into<String>,
        handler: Arc<dyn MethodCallHandler>,
    ) -> Self {
        self.extra_handlers.push((channel.into(), handler));
        self
    }

    /// Build the harness, registering every enabled built-in plugin.
    pub fn build(self) -> TestHarness {
        let messenger = Arc::new(LocalMessenger::new());
        let registry = initialize_plugin_registry(&self.disabled);

        let version_plugin = registry
            .is_enabled("app_prompter")
            .then(|| AppPrompter::register(messenger.as_ref()));

        for (channel, handler) in self.extra_handlers {
            messenger.set_handler(&channel, handler);
        }

        TestHarness {
            messenger,
            registry,
            version_plugin,
        }
    }
}

/// A complete test environment with a live messenger and seeded registry.
pub struct TestHarness {
    /// The messenger every handler is bound to.
    pub messenger: Arc<LocalMessenger>,
    /// Plugin registry seeded from the built-in catalog.
    pub registry: PluginRegistry,
    /// The version plugin, present unless disabled by the builder.
    pub version_plugin: Option<Arc<AppPrompter>>,
}

impl TestHarness {
    /// Create a new builder for configuring the test harness.
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Dispatch a call to whatever handler is bound on `channel`.
    pub async fn invoke(&self, channel: &str, call: MethodCall) -> Result<CallReply, PrompterError> {
        self.messenger.invoke(channel, call).await
    }

    /// Dispatch a call with the given method name and no arguments.
    pub async fn call(&self, channel: &str, method: &str) -> Result<CallReply, PrompterError> {
        self.invoke(channel, MethodCall::new(method)).await
    }
}
