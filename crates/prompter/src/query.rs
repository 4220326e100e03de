// SPDX-FileCopyrightText: 2026 Prompter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `prompter query` command implementation.
//!
//! Builds a local messenger, registers every enabled built-in plugin on it,
//! then dispatches a single method call and prints the reply.

use std::sync::Arc;

use prompter_config::model::PrompterConfig;
use prompter_core::{MethodCall, PrompterError};
use prompter_host::{initialize_plugin_registry, LocalMessenger, PluginRegistry};
use prompter_platform::AppPrompter;
use serde_json::json;
use tracing::debug;

/// Binds every enabled built-in plugin to the messenger.
///
/// Returns how many plugins were bound. Disabled plugins stay in the
/// registry for listing but never receive calls.
fn bind_enabled_plugins(messenger: &LocalMessenger, registry: &PluginRegistry) -> usize {
    let mut bound = 0;
    if registry.is_enabled("app_prompter") {
        AppPrompter::register(messenger);
        bound += 1;
    }
    bound
}

/// Parses the `--args` value as a JSON document.
fn parse_arguments(raw: Option<&str>) -> Result<Option<serde_json::Value>, PrompterError> {
    match raw {
        Some(raw) => serde_json::from_str(raw)
            .map(Some)
            .map_err(|e| PrompterError::InvalidArguments(format!("--args is not valid JSON: {e}"))),
        None => Ok(None),
    }
}

/// Runs the `prompter query` command.
///
/// The default channel and method target the version plugin, which ignores
/// the method name and arguments and answers with the platform version.
pub async fn run_query(
    config: &PrompterConfig,
    channel: &str,
    method: &str,
    args: Option<&str>,
    json_output: bool,
) -> Result<(), PrompterError> {
    let messenger = Arc::new(LocalMessenger::new());
    let registry = initialize_plugin_registry(&config.plugins.disabled);
    let bound = bind_enabled_plugins(&messenger, &registry);
    debug!(bound, "built-in plugins registered");

    let mut call = MethodCall::new(method);
    if let Some(arguments) = parse_arguments(args)? {
        call = call.with_arguments(arguments);
    }

    let reply = messenger.invoke(channel, call).await?;

    if json_output {
        let envelope = json!({
            "channel": channel,
            "method": method,
            "reply": reply,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&envelope).unwrap_or_else(|_| "{}".to_string())
        );
    } else {
        println!("{reply}");
    }

    Ok(())
}
