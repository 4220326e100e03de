// SPDX-FileCopyrightText: 2026 Prompter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process method-channel messenger.
//!
//! `LocalMessenger` routes method calls to handlers keyed by channel name.
//! Each channel has at most one receiver at any time; setting a handler on
//! an occupied channel replaces the previous receiver.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use prompter_core::{CallReply, Messenger, MethodCall, MethodCallHandler, PrompterError};
use tracing::debug;

type HandlerMap = HashMap<String, Arc<dyn MethodCallHandler>>;

/// An in-process [`Messenger`] backed by a channel-to-handler map.
///
/// The map lock is taken only to look up or mutate registrations; it is
/// never held across a handler await, so handlers are free to call back
/// into the messenger.
pub struct LocalMessenger {
    handlers: RwLock<HandlerMap>,
}

impl LocalMessenger {
    /// Creates a messenger with no channels bound.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
        }
    }

    /// Dispatches a call to the handler registered for `channel`.
    ///
    /// Returns [`PrompterError::ChannelNotFound`] when the channel has no
    /// receiver.
    pub async fn invoke(
        &self,
        channel: &str,
        call: MethodCall,
    ) -> Result<CallReply, PrompterError> {
        let handler = self.read_handlers().get(channel).cloned();
        let Some(handler) = handler else {
            return Err(PrompterError::ChannelNotFound {
                channel: channel.to_string(),
            });
        };
        debug!(channel = %channel, method = %call.method, "dispatching method call");
        handler.handle(call).await
    }

    /// Returns true if `channel` currently has a receiver.
    pub fn has_handler(&self, channel: &str) -> bool {
        self.read_handlers().contains_key(channel)
    }

    /// Lists the bound channel names, sorted.
    pub fn channels(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read_handlers().keys().cloned().collect();
        names.sort();
        names
    }

    fn read_handlers(&self) -> std::sync::RwLockReadGuard<'_, HandlerMap> {
        self.handlers.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_handlers(&self) -> std::sync::RwLockWriteGuard<'_, HandlerMap> {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for LocalMessenger {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for LocalMessenger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalMessenger")
            .field("channels", &self.channels())
            .finish()
    }
}

impl Messenger for LocalMessenger {
    fn set_handler(&self, channel: &str, handler: Arc<dyn MethodCallHandler>) {
        let replaced = self
            .write_handlers()
            .insert(channel.to_string(), handler)
            .is_some();
        debug!(channel = %channel, replaced, "handler registered");
    }

    fn clear_handler(&self, channel: &str) {
        if self.write_handlers().remove(channel).is_some() {
            debug!(channel = %channel, "handler cleared");
        }
    }
}
