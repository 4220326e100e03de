// SPDX-FileCopyrightText: 2026 Prompter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock messenger for registration testing.
//!
//! `MockMessenger` implements `Messenger` and records every binding event,
//! so tests can assert the exclusive-receiver property without dispatching
//! anything.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use prompter_core::{Messenger, MethodCallHandler};

/// A binding event observed by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BindingEvent {
    /// A handler was bound to the channel, replacing any previous one.
    Bound { channel: String },
    /// The channel's handler was removed.
    Cleared { channel: String },
}

/// A mock messenger that captures handler registrations.
///
/// Unlike `LocalMessenger` it never dispatches on its own; tests pull the
/// captured handler out with [`handler_for`](MockMessenger::handler_for)
/// and drive it directly.
pub struct MockMessenger {
    handlers: RwLock<HashMap<String, Arc<dyn MethodCallHandler>>>,
    events: RwLock<Vec<BindingEvent>>,
}

impl MockMessenger {
    /// Create a new mock messenger with no bindings recorded.
    pub fn new() -> Self {
        Self {
            handlers: RwLock::new(HashMap::new()),
            events: RwLock::new(Vec::new()),
        }
    }

    /// The handler currently bound to `channel`, if any.
    pub fn handler_for(&self, channel: &str) -> Option<Arc<dyn MethodCallHandler>> {
        self.handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(channel)
            .cloned()
    }

    /// Channels with a handler bound right now, sorted by name.
    pub fn bound_channels(&self) -> Vec<String> {
        let mut channels: Vec<String> = self
            .handlers
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        channels.sort();
        channels
    }

    /// All binding events observed so far, in order.
    pub fn events(&self) -> Vec<BindingEvent> {
        self.events
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Drop the recorded events, keeping current bindings.
    pub fn clear_events(&self) {
        self.events
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }

    fn record(&self, event: BindingEvent) {
        self.events
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}

impl Default for MockMessenger {
    fn default() -> Self {
        Self::new()
    }
}

impl Messenger for MockMessenger {
    fn set_handler(&self, channel: &str, handler: Arc<dyn MethodCallHandler>) {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(channel.to_string(), handler);
        self.record(BindingEvent::Bound {
            channel: channel.to_string(),
        });
    }

    fn clear_handler(&self, channel: &str) {
        self.handlers
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(channel);
        self.record(BindingEvent::Cleared {
            channel: channel.to_string(),
        });
    }
}
