// SPDX-FileCopyrightText: 2026 Prompter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Registration surface a host exposes to channel handlers.

use std::sync::Arc;

use crate::traits::handler::MethodCallHandler;

/// The registration surface of a message host.
///
/// A messenger routes calls by channel name to at most one handler per
/// channel. Handlers receive a messenger by reference at construction time
/// and claim their channel through it; no global registry is involved.
pub trait Messenger: Send + Sync + 'static {
    /// Designates `handler` as the receiver for `channel`.
    ///
    /// If the channel already has a handler, it is replaced; a channel never
    /// has more than one receiver.
    fn set_handler(&self, channel: &str, handler: Arc<dyn MethodCallHandler>);

    /// Removes the handler for `channel`, if any.
    fn clear_handler(&self, channel: &str);
}
