// SPDX-FileCopyrightText: 2026 Prompter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait definitions for the Prompter channel architecture.
//!
//! Handlers implement [`MethodCallHandler`] and use `#[async_trait]` for
//! dynamic dispatch compatibility; hosts expose a [`Messenger`] that
//! handlers register against.

pub mod handler;
pub mod messenger;

// Re-export the traits at the traits module level for convenience.
pub use handler::MethodCallHandler;
pub use messenger::Messenger;
