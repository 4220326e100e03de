// SPDX-FileCopyrightText: 2026 Prompter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Prompter integration tests.
//!
//! Provides mock messengers, canned handlers and a test harness for fast,
//! deterministic, CI-runnable tests without a real platform host.
//!
//! # Components
//!
//! - [`MockMessenger`] - Records handler bindings for registration assertions
//! - [`StaticHandler`], [`EchoHandler`], [`FailingHandler`] - Canned handlers
//! - [`TestHarness`] - Messenger + registry assembled for end-to-end tests

pub mod handlers;
pub mod harness;
pub mod mock_messenger;

pub use handlers::{EchoHandler, FailingHandler, StaticHandler};
pub use harness::TestHarness;
pub use mock_messenger::{BindingEvent, MockMessenger};
