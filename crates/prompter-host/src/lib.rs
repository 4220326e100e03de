// SPDX-FileCopyrightText: 2026 Prompter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-process messenger, plugin registry, manifest parser, and built-in
//! catalog.
//!
//! The host side of Prompter: `LocalMessenger` routes method calls to
//! channel handlers, while the plugin system tracks the compiled-in plugins
//! through a registry pattern. Each plugin has a manifest describing its
//! metadata, channel, and capabilities.

pub mod catalog;
pub mod manifest;
pub mod messenger;
pub mod registry;

pub use catalog::{builtin_catalog, search_catalog};
pub use manifest::{parse_plugin_manifest, PluginManifest};
pub use messenger::LocalMessenger;
pub use registry::{initialize_plugin_registry, PluginEntry, PluginRegistry, PluginStatus};
