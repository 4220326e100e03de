// SPDX-FileCopyrightText: 2026 Prompter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Host platform identification.

use sysinfo::System;

/// Returns the human-readable label of the platform this binary was built
/// for.
///
/// Unrecognized targets fall back to the raw `std::env::consts::OS` value,
/// so the label is never empty on any supported target.
pub fn platform_label() -> &'static str {
    match std::env::consts::OS {
        "linux" => "Linux",
        "macos" => "macOS",
        "windows" => "Windows",
        "ios" => "iOS",
        "android" => "Android",
        "freebsd" => "FreeBSD",
        other => other,
    }
}

/// Returns the host OS version string, best effort.
///
/// Falls back from the OS release to the kernel version, and to `"unknown"`
/// when the platform reports neither. The result is never empty.
pub fn os_version() -> String {
    System::os_version()
        .filter(|v| !v.is_empty())
        .or_else(|| System::kernel_version().filter(|v| !v.is_empty()))
        .unwrap_or_else(|| "unknown".to_string())
}

/// Returns the `"<platform> <version>"` string the version plugin answers
/// with, e.g. `"Linux 6.8.0"`.
pub fn platform_version_string() -> String {
    format!("{} {}", platform_label(), os_version())
}
