// SPDX-FileCopyrightText: 2026 Prompter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `prompter doctor` command implementation.
//!
//! Runs diagnostic checks against the Prompter environment: configuration
//! validity, the platform version query, and a register + invoke roundtrip
//! on the version plugin's channel.

use std::io::IsTerminal;
use std::time::Instant;

use prompter_config::model::PrompterConfig;
use prompter_core::{MethodCall, PrompterError};
use prompter_host::LocalMessenger;
use prompter_platform::{AppPrompter, CHANNEL};

/// Status of a diagnostic check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckStatus {
    /// Check passed successfully.
    Pass,
    /// Check passed with a warning.
    Warn,
    /// Check failed.
    Fail,
}

/// Result of a single diagnostic check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check.
    pub name: String,
    /// Check status.
    pub status: CheckStatus,
    /// Human-readable message.
    pub message: String,
    /// Duration the check took.
    pub duration: std::time::Duration,
}

/// Runs the `prompter doctor` command.
///
/// With `--plain`, disables colored output.
pub async fn run_doctor(config: &PrompterConfig, plain: bool) -> Result<(), PrompterError> {
    let use_color = !plain && std::io::stdout().is_terminal();

    let results = vec![
        check_config().await,
        check_os_version().await,
        check_roundtrip(config).await,
    ];

    println!();
    println!("  prompter doctor");
    println!("  {}", "-".repeat(50));

    let mut fail_count = 0;
    let mut warn_count = 0;

    for result in &results {
        let duration_ms = result.duration.as_millis();
        let line;

        match result.status {
            CheckStatus::Pass => {
                if use_color {
                    use colored::Colorize;
                    let symbol = "✓".green().to_string();
                    line = format!(
                        "    {symbol} {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    );
                } else {
                    line = format!(
                        "    [OK]   {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    );
                }
            }
            CheckStatus::Warn => {
                warn_count += 1;
                if use_color {
                    use colored::Colorize;
                    let symbol = "!".yellow().to_string();
                    line = format!(
                        "    {symbol} {:<20} {} ({duration_ms}ms)",
                        result.name,
                        result.message.yellow()
                    );
                } else {
                    line = format!(
                        "    [WARN] {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    );
                }
            }
            CheckStatus::Fail => {
                fail_count += 1;
                if use_color {
                    use colored::Colorize;
                    let symbol = "✗".red().to_string();
                    line = format!(
                        "    {symbol} {:<20} {} ({duration_ms}ms)",
                        result.name,
                        result.message.red()
                    );
                } else {
                    line = format!(
                        "    [FAIL] {:<20} {} ({duration_ms}ms)",
                        result.name, result.message
                    );
                }
            }
        }

        println!("{line}");
    }

    println!();

    if fail_count > 0 || warn_count > 0 {
        let issues = fail_count + warn_count;
        let issue_word = if issues == 1 { "issue" } else { "issues" };
        println!("  {issues} {issue_word} found.");
    } else {
        println!("  All checks passed.");
    }

    println!();

    Ok(())
}

/// Check configuration loads without errors.
async fn check_config() -> CheckResult {
    let start = Instant::now();
    match prompter_config::load_and_validate() {
        Ok(_) => CheckResult {
            name: "Configuration".to_string(),
            status: CheckStatus::Pass,
            message: "valid".to_string(),
            duration: start.elapsed(),
        },
        Err(errors) => CheckResult {
            name: "Configuration".to_string(),
            status: CheckStatus::Fail,
            message: format!("{} error(s)", errors.len()),
            duration: start.elapsed(),
        },
    }
}

/// Check the host answers the OS version query with a usable string.
async fn check_os_version() -> CheckResult {
    let start = Instant::now();
    let version = prompter_platform::os::platform_version_string();

    if version.ends_with("unknown") {
        CheckResult {
            name: "OS version".to_string(),
            status: CheckStatus::Warn,
            message: format!("{version} (no version source on this host)"),
            duration: start.elapsed(),
        }
    } else {
        CheckResult {
            name: "OS version".to_string(),
            status: CheckStatus::Pass,
            message: version,
            duration: start.elapsed(),
        }
    }
}

/// Check a register + invoke roundtrip on the version plugin's channel.
async fn check_roundtrip(config: &PrompterConfig) -> CheckResult {
    let start = Instant::now();

    if config.plugins.disabled.iter().any(|n| n == "app_prompter") {
        return CheckResult {
            name: "Channel roundtrip".to_string(),
            status: CheckStatus::Warn,
            message: "version plugin disabled by configuration (skipped)".to_string(),
            duration: start.elapsed(),
        };
    }

    let messenger = LocalMessenger::new();
    AppPrompter::register(&messenger);

    match messenger.invoke(CHANNEL, MethodCall::new("doctor")).await {
        Ok(reply) => CheckResult {
            name: "Channel roundtrip".to_string(),
            status: CheckStatus::Pass,
            message: reply.to_string(),
            duration: start.elapsed(),
        },
        Err(e) => CheckResult {
            name: "Channel roundtrip".to_string(),
            status: CheckStatus::Fail,
            message: format!("invoke failed: {e}"),
            duration: start.elapsed(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn check_result_has_required_fields() {
        let result = CheckResult {
            name: "test".to_string(),
            status: CheckStatus::Pass,
            message: "ok".to_string(),
            duration: Duration::from_millis(5),
        };
        assert_eq!(result.name, "test");
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.message, "ok");
        assert_eq!(result.duration.as_millis(), 5);
    }

    #[test]
    fn check_status_equality() {
        assert_eq!(CheckStatus::Pass, CheckStatus::Pass);
        assert_eq!(CheckStatus::Warn, CheckStatus::Warn);
        assert_ne!(CheckStatus::Pass, CheckStatus::Fail);
    }

    #[tokio::test]
    async fn check_config_passes_with_defaults() {
        let result = check_config().await;
        assert_eq!(result.status, CheckStatus::Pass);
        assert_eq!(result.name, "Configuration");
    }

    #[tokio::test]
    async fn check_os_version_reports_a_string() {
        let result = check_os_version().await;
        assert!(!result.message.is_empty());
        assert!(result.status == CheckStatus::Pass || result.status == CheckStatus::Warn);
    }

    #[tokio::test]
    async fn check_roundtrip_passes_with_defaults() {
        let config = PrompterConfig::default();
        let result = check_roundtrip(&config).await;
        assert_eq!(result.status, CheckStatus::Pass);
        // The roundtrip reply is the version plugin's response
        assert!(result.message.contains(' '));
    }

    #[tokio::test]
    async fn check_roundtrip_warns_when_disabled() {
        let config = PrompterConfig {
            plugins: prompter_config::model::PluginsConfig {
                disabled: vec!["app_prompter".to_string()],
            },
            ..PrompterConfig::default()
        };
        let result = check_roundtrip(&config).await;
        assert_eq!(result.status, CheckStatus::Warn);
        assert!(result.message.contains("disabled"));
    }
}
