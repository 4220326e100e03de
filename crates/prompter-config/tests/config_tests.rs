// SPDX-FileCopyrightText: 2026 Prompter Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the Prompter configuration system.

use prompter_config::diagnostic::{suggest_key, ConfigError};
use prompter_config::loader::{load_config, load_config_from_path};
use prompter_config::model::PrompterConfig;
use prompter_config::{load_and_validate_str, load_config_from_str};

/// Valid TOML with all known fields deserializes successfully.
#[test]
fn valid_toml_deserializes_into_prompter_config() {
    let toml = r#"
[host]
name = "test-host"
log_level = "debug"

[plugins]
disabled = ["app_prompter"]
"#;

    let config = load_config_from_str(toml).expect("valid TOML should deserialize");
    assert_eq!(config.host.name, "test-host");
    assert_eq!(config.host.log_level, "debug");
    assert_eq!(config.plugins.disabled, vec!["app_prompter"]);
}

/// Unknown field in [host] section produces an error.
#[test]
fn unknown_field_in_host_produces_error() {
    let toml = r#"
[host]
naem = "test"
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    // Figment wraps serde's deny_unknown_fields error
    assert!(
        err_str.contains("unknown field") || err_str.contains("naem"),
        "error should mention unknown field or the bad key, got: {err_str}"
    );
}

/// Unknown field in [plugins] section produces an error.
#[test]
fn unknown_field_in_plugins_produces_error() {
    let toml = r#"
[plugins]
disbled = ["app_prompter"]
"#;

    let err = load_config_from_str(toml).expect_err("should reject unknown field");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("disbled"),
        "error should mention unknown field, got: {err_str}"
    );
}

/// Missing optional sections use defaults without error.
#[test]
fn missing_optional_sections_use_defaults() {
    let toml = "";
    let config = load_config_from_str(toml).expect("empty TOML should use defaults");

    assert_eq!(config.host.name, "prompter");
    assert_eq!(config.host.log_level, "info");
    assert!(config.plugins.disabled.is_empty());
}

/// An override provider takes precedence over host.name in TOML.
#[test]
fn override_provider_beats_toml_value() {
    use figment::{
        providers::{Format, Serialized, Toml},
        Figment,
    };

    let toml_content = r#"
[host]
name = "from-toml"
"#;

    // Simulate PROMPTER_HOST_NAME by merging an override after the TOML layer
    let config: PrompterConfig = Figment::new()
        .merge(Serialized::defaults(PrompterConfig::default()))
        .merge(Toml::string(toml_content))
        .merge(("host.name", "envtest"))
        .extract()
        .expect("should merge override");

    assert_eq!(config.host.name, "envtest");
}

/// Dot notation maps to host.log_level (NOT host.log.level).
#[test]
fn override_maps_to_log_level_key() {
    use figment::{providers::Serialized, Figment};

    let config: PrompterConfig = Figment::new()
        .merge(Serialized::defaults(PrompterConfig::default()))
        .merge(("host.log_level", "trace"))
        .extract()
        .expect("should set log_level via dot notation");

    assert_eq!(config.host.log_level, "trace");
}

/// A real `PROMPTER_*` variable reaches the nested key through load_config.
#[test]
fn env_var_maps_to_host_log_level() {
    use figment::Jail;

    Jail::expect_with(|jail| {
        jail.set_env("PROMPTER_HOST_LOG_LEVEL", "trace");

        let config = load_config()?;
        assert_eq!(config.host.log_level, "trace");
        Ok(())
    });
}

/// The env layer merges after the local TOML file.
#[test]
fn env_var_beats_local_toml_file() {
    use figment::Jail;

    Jail::expect_with(|jail| {
        jail.create_file(
            "prompter.toml",
            r#"
[host]
name = "from-toml"
log_level = "debug"
"#,
        )?;
        jail.set_env("PROMPTER_HOST_NAME", "from-env");

        let config = load_config()?;
        assert_eq!(config.host.name, "from-env");
        // Keys the environment leaves alone still come from the file
        assert_eq!(config.host.log_level, "debug");
        Ok(())
    });
}

/// Serialized defaults provide sensible values for all fields.
#[test]
fn serialized_defaults_are_sensible() {
    let config = PrompterConfig::default();

    assert_eq!(config.host.name, "prompter");
    assert_eq!(config.host.log_level, "info");
    assert!(config.plugins.disabled.is_empty());
}

/// Missing config files are silently skipped (Figment's Toml::file() behavior).
#[test]
fn missing_config_files_silently_skipped() {
    use figment::{
        providers::{Format, Serialized, Toml},
        Figment,
    };

    let config: PrompterConfig = Figment::new()
        .merge(Serialized::defaults(PrompterConfig::default()))
        .merge(Toml::file("/nonexistent/path/prompter.toml"))
        .extract()
        .expect("missing file should be silently skipped");

    // Should just get defaults
    assert_eq!(config.host.name, "prompter");
}

/// A config file on disk is read and merged over the defaults.
#[test]
fn load_from_path_reads_the_file() {
    let dir = tempfile::tempdir().expect("should create temp dir");
    let path = dir.path().join("prompter.toml");
    std::fs::write(
        &path,
        r#"
[host]
name = "from-disk"

[plugins]
disabled = ["app_prompter"]
"#,
    )
    .expect("should write config file");

    let config = load_config_from_path(&path).expect("file should load");
    assert_eq!(config.host.name, "from-disk");
    assert_eq!(config.plugins.disabled, vec!["app_prompter"]);
    // Untouched fields keep their defaults
    assert_eq!(config.host.log_level, "info");
}

/// Unexpected top-level section is rejected by deny_unknown_fields.
#[test]
fn deny_unknown_fields_at_top_level() {
    let toml = r#"
[logging]
level = "debug"
"#;

    let err = load_config_from_str(toml).expect_err("unknown top-level section should be rejected");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("unknown field") || err_str.contains("logging"),
        "error should mention unknown field, got: {err_str}"
    );
}

// ============================================================================
// Diagnostic tests
// ============================================================================

/// Unknown key "naem" in [host] produces suggestion "did you mean `name`?"
#[test]
fn diagnostic_naem_suggests_name() {
    let valid_keys = &["name", "log_level"];
    let suggestion = suggest_key("naem", valid_keys);
    assert_eq!(suggestion, Some("name".to_string()));
}

/// Unknown key "zzzzzz" with no close match does NOT produce a suggestion.
#[test]
fn diagnostic_no_suggestion_for_distant_typo() {
    let valid_keys = &["name", "log_level"];
    let suggestion = suggest_key("zzzzzz", valid_keys);
    assert!(suggestion.is_none(), "should not suggest for distant typo");
}

/// Error output from load_and_validate_str includes the unknown key name.
#[test]
fn diagnostic_error_includes_unknown_key() {
    let toml = r#"
[host]
naem = "test"
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    assert!(!errors.is_empty(), "should have at least one error");

    let has_unknown_key = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { key, suggestion, valid_keys, .. } if {
            key == "naem"
                && suggestion.as_deref() == Some("name")
                && valid_keys.contains("name")
        })
    });
    assert!(
        has_unknown_key,
        "should have UnknownKey error for 'naem' with suggestion 'name', got: {errors:?}"
    );
}

/// Error output includes the list of valid keys for the section.
#[test]
fn diagnostic_error_includes_valid_keys() {
    let toml = r#"
[host]
naem = "test"
"#;

    let errors = load_and_validate_str(toml).expect_err("should produce errors");
    let has_valid_keys = errors.iter().any(|e| {
        matches!(e, ConfigError::UnknownKey { valid_keys, .. } if {
            valid_keys.contains("name") && valid_keys.contains("log_level")
        })
    });
    assert!(
        has_valid_keys,
        "error should list valid keys for [host] section"
    );
}

/// Invalid type (string where list expected) produces clear message.
#[test]
fn diagnostic_invalid_type_message() {
    let toml = r#"
[plugins]
disabled = "app_prompter"
"#;

    let err = load_config_from_str(toml).expect_err("should reject invalid type");
    let err_str = format!("{err}");
    assert!(
        err_str.contains("invalid type") || err_str.contains("disabled"),
        "error should mention type mismatch, got: {err_str}"
    );
}

/// ConfigError implements miette::Diagnostic (can be rendered).
#[test]
fn config_error_implements_diagnostic() {
    use miette::Diagnostic;

    let error = ConfigError::UnknownKey {
        key: "naem".to_string(),
        suggestion: Some("name".to_string()),
        valid_keys: "name, log_level".to_string(),
        span: None,
        src: None,
    };

    let code = error.code();
    assert!(code.is_some(), "should have diagnostic code");

    let help = error.help();
    assert!(help.is_some(), "should have help text");
    let help_str = help.unwrap().to_string();
    assert!(
        help_str.contains("did you mean `name`"),
        "help should contain suggestion, got: {help_str}"
    );
}

/// ConfigError can be rendered using miette's graphical handler.
#[test]
fn config_error_renders_with_miette() {
    use miette::GraphicalReportHandler;

    let error = ConfigError::UnknownKey {
        key: "naem".to_string(),
        suggestion: Some("name".to_string()),
        valid_keys: "name, log_level".to_string(),
        span: None,
        src: None,
    };

    let handler = GraphicalReportHandler::new();
    let mut buf = String::new();
    handler
        .render_report(&mut buf, &error)
        .expect("should render without error");
    assert!(!buf.is_empty(), "rendered report should not be empty");
    assert!(buf.contains("naem"), "rendered report should mention the key");
}

/// load_and_validate_str with valid TOML returns Ok config.
#[test]
fn load_and_validate_valid_toml() {
    let toml = r#"
[host]
name = "test"
"#;

    let config = load_and_validate_str(toml).expect("valid TOML should validate");
    assert_eq!(config.host.name, "test");
}

/// Validation catches an unrecognized log level.
#[test]
fn validation_catches_bad_log_level() {
    let toml = r#"
[host]
log_level = "loud"
"#;

    let errors = load_and_validate_str(toml).expect_err("bad log level should fail");
    let has_validation_error = errors.iter().any(|e| {
        matches!(e, ConfigError::Validation { message } if message.contains("log_level"))
    });
    assert!(
        has_validation_error,
        "should have validation error for bad log level"
    );
}

/// Validation catches duplicate disabled plugin names.
#[test]
fn validation_catches_duplicate_disabled_names() {
    let toml = r#"
[plugins]
disabled = ["app_prompter", "app_prompter"]
"#;

    let errors = load_and_validate_str(toml).expect_err("duplicates should fail");
    let has_validation_error = errors.iter().any(|e| {
        matches!(e, ConfigError::Validation { message } if message.contains("duplicate plugin name"))
    });
    assert!(
        has_validation_error,
        "should have validation error for duplicate disabled names"
    );
}
