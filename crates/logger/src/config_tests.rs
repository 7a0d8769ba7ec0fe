// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serial_test::serial;

fn clear_env() {
    std::env::remove_var("TWINE_LOG_THRESHOLD");
    std::env::remove_var("TWINE_LOG_FILE");
    std::env::remove_var("TWINE_LOG_TIMEOUT_MS");
}

#[test]
fn defaults() {
    let config = LoggerConfig::default();

    assert_eq!(config.name, "Logger");
    assert_eq!(config.threshold, LogLevel::Info);
    assert!(config.use_color);
    assert!(config.announce);
    assert_eq!(config.timeout(), Duration::from_millis(5000));
    assert_eq!(config.start_stop_timeout(), Duration::from_millis(2000));
    assert_eq!(config.file, None);
    assert!(!config.echo_stdout);
}

#[test]
fn empty_toml_yields_defaults() {
    assert_eq!(
        LoggerConfig::from_toml_str("").unwrap(),
        LoggerConfig::default()
    );
}

#[test]
fn parses_full_toml() {
    let config = LoggerConfig::from_toml_str(
        r#"
name = "audit"
threshold = "WARN"
use_color = false
timeout_ms = 250
start_stop_timeout_ms = 500
announce = false
file = "/tmp/audit.log"
echo_stdout = true
"#,
    )
    .unwrap();

    assert_eq!(config.name, "audit");
    assert_eq!(config.threshold, LogLevel::Warn);
    assert!(!config.use_color);
    assert_eq!(config.timeout(), Duration::from_millis(250));
    assert!(!config.announce);
    assert_eq!(config.file, Some(PathBuf::from("/tmp/audit.log")));
    assert!(config.echo_stdout);

    let worker = config.worker_config();
    assert_eq!(worker.name, "audit");
    assert_eq!(worker.mode, StartStopMode::Sync);
    assert_eq!(worker.start_stop_timeout, Duration::from_millis(500));
}

#[test]
fn rejects_unknown_level() {
    let err = LoggerConfig::from_toml_str(r#"threshold = "chatty""#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().contains("chatty"));
}

#[test]
fn rejects_unknown_field() {
    assert!(LoggerConfig::from_toml_str("colour = true").is_err());
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.toml");

    let err = LoggerConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Read { .. }));
}

#[test]
fn load_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("twine.toml");
    std::fs::write(&path, "threshold = \"debug\"\n").unwrap();

    assert_eq!(LoggerConfig::load(&path).unwrap().threshold, LogLevel::Debug);
}

#[test]
#[serial]
fn env_overrides_apply() {
    clear_env();
    std::env::set_var("TWINE_LOG_THRESHOLD", "error");
    std::env::set_var("TWINE_LOG_FILE", "/tmp/from-env.log");
    std::env::set_var("TWINE_LOG_TIMEOUT_MS", "40");

    let config = LoggerConfig::from_env();
    clear_env();

    assert_eq!(config.threshold, LogLevel::Error);
    assert_eq!(config.file, Some(PathBuf::from("/tmp/from-env.log")));
    assert_eq!(config.timeout(), Duration::from_millis(40));
}

#[test]
#[serial]
fn invalid_env_threshold_is_ignored() {
    clear_env();
    std::env::set_var("TWINE_LOG_THRESHOLD", "shouty");

    let config = LoggerConfig::from_env();
    clear_env();

    assert_eq!(config.threshold, LogLevel::Info);
}
