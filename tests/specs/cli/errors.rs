//! CLI error handling specs

use crate::prelude::*;

#[test]
fn unknown_level_fails_with_usage_error() {
    cli()
        .args(&["pipe", "--level", "loud"])
        .fails()
        .stderr_has("loud");
}

#[test]
fn missing_config_file_fails() {
    cli()
        .args(&["pipe", "--config", "/nonexistent/twine.toml"])
        .fails()
        .stderr_has("Error: cannot use config /nonexistent/twine.toml");
}

#[test]
fn invalid_config_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("twine.toml");
    std::fs::write(&path, "threshold = \"chatty\"\n").unwrap();

    cli()
        .args(&["pipe", "--config", path.to_str().unwrap()])
        .fails()
        .stderr_has("chatty");
}

#[test]
fn log_file_in_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("twine.log");

    cli()
        .args(&["pipe", "--file", path.to_str().unwrap()])
        .fails()
        .stderr_has("failed to open log file");
}
