//! CLI help output specs

use crate::prelude::*;

#[test]
fn twine_no_args_shows_usage_and_exits_zero() {
    cli().passes().stdout_has("Usage:");
}

#[test]
fn twine_help_lists_subcommands() {
    cli()
        .args(&["--help"])
        .passes()
        .stdout_has("pipe")
        .stdout_has("demo");
}

#[test]
fn twine_pipe_help_shows_logger_flags() {
    cli()
        .args(&["pipe", "--help"])
        .passes()
        .stdout_has("--level")
        .stdout_has("--threshold")
        .stdout_has("--file")
        .stdout_has("--config");
}

#[test]
fn twine_version_shows_version() {
    cli().args(&["--version"]).passes().stdout_has("0.1");
}
