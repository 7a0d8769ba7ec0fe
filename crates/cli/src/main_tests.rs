// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use clap::error::ErrorKind;
use clap::FromArgMatches;
use yare::parameterized;

use super::{cli_command, format_error, Cli, Commands};
use twine_logger::LogLevel;

fn parse(args: &[&str]) -> Cli {
    let matches = cli_command().try_get_matches_from(args).unwrap();
    Cli::from_arg_matches(&matches).unwrap()
}

#[test]
fn version_flag() {
    let err = cli_command()
        .try_get_matches_from(["twine", "--version"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DisplayVersion);
}

#[test]
fn pipe_defaults() {
    let Some(Commands::Pipe(args)) = parse(&["twine", "pipe"]).command else {
        panic!("expected pipe");
    };
    assert_eq!(args.level, LogLevel::Info);
    assert_eq!(args.logger.threshold, None);
    assert!(!args.logger.echo);
}

#[parameterized(
    lower = { "warn", LogLevel::Warn },
    upper = { "ERROR", LogLevel::Error },
    highlight = { "highlight", LogLevel::Highlight },
)]
fn pipe_level_parses(input: &str, expected: LogLevel) {
    let Some(Commands::Pipe(args)) =
        parse(&["twine", "pipe", "--level", input, "--threshold", input]).command
    else {
        panic!("expected pipe");
    };
    assert_eq!(args.level, expected);
    assert_eq!(args.logger.threshold, Some(expected));
}

#[test]
fn unknown_level_is_rejected() {
    let err = cli_command()
        .try_get_matches_from(["twine", "pipe", "--level", "loud"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn demo_flags() {
    let Some(Commands::Demo(args)) = parse(&[
        "twine",
        "demo",
        "--threads",
        "3",
        "--lines",
        "7",
        "--no-color",
        "--no-announce",
    ])
    .command
    else {
        panic!("expected demo");
    };
    assert_eq!(args.threads, 3);
    assert_eq!(args.lines, 7);
    assert!(args.logger.no_color);
    assert!(args.logger.no_announce);
}

#[test]
fn demo_rejects_zero_threads() {
    let err = cli_command()
        .try_get_matches_from(["twine", "demo", "--threads", "0"])
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValueValidation);
}

#[test]
fn format_error_skips_redundant_causes() {
    let err = anyhow::anyhow!("disk full").context("failed to write: disk full");
    assert_eq!(format_error(&err), "failed to write: disk full");
}

#[test]
fn format_error_keeps_new_causes() {
    let err = anyhow::anyhow!("disk full").context("failed to write");
    assert_eq!(
        format_error(&err),
        "failed to write\n\nCaused by:\n    0: disk full"
    );
}
