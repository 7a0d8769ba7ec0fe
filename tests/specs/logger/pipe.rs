//! `twine pipe` specs: stdin lines become log records on stdout.

use crate::prelude::*;

#[test]
fn each_stdin_line_becomes_one_record() {
    let run = cli()
        .args(&["pipe", "--no-announce"])
        .stdin("first line\nsecond line\n")
        .passes()
        .messages_eq(&["first line", "second line"]);

    let records = run.records();
    assert_eq!(records[0].level, 2);
    assert_eq!(records[0].sequence, 0);
    assert_eq!(records[1].sequence, 1);
    assert_eq!(records[0].caller, records[1].caller);
}

#[test]
fn empty_lines_are_not_logged() {
    cli()
        .args(&["pipe", "--no-announce"])
        .stdin("a\n\nb\n")
        .passes()
        .messages_eq(&["a", "b"]);
}

#[test]
fn session_is_framed_by_announcements() {
    let run = cli()
        .args(&["pipe"])
        .stdin("payload\n")
        .passes()
        .messages_eq(&["Hello!", "payload", "Bye Bye!"]);

    let levels: Vec<u8> = run.records().iter().map(|r| r.level).collect();
    assert_eq!(levels, vec![6, 2, 6]);
}

#[test]
fn threshold_drops_lower_levels() {
    cli()
        .args(&["pipe", "--no-announce", "--threshold", "warn"])
        .stdin("ignored\n")
        .passes()
        .stdout_eq("");
}

#[test]
fn level_flag_sets_record_level() {
    let run = cli()
        .args(&["pipe", "--no-announce", "--threshold", "warn", "--level", "error"])
        .stdin("kept\n")
        .passes()
        .messages_eq(&["kept"]);

    assert_eq!(run.records()[0].level, 4);
}

#[test]
fn threshold_from_environment() {
    cli()
        .args(&["pipe", "--no-announce"])
        .env("TWINE_LOG_THRESHOLD", "error")
        .stdin("quiet\n")
        .passes()
        .stdout_eq("");
}

#[test]
fn piped_output_is_never_colored() {
    cli()
        .args(&["pipe", "--no-announce", "--level", "error"])
        .stdin("plain\n")
        .passes()
        .stdout_lacks("\x1b[");
}

#[test]
fn forced_color_wraps_message() {
    cli()
        .args(&["pipe", "--no-announce", "--level", "error"])
        .env("COLOR", "1")
        .stdin("red alert\n")
        .passes()
        .stdout_has("\x1b[0;31mred alert\x1b[0m");
}

#[test]
fn no_color_flag_beats_forced_color() {
    cli()
        .args(&["pipe", "--no-announce", "--no-color"])
        .env("COLOR", "1")
        .stdin("plain\n")
        .passes()
        .stdout_lacks("\x1b[");
}
