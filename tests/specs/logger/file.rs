//! File sink specs

use crate::prelude::*;

#[test]
fn file_receives_records_and_stdout_stays_empty() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("twine.log");

    cli()
        .args(&["pipe", "--no-announce", "--file", path.to_str().unwrap()])
        .stdin("to the file\n")
        .passes()
        .stdout_eq("");

    let content = std::fs::read_to_string(&path).unwrap();
    let record = Record::parse(content.trim_end());
    assert_eq!(record.message, "to the file");
}

#[test]
fn existing_file_is_appended() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("twine.log");
    std::fs::write(&path, "earlier\n").unwrap();

    cli()
        .args(&["pipe", "--no-announce", "--file", path.to_str().unwrap()])
        .stdin("later\n")
        .passes();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "earlier");
    assert_eq!(Record::parse(lines[1]).message, "later");
}

#[test]
fn file_is_never_colored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("twine.log");

    cli()
        .args(&["pipe", "--no-announce", "--level", "error"])
        .args(&["--file", path.to_str().unwrap()])
        .env("COLOR", "1")
        .stdin("plain\n")
        .passes();

    assert!(!std::fs::read_to_string(&path).unwrap().contains("\x1b["));
}

#[test]
fn echo_copies_records_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("twine.log");

    cli()
        .args(&["pipe", "--no-announce", "--echo", "--file", path.to_str().unwrap()])
        .stdin("twice\n")
        .passes()
        .messages_eq(&["twice"]);

    assert!(std::fs::read_to_string(&path).unwrap().ends_with(" twice\n"));
}

#[test]
fn file_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("configured.log");
    let config = dir.path().join("twine.toml");
    std::fs::write(
        &config,
        format!("announce = false\nfile = {:?}\n", log.to_str().unwrap()),
    )
    .unwrap();

    cli()
        .args(&["pipe", "--config", config.to_str().unwrap()])
        .stdin("configured\n")
        .passes()
        .stdout_eq("");

    assert!(std::fs::read_to_string(&log)
        .unwrap()
        .ends_with(" configured\n"));
}
