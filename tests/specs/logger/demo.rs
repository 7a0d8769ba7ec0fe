//! `twine demo` specs: concurrent callers sharing one logger.

use std::collections::HashMap;

use crate::prelude::*;

#[test]
fn every_thread_delivers_every_line_in_order() {
    let run = cli()
        .args(&["demo", "--threads", "3", "--lines", "8"])
        .args(&["--no-announce", "--threshold", "verbose"])
        .passes();

    let records = run.records();
    assert_eq!(records.len(), 24);

    let mut per_thread: HashMap<String, Vec<u32>> = HashMap::new();
    for record in &records {
        // "thread <t> line <n>"
        let words: Vec<&str> = record.message.split(' ').collect();
        assert_eq!(words[0], "thread");
        per_thread
            .entry(words[1].to_string())
            .or_default()
            .push(words[3].parse().unwrap());
    }
    assert_eq!(per_thread.len(), 3);
    for lines in per_thread.values() {
        assert_eq!(*lines, (0..8).collect::<Vec<u32>>());
    }
}

#[test]
fn demo_honors_threshold() {
    let run = cli()
        .args(&["demo", "--threads", "2", "--lines", "8"])
        .args(&["--no-announce", "--threshold", "warn"])
        .passes();

    let records = run.records();
    // Lines 2, 3, 6 and 7 of each thread are warn or error.
    assert_eq!(records.len(), 8);
    assert!(records.iter().all(|r| r.level >= 3));
}
