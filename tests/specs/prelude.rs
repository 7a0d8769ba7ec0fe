//! Test helpers for behavioral specifications.
//!
//! Provides high-level DSL for testing twine CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::path::{Path, PathBuf};
use std::process::Output;

/// Logger wake-up interval for test runs, so lines are not held back.
const TWINE_LOG_TIMEOUT_MS: &str = "50";

/// Returns the path to a binary, checking llvm-cov target directory first.
/// Falls back to resolving relative to the test binary itself.
fn binary_path(name: &str) -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));

    let llvm_cov_path = manifest_dir.join("target/llvm-cov-target/debug").join(name);
    if llvm_cov_path.exists() {
        return llvm_cov_path;
    }

    let standard = manifest_dir.join("target/debug").join(name);
    if standard.exists() {
        return standard;
    }

    // The test binary lives at target/debug/deps/specs-<hash>.
    if let Ok(exe) = std::env::current_exe() {
        if let Some(debug_dir) = exe.parent().and_then(|d| d.parent()) {
            let fallback = debug_dir.join(name);
            if fallback.exists() {
                return fallback;
            }
        }
    }

    standard
}

/// Create a CLI builder for twine commands
pub fn cli() -> CliBuilder {
    CliBuilder::new()
}

/// High-level CLI builder for fluent test assertions
pub struct CliBuilder {
    args: Vec<String>,
    stdin: Option<String>,
    envs: Vec<(String, String)>,
}

impl CliBuilder {
    fn new() -> Self {
        Self {
            args: Vec::new(),
            stdin: None,
            envs: vec![("TWINE_LOG_TIMEOUT_MS".into(), TWINE_LOG_TIMEOUT_MS.into())],
        }
    }

    /// Add CLI arguments
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(|s| s.to_string()));
        self
    }

    /// Feed text on stdin
    pub fn stdin(mut self, input: &str) -> Self {
        self.stdin = Some(input.to_string());
        self
    }

    /// Set environment variable
    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.envs.push((
            key.to_string(),
            value.as_ref().to_string_lossy().to_string(),
        ));
        self
    }

    /// Build the command without running it
    pub fn command(self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(binary_path("twine"));
        cmd.args(&self.args);
        // Keep the caller's environment from changing the output.
        for var in [
            "RUST_LOG",
            "TWINE_LOG_THRESHOLD",
            "TWINE_LOG_FILE",
            "COLOR",
            "NO_COLOR",
        ] {
            cmd.env_remove(var);
        }
        for (key, value) in self.envs {
            cmd.env(key, value);
        }
        cmd.write_stdin(self.stdin.unwrap_or_default());
        cmd
    }

    fn output(self) -> Output {
        self.command().output().expect("command should run")
    }

    /// Run and expect success (exit code 0)
    pub fn passes(self) -> RunAssert {
        let output = self.output();
        assert!(
            output.status.success(),
            "expected command to pass, got exit code {:?}\nstdout: {}\nstderr: {}",
            output.status.code(),
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }

    /// Run and expect failure (non-zero exit code)
    pub fn fails(self) -> RunAssert {
        let output = self.output();
        assert!(
            !output.status.success(),
            "expected command to fail, but it passed\nstdout: {}\nstderr: {}",
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        RunAssert { output }
    }
}

/// Result of a CLI run for chaining assertions
pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    /// Get stdout as string
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    /// Get stderr as string
    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    /// Parsed log lines from stdout
    pub fn records(&self) -> Vec<Record> {
        self.stdout().lines().map(Record::parse).collect()
    }

    /// Assert stdout equals expected exactly (with diff on failure).
    pub fn stdout_eq(self, expected: &str) -> Self {
        let stdout = self.stdout();
        similar_asserts::assert_eq!(stdout, expected);
        self
    }

    /// Assert stdout contains substring.
    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain '{}'\nstdout: {}",
            expected,
            stdout
        );
        self
    }

    /// Assert stdout does not contain substring.
    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            !stdout.contains(unexpected),
            "stdout should not contain '{}'\nstdout: {}",
            unexpected,
            stdout
        );
        self
    }

    /// Assert stderr contains substring.
    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain '{}'\nstderr: {}",
            expected,
            stderr
        );
        self
    }

    /// Assert the delivered messages, ignoring caller, time and sequence.
    pub fn messages_eq(self, expected: &[&str]) -> Self {
        let messages: Vec<String> = self.records().into_iter().map(|r| r.message).collect();
        similar_asserts::assert_eq!(messages, expected);
        self
    }
}

// =============================================================================
// Log lines
// =============================================================================

/// One `<caller> <level> <date> <time> <sequence> <message>` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub caller: u64,
    pub level: u8,
    pub timestamp: String,
    pub sequence: u64,
    pub message: String,
}

impl Record {
    pub fn parse(line: &str) -> Self {
        let mut fields = line.splitn(6, ' ');
        let mut next = || {
            fields
                .next()
                .unwrap_or_else(|| panic!("short log line: {line:?}"))
        };
        let caller = next().parse().unwrap();
        let level = next().parse().unwrap();
        let date = next();
        let time = next();
        let timestamp = format!("{date} {time}");
        let sequence = next().parse().unwrap();
        let message = next().to_string();
        assert_eq!(timestamp.len(), 19, "timestamp shape: {timestamp:?}");
        Self {
            caller,
            level,
            timestamp,
            sequence,
            message,
        }
    }
}
