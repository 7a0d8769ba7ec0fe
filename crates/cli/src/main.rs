// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! twine - drive the asynchronous logger from the command line

mod commands;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use commands::{demo, pipe};

#[derive(Parser)]
#[command(
    name = "twine",
    version,
    about = "Twine - asynchronous logging pipeline on a background worker"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Log every line read from stdin as one record
    Pipe(pipe::PipeArgs),
    /// Log from several threads at once
    Demo(demo::DemoArgs),
}

fn main() {
    setup_tracing();
    if let Err(e) = run() {
        eprintln!("Error: {}", format_error(&e));
        std::process::exit(1);
    }
}

pub(crate) fn cli_command() -> clap::Command {
    Cli::command()
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default `warn`).
fn setup_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

/// Format an anyhow error, skipping causes already spelled out at the top.
fn format_error(err: &anyhow::Error) -> String {
    let top = err.to_string();

    let chain_redundant = err
        .chain()
        .skip(1)
        .all(|cause| top.contains(&cause.to_string()));
    if chain_redundant {
        return top;
    }

    let mut buf = top;
    for (i, cause) in err.chain().skip(1).enumerate() {
        buf.push_str(&format!("\n\nCaused by:\n    {}: {}", i, cause));
    }
    buf
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Pipe(args)) => pipe::handle(args),
        Some(Commands::Demo(args)) => demo::handle(args),
        None => {
            cli_command().print_help()?;
            println!();
            Ok(())
        }
    }
}

#[cfg(test)]
#[path = "main_tests.rs"]
mod tests;
