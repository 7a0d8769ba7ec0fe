// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `twine demo`: several threads logging into one logger.

use anyhow::Result;
use clap::Args;
use twine_logger::{log_debug, log_error, log_info, log_warn, Logger};

use super::LoggerArgs;

#[derive(Args, Debug)]
pub struct DemoArgs {
    /// Number of logging threads
    #[arg(long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..=64))]
    pub threads: u32,

    /// Records per thread
    #[arg(long, default_value_t = 10)]
    pub lines: u32,

    #[command(flatten)]
    pub logger: LoggerArgs,
}

pub fn handle(args: DemoArgs) -> Result<()> {
    let logger = args.logger.logger()?;
    logger.start();

    std::thread::scope(|s| {
        for thread in 0..args.threads {
            let logger = &logger;
            s.spawn(move || run_thread(logger, thread, args.lines));
        }
    });

    logger.close();
    Ok(())
}

/// Cycle through debug, info, warn and error records.
fn run_thread(logger: &Logger, thread: u32, lines: u32) {
    for line in 0..lines {
        match line % 4 {
            0 => log_debug!(logger, "thread", thread, "line", line),
            1 => log_info!(logger, "thread", thread, "line", line),
            2 => log_warn!(logger, "thread", thread, "line", line),
            _ => log_error!(logger, "thread", thread, "line", line),
        }
    }
}
