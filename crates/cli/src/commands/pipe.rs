// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `twine pipe`: one record per stdin line.

use std::io::BufRead;

use anyhow::{Context, Result};
use clap::Args;
use twine_logger::LogLevel;

use super::LoggerArgs;

#[derive(Args, Debug)]
pub struct PipeArgs {
    /// Level of every record
    #[arg(long, default_value_t = LogLevel::Info)]
    pub level: LogLevel,

    #[command(flatten)]
    pub logger: LoggerArgs,
}

pub fn handle(args: PipeArgs) -> Result<()> {
    let logger = args.logger.logger()?;
    logger.start();
    logger.level(args.level);

    let mut lines = 0usize;
    let result = std::io::stdin()
        .lock()
        .lines()
        .try_for_each(|line| -> Result<()> {
            let line = line.context("failed to read stdin")?;
            logger.append(line.as_str()).commit();
            lines += 1;
            Ok(())
        });

    logger.close();
    tracing::debug!(lines, "stdin exhausted");
    result
}
