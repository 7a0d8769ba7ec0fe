// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

pub mod demo;
pub mod pipe;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use twine_logger::{LogLevel, Logger, LoggerConfig};

/// Logger options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct LoggerArgs {
    /// Drop records below this level (verbose, debug, info, warn, error, fatal, highlight)
    #[arg(long)]
    pub threshold: Option<LogLevel>,
    /// Append records to this file instead of stdout
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// With --file, also print records on stdout
    #[arg(long)]
    pub echo: bool,
    /// Never color records
    #[arg(long)]
    pub no_color: bool,
    /// Skip the Hello!/Bye Bye! lines
    #[arg(long)]
    pub no_announce: bool,
    /// TOML file with logger settings
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl LoggerArgs {
    /// Config file (or defaults), then environment, then flags.
    pub fn config(&self) -> Result<LoggerConfig> {
        let base = match &self.config {
            Some(path) => LoggerConfig::load(path)
                .with_context(|| format!("cannot use config {}", path.display()))?,
            None => LoggerConfig::default(),
        };
        let mut config = base.with_env_overrides();

        if let Some(threshold) = self.threshold {
            config.threshold = threshold;
        }
        if let Some(file) = &self.file {
            config.file = Some(file.clone());
        }
        if self.echo {
            config.echo_stdout = true;
        }
        if self.no_color {
            config.use_color = false;
        }
        if self.no_announce {
            config.announce = false;
        }
        Ok(config)
    }

    pub fn logger(&self) -> Result<Logger> {
        let config = self.config()?;
        tracing::debug!(threshold = %config.threshold, file = ?config.file, "building logger");
        Ok(Logger::from_config(config)?)
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
