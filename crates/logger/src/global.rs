// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-wide logger.

use std::sync::OnceLock;

use crate::config::LoggerConfig;
use crate::logger::Logger;

static GLOBAL: OnceLock<Logger> = OnceLock::new();

/// The process-wide logger, built from [`LoggerConfig::from_env`] and
/// started on first use.
///
/// Statics are never dropped, so call `global().close()` before exiting;
/// lines committed but not yet drained are otherwise lost.
pub fn global() -> &'static Logger {
    GLOBAL.get_or_init(|| {
        let config = LoggerConfig::from_env();
        let file = config.file.clone();
        let logger = Logger::builder(config).build();
        if let Some(path) = file {
            if let Err(e) = logger.set_log_file(&path) {
                tracing::warn!(error = %e, "global logger falls back to stdout");
            }
        }
        logger.start();
        logger
    })
}
