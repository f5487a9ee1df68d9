//! File-based diagnostics bootstrap
//!
//! The TUI owns the terminal while it runs, so diagnostics go to rotated
//! log files only, never to stdout or stderr.

use std::path::Path;

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};

use crate::error::{AppError, Result};

const LOG_FILE_BASENAME: &str = "tsugi";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 1024 * 1024;
const MAX_LOG_FILES: usize = 3;

/// Default log level per build mode: `debug` builds log debug, `release`
/// builds log info.
fn default_level() -> &'static str {
    if cfg!(debug_assertions) { "debug" } else { "info" }
}

/// Start the rotating file logger under `log_dir`.
///
/// The returned handle must stay alive for the lifetime of the process;
/// dropping it shuts the logger down.
pub fn init(log_dir: &Path) -> Result<LoggerHandle> {
    std::fs::create_dir_all(log_dir)
        .map_err(|e| AppError::io("Failed to create log directory", e))?;

    Logger::try_with_str(default_level())
        .and_then(|logger| {
            logger
                .log_to_file(
                    FileSpec::default()
                        .directory(log_dir)
                        .basename(LOG_FILE_BASENAME),
                )
                .rotate(
                    Criterion::Size(MAX_LOG_FILE_SIZE_BYTES),
                    Naming::Numbers,
                    Cleanup::KeepLogFiles(MAX_LOG_FILES),
                )
                .write_mode(WriteMode::BufferAndFlush)
                .append()
                .format_for_files(flexi_logger::detailed_format)
                .start()
        })
        .map_err(|e| AppError::config_with_source("Failed to start logger", e))
}
