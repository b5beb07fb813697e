//! Core logging bootstrap.
//!
//! # Responsibility
//! - Initialize file-based rolling logs exactly once per process.
//!
//! # Invariants
//! - Logging init is idempotent for the same directory.
//! - Re-initialization with a different directory or level is rejected.
//! - Initialization never panics.

use flexi_logger::{Cleanup, Criterion, FileSpec, Logger, LoggerHandle, Naming, WriteMode};
use log::info;
use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};

const LOG_FILE_BASENAME: &str = "deptboard";
const MAX_LOG_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
const MAX_LOG_FILES: usize = 5;

static LOGGING_STATE: OnceCell<LoggingState> = OnceCell::new();

struct LoggingState {
    level: &'static str,
    log_dir: PathBuf,
    _logger: LoggerHandle,
}

/// Default level used when callers have no preference.
pub fn default_log_level() -> &'static str {
    "info"
}

/// Initializes core logging with level and directory.
///
/// # Errors
/// - Returns an error when `level` is unsupported.
/// - Returns an error when `log_dir` is empty, non-absolute, or cannot be
///   created.
/// - Returns an error on re-initialization with different settings.
pub fn init_logging(level: &str, log_dir: &str) -> Result<(), String> {
    let normalized_level = normalize_level(level)?;
    let normalized_dir = normalize_log_dir(log_dir)?;

    if let Some(state) = LOGGING_STATE.get() {
        if state.log_dir == normalized_dir && state.level == normalized_level {
            return Ok(());
        }
        return Err(format!(
            "logging already initialized at `{}` level `{}`; refusing to reconfigure",
            state.log_dir.display(),
            state.level
        ));
    }

    let init_dir = normalized_dir.clone();
    LOGGING_STATE
        .get_or_try_init(|| -> Result<LoggingState, String> {
            std::fs::create_dir_all(&init_dir).map_err(|err| {
                format!(
                    "failed to create log directory `{}`: {err}",
                    init_dir.display()
                )
            })?;

            let logger = Logger::try_with_str(normalized_level)
                .map_err(|err| format!("invalid log level `{normalized_level}`: {err}"))?
                .log_to_file(
                    FileSpec::default()
                        .directory(init_dir.as_path())
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
                .map_err(|err| format!("failed to start logger: {err}"))?;

            info!(
                "event=core_init module=core status=ok level={normalized_level} log_dir={} version={}",
                init_dir.display(),
                env!("CARGO_PKG_VERSION")
            );

            Ok(LoggingState {
                level: normalized_level,
                log_dir: init_dir,
                _logger: logger,
            })
        })
        .map(|_| ())
}

fn normalize_level(level: &str) -> Result<&'static str, String> {
    match level.trim().to_ascii_lowercase().as_str() {
        "error" => Ok("error"),
        "warn" => Ok("warn"),
        "info" => Ok("info"),
        "debug" => Ok("debug"),
        "trace" => Ok("trace"),
        other => Err(format!("unsupported log level `{other}`")),
    }
}

fn normalize_log_dir(log_dir: &str) -> Result<PathBuf, String> {
    let trimmed = log_dir.trim();
    if trimmed.is_empty() {
        return Err("log directory must not be empty".to_string());
    }
    let path = Path::new(trimmed);
    if !path.is_absolute() {
        return Err(format!("log directory must be absolute, got `{trimmed}`"));
    }
    Ok(path.to_path_buf())
}
