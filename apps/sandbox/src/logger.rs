//! Logging for the sandbox binary.
//!
//! Provides dual output (stdout with colors + file) with thread-safe initialization.

use crate::error::SandboxError;

use std::io::stdout;
use std::path::Path;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::Color::{Blue, Green, Magenta, Red, Yellow};
use fern::colors::ColoredLevelConfig;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

/// Thread-safe initialization guard.
static INIT_LOGGER_ONCE: Once = Once::new();

/// Tracks if logger initialization was already attempted.
static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

pub const LOG_FILE_NAME: &str = "mpesa-sandbox.log";

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";
const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

/// Traffic logging is emitted at debug, so the sandbox always runs at debug.
const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

/// Noisy transport crates are capped below the app's level.
const DEPENDENCY_LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Initialize the logger with dual output (stdout + file).
///
/// Safe to call multiple times: later calls log a warning and return Ok.
///
/// # Errors
///
/// Returns an error if the log file cannot be created or the dispatch
/// cannot be installed.
pub fn initialize(log_dir: &Path) -> Result<(), SandboxError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        result = build_dispatch(log_dir).and_then(|dispatch| {
            dispatch
                .apply()
                .map_err(|e| SandboxError::sandbox(format!("Failed to initialize logger: {e}")))
        });
        if result.is_ok() {
            info!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{LOG_LEVEL:?}");
        }
    });

    result
}

/// Colored stdout plus a plain file at `{log_dir}/mpesa-sandbox.log`.
#[track_caller]
pub fn build_dispatch(log_dir: &Path) -> Result<Dispatch, SandboxError> {
    let log_file_path = log_dir.join(LOG_FILE_NAME);

    let color_configuration = ColoredLevelConfig::new()
        .debug(Blue)
        .info(Green)
        .warn(Yellow)
        .error(Red)
        .trace(Magenta);

    let base_dispatch = Dispatch::new()
        .level(LOG_LEVEL)
        .level_for("reqwest", DEPENDENCY_LOG_LEVEL)
        .level_for("hyper_util", DEPENDENCY_LOG_LEVEL)
        .level_for("rustls", DEPENDENCY_LOG_LEVEL);

    let stdout_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = color_configuration.color(record.level()),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0),
            ))
        })
        .chain(stdout());

    // File output stays plain so it can be grepped
    let log_file = fern::log_file(&log_file_path)
        .map_err(|e| SandboxError::sandbox(format!("Failed to create log file: {e}")))?;
    let file_dispatch = Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {target}: {message}",
                date = format_rfc3339(SystemTime::now()),
                level = record.level(),
                target = record.target(),
                message = message,
            ))
        })
        .chain(log_file);

    Ok(base_dispatch.chain(stdout_dispatch).chain(file_dispatch))
}
