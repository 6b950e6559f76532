//! Rolling Logger
//!
//! A rolling file logger with a circular buffer of recent lines.
//!
//! `init_logger` installs a global `tracing` subscriber that writes to
//! `<log_dir>/<app_name>.log`. Records emitted through the `log` facade are
//! bridged into the same subscriber.

mod buffer;
mod rolling;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use thiserror::Error;
use tracing::Level;

pub use buffer::LineBuffer;
pub use rolling::{RollingFile, RollingWriter};

static WRITER: OnceLock<RollingWriter> = OnceLock::new();

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("log file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to install subscriber: {0}")]
    Init(String),

    #[error("logger already initialized")]
    AlreadyInitialized,

    #[error("logger not initialized")]
    NotInitialized,
}

/// Limits for the rolling file and the in-memory buffer
#[derive(Debug, Clone)]
struct LoggerConfig {
    max_file_bytes: u64,
    max_backups: usize,
    buffer_lines: usize,
    level: Level,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            max_file_bytes: 1024 * 1024,
            max_backups: 3,
            buffer_lines: 500,
            level: Level::INFO,
        }
    }
}

/// Initialize the global logger with default limits
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), LoggerError> {
    init_with_config(log_dir, app_name, LoggerConfig::default())
}

fn init_with_config(
    log_dir: impl AsRef<Path>,
    app_name: &str,
    config: LoggerConfig,
) -> Result<(), LoggerError> {
    if WRITER.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }

    let file = RollingFile::open(
        log_dir.as_ref(),
        app_name,
        config.max_file_bytes,
        config.max_backups,
    )?;
    let writer = RollingWriter::new(file, LineBuffer::new(config.buffer_lines));

    tracing_subscriber::fmt()
        .with_writer(writer.clone())
        .with_ansi(false)
        .with_target(false)
        .with_max_level(config.level)
        .try_init()
        .map_err(|e| LoggerError::Init(e.to_string()))?;

    WRITER
        .set(writer)
        .map_err(|_| LoggerError::AlreadyInitialized)?;

    tracing::info!(
        "{} logging started at {}",
        app_name,
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    Ok(())
}

/// Most recent log lines, oldest first. Empty before initialization.
pub fn recent_lines() -> Vec<String> {
    WRITER.get().map(|w| w.recent_lines()).unwrap_or_default()
}

/// Path of the live log file, once initialized
pub fn log_path() -> Option<PathBuf> {
    WRITER.get().and_then(|w| w.log_path())
}

pub fn info(msg: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::info!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    tracing::error!("{}", msg);
    Ok(())
}

fn ensure_initialized() -> Result<(), LoggerError> {
    if WRITER.get().is_some() {
        Ok(())
    } else {
        Err(LoggerError::NotInitialized)
    }
}
