//! Application errors

use std::path::PathBuf;
use thiserror::Error;

use tewduwu_core::DomainError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("config file {} not found", .path.display())]
    ConfigMissing { path: PathBuf },

    #[error("invalid config: {0}")]
    Config(#[from] figment::Error),

    #[error(transparent)]
    Logger(#[from] rolling_logger::LoggerError),

    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
}
