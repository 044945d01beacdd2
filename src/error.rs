//! 错误类型

use std::path::PathBuf;

use thiserror::Error;

use crate::models::CatalogError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("ui.columns must be between 1 and 3, got {0}")]
    InvalidColumns(u16),

    #[error("invalid catalog: {0}")]
    Catalog(#[from] CatalogError),

    #[error("no user data directory available for the log file")]
    NoDataDir,

    #[error("logging setup failed: {0}")]
    Logging(String),
}

pub type AppResult<T> = Result<T, AppError>;
