use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("the mentioned input directory does not exist: {path}")]
    MissingInputDirectory { path: PathBuf },

    #[error("clip limit must be non-negative, got: {value}")]
    NegativeClipLimit { value: f64 },

    #[error("window size must be greater than 0, got: {value}")]
    ZeroWindowSize { value: usize },

    #[error("thread count must be greater than 0, got: {value}")]
    ZeroThreadCount { value: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
