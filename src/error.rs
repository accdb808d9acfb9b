//! Crate-level error type and `Result` alias for stable, structured error
//! handling. Fatal setup errors (missing input directory) abort a run;
//! decode/depth/encode failures stay scoped to the affected image.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("input directory does not exist: {path}")]
    InvalidInputDirectory { path: PathBuf },

    #[error("unsupported sample depth in {path}: {detail}; only 8 or 16 bit unsigned images are supported")]
    UnsupportedSampleDepth { path: PathBuf, detail: String },

    #[error("failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("processing error: {0}")]
    Processing(String),
}
