//! Error types for concordancelib

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while acquiring or reading the input file
#[derive(Error, Debug)]
pub enum ConcordanceError {
    /// Input path does not exist
    #[error("input file does not exist: {0}")]
    InputNotFound(PathBuf),

    /// Input path exists but could not be opened for reading
    #[error("failed to open input file '{path}': {source}")]
    InputOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    /// IO error while reading an already-open stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
