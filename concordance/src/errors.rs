//! Application errors and the exit-status contract.
//!
//! Every exit code is part of the observable contract of the program;
//! downstream scripts branch on them.

use concordancelib::ConcordanceError;
use thiserror::Error;

/// The process environment failed (executable pathname, stdout sink,
/// or a read on the already-open input).
pub const EXIT_ENVIRONMENT: u8 = 1;
/// The diagnostics subscriber could not be installed.
pub const EXIT_INIT: u8 = 2;
/// Wrong number of command-line arguments.
pub const EXIT_USAGE: u8 = 3;
/// The input path does not exist.
pub const EXIT_INPUT_MISSING: u8 = 4;
/// The input file exists but could not be opened.
pub const EXIT_INPUT_OPEN: u8 = 5;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("failed to resolve the executable pathname: {0}")]
    ExecutablePath(std::io::Error),

    #[error("failed to write to the output stream: {0}")]
    OutputWrite(std::io::Error),

    #[error(transparent)]
    Converter(#[from] ConcordanceError),
}

impl AppError {
    /// Map this error to its contractual exit status.
    pub fn exit_code(&self) -> u8 {
        match self {
            AppError::ExecutablePath(_) | AppError::OutputWrite(_) => EXIT_ENVIRONMENT,
            AppError::Converter(ConcordanceError::InputNotFound(_)) => EXIT_INPUT_MISSING,
            AppError::Converter(ConcordanceError::InputOpen { .. }) => EXIT_INPUT_OPEN,
            AppError::Converter(ConcordanceError::Io(_)) => EXIT_ENVIRONMENT,
        }
    }
}
