//! Input file acquisition.
//!
//! The distinction between a missing path and a path that exists but
//! cannot be opened is part of the program's contract (they map to
//! different exit codes in the CLI), so the existence check happens
//! before the open attempt.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::ConcordanceError;
use crate::Result;

/// Open the input file for buffered line-by-line reading.
///
/// Returns [`ConcordanceError::InputNotFound`] when the path does not
/// exist, and [`ConcordanceError::InputOpen`] when it exists but cannot
/// be opened.
pub fn open(path: impl AsRef<Path>) -> Result<BufReader<File>> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConcordanceError::InputNotFound(path.to_path_buf()));
    }

    let file = File::open(path).map_err(|e| ConcordanceError::InputOpen {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(BufReader::new(file))
}
