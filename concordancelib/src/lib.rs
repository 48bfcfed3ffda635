//! # concordancelib
//!
//! A library for converting plain-text name lists into concordance files
//! that a word processor's index-building feature can consume.
//!
//! ## Overview
//!
//! The input is a text file with one record per line, each in the form
//! `last_name, first_name[, middle_name...]`. Each qualifying record is
//! converted into a concordance line pairing a reordered display key
//! (`first [middle] last`) with the verbatim original record, separated
//! by a tilde:
//!
//! ```text
//! John Smith~Smith, John
//! ```
//!
//! Lines that do not yield at least two comma-separated tokens are
//! silently skipped; they are not errors.
//!
//! ## Example
//!
//! ```rust
//! use concordancelib::Converter;
//!
//! let converter = Converter::new();
//!
//! let entry = converter.convert_line("Smith, John").unwrap();
//! assert_eq!(entry.to_string(), "John Smith~Smith, John");
//!
//! // A line without a comma has a single token and is skipped.
//! assert!(converter.convert_line("Smith").is_none());
//!
//! // Whole-stream conversion preserves input order.
//! let entries: Vec<String> = converter
//!     .convert_lines(["Doe, Jane", "ignored", "Smith, John, Allen"])
//!     .map(|e| e.to_string())
//!     .collect();
//! assert_eq!(entries, ["Jane Doe~Doe, Jane", "John Allen Smith~Smith, John, Allen"]);
//! ```

pub mod converter;
pub mod entry;
pub mod error;
pub mod input;

pub use converter::Converter;
pub use entry::{ConcordanceEntry, FIELD_SEPARATOR};
pub use error::ConcordanceError;

/// Result type for concordancelib operations
pub type Result<T> = std::result::Result<T, ConcordanceError>;
