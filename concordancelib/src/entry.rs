//! The concordance entry data model and its line rendering.

use std::fmt;

/// Separator between the display key and the original record in an
/// output line. This is the field delimiter the downstream index-import
/// feature expects, so it is a fixed part of the file format rather
/// than a configuration knob.
pub const FIELD_SEPARATOR: char = '~';

/// One converted record: a reordered display key paired with the
/// verbatim input line it was derived from.
///
/// Entries are transient; they are produced by a
/// [`Converter`](crate::Converter) and immediately rendered. The
/// `Display` implementation produces the exact output line (without the
/// trailing newline):
///
/// ```rust
/// use concordancelib::Converter;
///
/// let entry = Converter::new().convert_line("Smith, John").unwrap();
/// assert_eq!(format!("{entry}"), "John Smith~Smith, John");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcordanceEntry {
    /// Reordered name, `first [middle...] last`, used as the index
    /// entry's display text
    pub display_key: String,
    /// The input line exactly as read, line terminator excluded
    pub original: String,
}

impl ConcordanceEntry {
    /// Create an entry from an already-built display key and the
    /// verbatim original line.
    pub fn new(display_key: impl Into<String>, original: impl Into<String>) -> Self {
        Self {
            display_key: display_key.into(),
            original: original.into(),
        }
    }
}

impl fmt::Display for ConcordanceEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.display_key, FIELD_SEPARATOR, self.original
        )
    }
}
