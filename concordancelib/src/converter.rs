//! The line conversion pipeline.
//!
//! This module holds the core of the program: tokenize a record on the
//! input delimiter, reorder the name components, and produce a
//! [`ConcordanceEntry`] pairing the reordered key with the verbatim
//! line.

use std::io::BufRead;
use std::path::Path;

use crate::entry::ConcordanceEntry;
use crate::input;
use crate::Result;

/// Converts `last_name, first_name[, middle_name...]` records into
/// concordance entries.
///
/// The input delimiter defaults to a comma and can be changed at the
/// library level. The output field separator is fixed; see
/// [`FIELD_SEPARATOR`](crate::FIELD_SEPARATOR).
///
/// # Example
///
/// ```rust
/// use concordancelib::Converter;
///
/// let entry = Converter::new().convert_line("Smith, John, Allen").unwrap();
/// assert_eq!(entry.display_key, "John Allen Smith");
///
/// // Semicolon-separated records, same pipeline.
/// let entry = Converter::new()
///     .delimiter(';')
///     .convert_line("Smith; John")
///     .unwrap();
/// assert_eq!(entry.display_key, "John Smith");
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    delimiter: char,
}

impl Default for Converter {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl Converter {
    /// Create a converter with the default comma delimiter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input delimiter.
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Split a line into whitespace-trimmed tokens.
    ///
    /// Tokenization stops at the first field that trims to the empty
    /// string; fields beyond it are never examined, and the tokens
    /// collected before it are kept. This stopping rule changes the
    /// outcome for lines with trailing delimiters or empty interior
    /// fields compared to a plain split-and-filter, and downstream
    /// behavior depends on it.
    pub fn tokenize<'a>(&self, line: &'a str) -> Vec<&'a str> {
        let mut tokens = Vec::new();

        for field in line.split(self.delimiter) {
            let token = field.trim();
            if token.is_empty() {
                break;
            }
            tokens.push(token);
        }

        tokens
    }

    /// Convert one record into a concordance entry.
    ///
    /// Returns `None` for lines that yield fewer than two tokens; such
    /// lines are skipped, not errors. The first token is the last name;
    /// every following token is emitted first, each followed by a
    /// single space, and the last name is appended directly after the
    /// final one.
    pub fn convert_line(&self, line: &str) -> Option<ConcordanceEntry> {
        let tokens = self.tokenize(line);

        if tokens.len() < 2 {
            return None;
        }

        let mut display_key = String::with_capacity(line.len());
        for token in &tokens[1..] {
            display_key.push_str(token);
            display_key.push(' ');
        }
        display_key.push_str(tokens[0]);

        Some(ConcordanceEntry::new(display_key, line))
    }

    /// Lazily convert a sequence of lines.
    ///
    /// The returned iterator is finite, single-pass, and preserves the
    /// relative order of qualifying input lines; skipped lines produce
    /// no item.
    pub fn convert_lines<'a, I>(&'a self, lines: I) -> impl Iterator<Item = ConcordanceEntry> + 'a
    where
        I: IntoIterator + 'a,
        I::Item: AsRef<str>,
    {
        lines
            .into_iter()
            .filter_map(move |line| self.convert_line(line.as_ref()))
    }

    /// Convert every line of a reader.
    ///
    /// This is useful for testing without actual files. Line
    /// terminators (LF or CRLF) are never part of the record.
    pub fn convert_reader<R: BufRead>(&self, reader: R) -> Result<Vec<ConcordanceEntry>> {
        let mut entries = Vec::new();

        for line in reader.lines() {
            let line = line?;
            if let Some(entry) = self.convert_line(&line) {
                entries.push(entry);
            }
        }

        Ok(entries)
    }

    /// Convert every line of the file at `path`.
    pub fn convert_file(&self, path: impl AsRef<Path>) -> Result<Vec<ConcordanceEntry>> {
        let reader = input::open(path)?;
        self.convert_reader(reader)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConcordanceError;

    #[test]
    fn two_token_line() {
        let entry = Converter::new().convert_line("Smith, John").unwrap();
        assert_eq!(entry.to_string(), "John Smith~Smith, John");
    }

    #[test]
    fn three_token_line_joins_trailing_tokens() {
        let entry = Converter::new().convert_line("Smith, John, Allen").unwrap();
        assert_eq!(entry.to_string(), "John Allen Smith~Smith, John, Allen");
    }

    #[test]
    fn no_comma_is_skipped() {
        assert!(Converter::new().convert_line("Smith").is_none());
    }

    #[test]
    fn empty_line_is_skipped() {
        assert!(Converter::new().convert_line("").is_none());
    }

    #[test]
    fn whitespace_only_line_is_skipped() {
        assert!(Converter::new().convert_line("   \t ").is_none());
    }

    #[test]
    fn key_is_trimmed_but_original_is_verbatim() {
        let entry = Converter::new().convert_line("  Smith ,  John  ").unwrap();
        assert_eq!(entry.display_key, "John Smith");
        assert_eq!(entry.original, "  Smith ,  John  ");
        assert_eq!(entry.to_string(), "John Smith~  Smith ,  John  ");
    }

    #[test]
    fn trimming_is_idempotent() {
        let converter = Converter::new();
        let padded = converter.convert_line(" Smith , John ").unwrap();
        let trimmed = converter.convert_line("Smith, John").unwrap();
        assert_eq!(padded.display_key, trimmed.display_key);
    }

    #[test]
    fn tokenize_stops_at_first_empty_field() {
        let converter = Converter::new();
        assert_eq!(converter.tokenize("a,,b"), ["a"]);
        assert_eq!(converter.tokenize("a, b,"), ["a", "b"]);
        assert_eq!(converter.tokenize("a,  ,b"), ["a"]);
        assert_eq!(converter.tokenize(",a,b"), Vec::<&str>::new());
    }

    #[test]
    fn trailing_comma_keeps_collected_tokens() {
        // The trailing empty field stops tokenization, but the two
        // tokens before it still qualify the line.
        let entry = Converter::new().convert_line("Smith, John,").unwrap();
        assert_eq!(entry.to_string(), "John Smith~Smith, John,");
    }

    #[test]
    fn interior_empty_field_can_disqualify_a_line() {
        // Only one token is collected before the empty field, so the
        // line is skipped even though a name follows it.
        assert!(Converter::new().convert_line("Smith,,John").is_none());
    }

    #[test]
    fn convert_lines_preserves_order_and_drops_skipped() {
        let converter = Converter::new();
        let lines = ["Doe, Jane", "Smith", "", "Smith, John"];

        let entries: Vec<String> = converter
            .convert_lines(lines)
            .map(|e| e.to_string())
            .collect();

        assert_eq!(entries, ["Jane Doe~Doe, Jane", "John Smith~Smith, John"]);
    }

    #[test]
    fn custom_delimiter() {
        let converter = Converter::new().delimiter(';');
        let entry = converter.convert_line("Smith; John; Allen").unwrap();
        assert_eq!(entry.display_key, "John Allen Smith");

        // Commas are ordinary characters under a semicolon delimiter.
        let entry = converter.convert_line("Smith, John; Allen").unwrap();
        assert_eq!(entry.display_key, "Allen Smith, John");
    }

    #[test]
    fn convert_reader_handles_crlf() {
        let input = b"Smith, John\r\nDoe, Jane\n" as &[u8];
        let entries = Converter::new().convert_reader(input).unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].original, "Smith, John");
        assert_eq!(entries[1].original, "Doe, Jane");
    }

    #[test]
    fn convert_reader_empty_input() {
        let entries = Converter::new().convert_reader(b"" as &[u8]).unwrap();
        assert!(entries.is_empty());
    }

    #[test]
    fn convert_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("names.txt");
        std::fs::write(&path, "Smith, John\nSmith\nDoe, Jane\n").unwrap();

        let entries = Converter::new().convert_file(&path).unwrap();
        let rendered: Vec<String> = entries.iter().map(|e| e.to_string()).collect();
        assert_eq!(rendered, ["John Smith~Smith, John", "Jane Doe~Doe, Jane"]);
    }

    #[test]
    fn convert_file_missing_path() {
        let err = Converter::new()
            .convert_file("/nonexistent/names.txt")
            .unwrap_err();
        assert!(matches!(err, ConcordanceError::InputNotFound(_)));
    }
}
