//! Line format constants and the single-line parser.

use crate::Entry;

/// Field delimiter between key and value, on disk and in display output.
pub const SEPARATOR: &str = " - ";

/// Line terminator used when rewriting a dictionary file.
#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
/// Line terminator used when rewriting a dictionary file.
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Parses one line into an [`Entry`].
///
/// The line is split on the first occurrence of [`SEPARATOR`] and both
/// parts are trimmed of surrounding whitespace. Returns `None` for lines
/// that do not contain the separator.
pub fn parse_line(line: &str) -> Option<Entry> {
    let (key, value) = line.split_once(SEPARATOR)?;
    Some(Entry::new(key.trim(), value.trim()))
}
