use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use crate::format::parse_line;
use crate::Entry;

/// Reads every parseable entry from the dictionary file at `path`.
///
/// Entries keep their file order. Malformed lines (no `" - "` separator)
/// are skipped without error reporting.
///
/// # Errors
///
/// Propagates I/O errors from opening or reading the file, including
/// `NotFound`; mapping a missing file to an empty dictionary is the
/// caller's decision.
pub fn read_entries<P: AsRef<Path>>(path: P) -> io::Result<Vec<Entry>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut entries = Vec::new();
    for line in reader.lines() {
        if let Some(entry) = parse_line(&line?) {
            entries.push(entry);
        }
    }
    Ok(entries)
}
