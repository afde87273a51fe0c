use std::fs::{rename, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

use crate::format::{LINE_ENDING, SEPARATOR};

/// Rewrites the dictionary file at `path` from the full entry set.
///
/// Every `(key, value)` pair becomes one `key - value` line. The write is
/// crash-safe: entries go to a sibling temp file first, the temp file is
/// synced, then atomically renamed over `path`. A failed rewrite leaves
/// the previous file content intact.
///
/// # Errors
///
/// Returns any I/O failure from writing, syncing, or renaming.
pub fn write_entries<'a, P, I>(path: P, entries: I) -> io::Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let path = path.as_ref();
    let tmp_path = path.with_extension("txt.tmp");

    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&tmp_path)?;

    for (key, value) in entries {
        file.write_all(key.as_bytes())?;
        file.write_all(SEPARATOR.as_bytes())?;
        file.write_all(value.as_bytes())?;
        file.write_all(LINE_ENDING.as_bytes())?;
    }

    file.flush()?;
    file.sync_all()?;

    rename(tmp_path, path)?;

    Ok(())
}
