//! # FileStore
//!
//! The storage core: one [`FileStore`] is the sole authority over one
//! dictionary's persisted state.
//!
//! The store owns an in-memory `BTreeMap<String, String>` loaded from the
//! backing file once at construction, and rewrites the whole file from the
//! map after every successful mutation.
//!
//! ## Write path
//!
//! 1. Validate the candidate key against the store's [`KeyFormat`]; a
//!    rejected key changes nothing.
//! 2. Apply the mutation to the in-memory map.
//! 3. Rewrite the backing file from the complete map (temp file + atomic
//!    rename, see [`dictfile::write_entries`]).
//!
//! The map is the source of truth. A failed rewrite surfaces as
//! [`StoreError::Io`] but does not roll the map back; the next successful
//! mutation brings the file up to date again.
//!
//! ## Read path
//!
//! Lookups never touch the disk: [`FileStore::search`] and
//! [`FileStore::read_all`] answer from the map alone.
//!
//! ## Example
//! ```no_run
//! use filestore::{FileStore, StoreError};
//! use keyfmt::KeyFormat;
//!
//! fn main() -> Result<(), StoreError> {
//!     let mut store = FileStore::open("four_letter.txt", KeyFormat::FourLetter);
//!     store.add("word".to_string(), "слово".to_string())?;
//!     assert_eq!(store.search("word"), Some("слово"));
//!     Ok(())
//! }
//! ```

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use dictfile::{read_entries, write_entries};
use keyfmt::KeyFormat;
use log::warn;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The candidate key does not satisfy the store's key format.
    #[error("invalid key {key:?} for the {format} dictionary (expected {})", .format.describe())]
    InvalidKey { key: String, format: KeyFormat },
    /// The backing file could not be rewritten.
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// A persistent dictionary: in-memory map plus one backing file.
///
/// Exactly one `FileStore` should exist per backing path; nothing here
/// coordinates concurrent writers, and an external writer to the same
/// file is silently overwritten by the next full rewrite.
pub struct FileStore {
    map: BTreeMap<String, String>,
    path: PathBuf,
    format: KeyFormat,
}

impl FileStore {
    /// Opens a store over `path`, loading whatever the file holds.
    ///
    /// A missing file is an empty dictionary, not an error; the file is
    /// created lazily by the first successful mutation. Any other read
    /// failure is logged and degrades the store to an empty mapping.
    ///
    /// Pre-existing file content is trusted and not re-validated against
    /// `format`. Duplicate keys in the file resolve to the last line.
    pub fn open<P: AsRef<Path>>(path: P, format: KeyFormat) -> Self {
        let path = path.as_ref().to_path_buf();

        let mut map = BTreeMap::new();
        match read_entries(&path) {
            Ok(entries) => {
                for entry in entries {
                    let (key, value) = entry.into_parts();
                    map.insert(key, value);
                }
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                warn!(
                    "could not read dictionary file {}: {}; starting empty",
                    path.display(),
                    e
                );
            }
        }

        Self { map, path, format }
    }

    /// Returns a snapshot copy of the current mapping.
    ///
    /// Callers get their own map; mutating it does not touch the store.
    pub fn read_all(&self) -> BTreeMap<String, String> {
        self.map.clone()
    }

    /// Exact-match lookup. An absent key is a normal `None`.
    pub fn search(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    /// Inserts or overwrites `key`, then rewrites the backing file.
    ///
    /// # Errors
    ///
    /// [`StoreError::InvalidKey`] if `key` fails the store's format; the
    /// map and the file are left untouched. [`StoreError::Io`] if the
    /// rewrite fails; the in-memory insert has already happened.
    pub fn add(&mut self, key: String, value: String) -> Result<(), StoreError> {
        if !self.format.is_valid_key(&key) {
            return Err(StoreError::InvalidKey {
                key,
                format: self.format,
            });
        }

        self.map.insert(key, value);
        self.rewrite()
    }

    /// Removes `key` if present and rewrites the backing file.
    ///
    /// Returns `Ok(true)` if the key was removed, `Ok(false)` if it was
    /// not there, in which case the file is not written at all. Deleting
    /// the same key twice is therefore a no-op the second time.
    ///
    /// # Errors
    ///
    /// [`StoreError::Io`] if the rewrite fails after a removal.
    pub fn delete(&mut self, key: &str) -> Result<bool, StoreError> {
        if self.map.remove(key).is_none() {
            return Ok(false);
        }
        self.rewrite()?;
        Ok(true)
    }

    /// Number of entries in the dictionary.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the dictionary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// The key format this store enforces.
    pub fn format(&self) -> KeyFormat {
        self.format
    }

    /// The backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serializes the full mapping over the backing file.
    fn rewrite(&self) -> Result<(), StoreError> {
        write_entries(
            &self.path,
            self.map.iter().map(|(k, v)| (k.as_str(), v.as_str())),
        )?;
        Ok(())
    }
}
