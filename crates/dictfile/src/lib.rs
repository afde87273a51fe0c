//! # Dictfile
//!
//! The flat-text on-disk representation of one dictionary.
//!
//! A dictionary file is UTF-8 text, one entry per line, key and value
//! separated by a literal `" - "`:
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ test - тест                          │  key " - " value
//! │ word - слово                         │
//! │ ...one line per entry...             │
//! └──────────────────────────────────────┘
//! ```
//!
//! Parsing splits each line on the *first* `" - "` only, so values may
//! contain the separator themselves. Surrounding whitespace is trimmed
//! from both parts. Lines without a separator are dropped silently on
//! load; there is no positional error reporting.
//!
//! Files are rewritten in full, never patched in place. The writer is
//! crash-safe: it writes a sibling temp file, syncs it, and atomically
//! renames it over the target, so a failed rewrite leaves the previous
//! content intact.
//!
//! ## Example
//! ```rust
//! use dictfile::parse_line;
//!
//! let entry = parse_line("test - тест").unwrap();
//! assert_eq!(entry.key(), "test");
//! assert_eq!(entry.value(), "тест");
//! assert!(parse_line("no separator here").is_none());
//! ```

mod entry;
mod format;
mod reader;
mod writer;

pub use entry::Entry;
pub use format::{parse_line, LINE_ENDING, SEPARATOR};
pub use reader::read_entries;
pub use writer::write_entries;
