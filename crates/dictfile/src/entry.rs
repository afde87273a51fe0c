use std::fmt;

use crate::format::SEPARATOR;

/// A single key-value record of a dictionary file.
///
/// Immutable once constructed. No validation happens here; key rules are
/// enforced by the store at insertion time, and pre-existing file content
/// is trusted as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    key: String,
    value: String,
}

impl Entry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consumes the entry, returning `(key, value)`.
    pub fn into_parts(self) -> (String, String) {
        (self.key, self.value)
    }
}

impl fmt::Display for Entry {
    /// Renders as `<key> - <value>`, the same shape the file stores.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.key, SEPARATOR, self.value)
    }
}
