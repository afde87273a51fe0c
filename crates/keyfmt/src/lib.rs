//! # Keyfmt
//!
//! Key classification rules for the dictionary store.
//!
//! Every dictionary is bound to exactly one [`KeyFormat`] when its store is
//! constructed, and that format never changes for the store's lifetime. The
//! set of formats is closed: a new key shape is added as a new variant,
//! existing variants never change meaning.
//!
//! ## Example
//! ```rust
//! use keyfmt::KeyFormat;
//!
//! assert!(KeyFormat::FourLetter.is_valid_key("test"));
//! assert!(!KeyFormat::FourLetter.is_valid_key("ab1c"));
//! assert!(KeyFormat::FiveDigit.is_valid_key("12345"));
//! assert!(!KeyFormat::FiveDigit.is_valid_key("123"));
//! ```

use std::fmt;

/// The key rule a dictionary enforces on insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyFormat {
    /// Exactly four ASCII letters (`[a-zA-Z]`), e.g. `test`.
    FourLetter,
    /// Exactly five decimal digits (`[0-9]`), e.g. `12345`.
    FiveDigit,
}

impl KeyFormat {
    /// Returns `true` if `candidate` satisfies this format.
    ///
    /// Total over any input: empty strings, wrong lengths, mixed charsets
    /// and non-ASCII text all return `false`, never an error.
    pub fn is_valid_key(&self, candidate: &str) -> bool {
        match self {
            KeyFormat::FourLetter => {
                candidate.len() == 4 && candidate.chars().all(|c| c.is_ascii_alphabetic())
            }
            KeyFormat::FiveDigit => {
                candidate.len() == 5 && candidate.chars().all(|c| c.is_ascii_digit())
            }
        }
    }

    /// Short rule text for prompts and error messages.
    pub fn describe(&self) -> &'static str {
        match self {
            KeyFormat::FourLetter => "four ASCII letters, e.g. `test`",
            KeyFormat::FiveDigit => "five decimal digits, e.g. `12345`",
        }
    }
}

impl fmt::Display for KeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyFormat::FourLetter => write!(f, "four-letter"),
            KeyFormat::FiveDigit => write!(f, "five-digit"),
        }
    }
}
