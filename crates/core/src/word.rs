//! Validated query words
//!
//! `Word` is a newtype over a non-empty string. Retrieval and the card
//! boundary take it where an unvalidated `&str` would let empty queries
//! slip through.

use crate::error::{BankError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-empty query word
///
/// # Examples
///
/// ```
/// use lexibank_core::Word;
///
/// let word = Word::new("你").unwrap();
/// assert_eq!(word.as_str(), "你");
///
/// assert!(Word::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Word(String);

impl Word {
    /// Create a word, rejecting the empty string with `InvalidArgument`.
    pub fn new(word: impl Into<String>) -> Result<Self> {
        let word = word.into();
        if word.is_empty() {
            return Err(BankError::InvalidArgument(
                "Word must be non-empty string".to_string(),
            ));
        }
        Ok(Word(word))
    }

    /// The word as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner string.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_accepts_non_empty() {
        let word = Word::new("Hola").unwrap();
        assert_eq!(word.as_str(), "Hola");
        assert_eq!(word.to_string(), "Hola");
    }

    #[test]
    fn test_word_rejects_empty() {
        let err = Word::new("").unwrap_err();
        assert!(matches!(err, BankError::InvalidArgument(_)));
    }

    #[test]
    fn test_word_serializes_transparently() {
        let word = Word::new("懂").unwrap();
        assert_eq!(serde_json::to_string(&word).unwrap(), "\"懂\"");
    }
}
