//! Error taxonomy for corpus loading, ranking, and retrieval
//!
//! Filesystem-origin failures (`NotFound`, `PermissionDenied`) are surfaced
//! distinctly from argument errors so callers can branch on recoverability.
//! Every message names the violated contract.

use std::path::PathBuf;
use thiserror::Error;

/// Result alias used across all lexibank crates.
pub type Result<T> = std::result::Result<T, BankError>;

/// Error type for corpus and retrieval operations
#[derive(Debug, Error)]
pub enum BankError {
    /// Caller-supplied argument violated a contract (type, emptiness, range)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Corpus is structurally invalid: missing column, unparseable or
    /// out-of-range value
    #[error("schema error: {0}")]
    SchemaError(String),

    /// Two or more rows share an identical post-trim sentence
    #[error("duplicate sentence in corpus: {0:?}")]
    DuplicateSentence(String),

    /// Source file does not exist
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Source file exists but cannot be read
    #[error("permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),

    /// Any other I/O failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_contract() {
        let err = BankError::SchemaError("column \"Meaning\" not found".to_string());
        assert!(err.to_string().contains("Meaning"));

        let err = BankError::DuplicateSentence("Hola!".to_string());
        assert!(err.to_string().contains("Hola!"));

        let err = BankError::NotFound(PathBuf::from("/tmp/missing.tsv"));
        assert!(err.to_string().contains("missing.tsv"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "truncated");
        let err = BankError::from(io);
        assert!(matches!(err, BankError::Io(_)));
    }
}
