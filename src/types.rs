//! Public types for the lexibank unified API.
//!
//! This module re-exports types from internal crates with a clean public
//! interface.

// Core value types and errors
pub use lexibank_core::{note_fields, BankError, KnownWordLookup, Result, SentenceRecord, Word};

// Engine types (users need these for ranking and retrieval)
pub use lexibank_engine::{
    get_sentences, rank, rank_from_source, tokenize, Corpus, KnownWordSet, RetrievedSentence,
};
