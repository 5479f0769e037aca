//! Sentence-ranking and retrieval engine
//!
//! This crate implements the four components of the lexibank core:
//! - `corpus`: TSV corpus loader and validator (`Corpus`)
//! - `tokenize`: script-aware sentence tokenization
//! - `rank`: in-place known-word-ratio recomputation (`KnownWordSet`)
//! - `retrieve`: literal substring retrieval ranked by ratio
//!
//! Control flow: the loader produces the table once at construction; ranking
//! mutates it in place; retrieval only reads it. Everything is synchronous
//! and in-memory after the one-time file read. Callers needing concurrent
//! use must serialize ranking against retrieval; no internal locking is
//! provided.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod corpus;
pub mod rank;
pub mod retrieve;
pub mod tokenize;

// Re-exports
pub use corpus::Corpus;
pub use rank::{rank, rank_from_source, KnownWordSet};
pub use retrieve::{get_sentences, RetrievedSentence};
pub use tokenize::tokenize;
