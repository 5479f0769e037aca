//! lexibank: sentence ranking and retrieval for language-learning flashcards
//!
//! Given a tab-separated bank of example sentences and a list of words the
//! learner already knows, lexibank ranks every sentence by its known-word
//! ratio and retrieves the best example sentences for a target word.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐     ┌───────────────┐
//! │    corpus    │────▶│     rank     │     │   retrieve    │
//! │ (load + TSV  │     │ (tokenize +  │     │ (literal match│
//! │  validation) │     │  ratio pass) │     │  + ordering)  │
//! └──────────────┘     └──────────────┘     └───────────────┘
//!         ▲                   │ mutates            │ reads
//!         └───────────────────┴────────────────────┘
//!                        Corpus (in-memory table)
//! ```
//!
//! The loader runs once at construction; ranking rewrites ratios in place;
//! retrieval is read-only. All paths are caller-supplied; the crate never
//! assumes a data directory.
//!
//! # Usage
//!
//! ```no_run
//! use lexibank::SentenceBank;
//!
//! # fn main() -> lexibank::Result<()> {
//! let mut bank = SentenceBank::open("sentences.tsv")?;
//! bank.rank("known.csv");
//! let examples = bank.get_sentences("你", 3)?;
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
mod bank;
mod types;

// Re-exports for the public API
pub use bank::SentenceBank;
pub use types::*;
