//! Sentence-bank session facade
//!
//! `SentenceBank` owns one validated corpus for its whole lifetime and wires
//! the ranking and retrieval engines together. Single-threaded by design:
//! ranking mutates the table, retrieval reads it, and callers needing
//! concurrent use must serialize the two themselves.

use lexibank_core::Result;
use lexibank_engine::{retrieve, Corpus, KnownWordSet, RetrievedSentence};
use std::path::Path;

/// A loaded sentence corpus plus the operations on it
///
/// The corpus is validated eagerly by [`SentenceBank::open`] and never grows
/// or shrinks afterward; ranking only rewrites ratios in place. Dropping the
/// bank drops the table; nothing is written back to the source file.
#[derive(Debug, Clone)]
pub struct SentenceBank {
    corpus: Corpus,
}

impl SentenceBank {
    /// Load and validate the corpus at `corpus_path`.
    ///
    /// # Errors
    ///
    /// Everything `Corpus::load` raises: `InvalidArgument` for a bad path,
    /// `NotFound`/`PermissionDenied` for filesystem failures, `SchemaError`
    /// for structural problems, `DuplicateSentence` for duplicate rows.
    pub fn open(corpus_path: impl AsRef<Path>) -> Result<Self> {
        Ok(SentenceBank {
            corpus: Corpus::load(corpus_path)?,
        })
    }

    /// Recompute every ratio against the vocabulary at `known_words_path`.
    ///
    /// The vocabulary is loaded fresh on every call. A missing or unreadable
    /// source degrades to the empty vocabulary (every ratio becomes 0)
    /// instead of failing.
    pub fn rank(&mut self, known_words_path: impl AsRef<Path>) {
        lexibank_engine::rank_from_source(&mut self.corpus, known_words_path);
    }

    /// Recompute every ratio against an already-built vocabulary.
    pub fn rank_with(&mut self, known: &KnownWordSet) {
        lexibank_engine::rank(&mut self.corpus, known);
    }

    /// Retrieve up to `count` sentences containing `word`, best-known first.
    ///
    /// Read-only; see [`lexibank_engine::get_sentences`] for the contract.
    pub fn get_sentences(&self, word: &str, count: usize) -> Result<Vec<RetrievedSentence>> {
        retrieve::get_sentences(&self.corpus, word, count)
    }

    /// The underlying corpus, read-only.
    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    /// Number of sentences in the bank.
    pub fn len(&self) -> usize {
        self.corpus.len()
    }

    /// True if the bank holds no sentences.
    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }
}
