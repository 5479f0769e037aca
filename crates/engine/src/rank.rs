//! Known-word-ratio ranking
//!
//! `rank` rewrites every record's `custom_ratio` as the fraction of its
//! tokens found in a `KnownWordSet`. Each record is scored independently of
//! the others, so a pass is order-agnostic and never fails.
//!
//! The known-words source is the single designed soft failure in the system:
//! an absent vocabulary file is a valid "beginner" state, not corruption, so
//! `KnownWordSet::load` degrades to the empty set with a warning instead of
//! raising.

use crate::corpus::Corpus;
use crate::tokenize::tokenize;
use lexibank_core::KnownWordLookup;
use std::collections::HashSet;
use std::fs::File;
use std::path::Path;

/// The learner's vocabulary as a set of lowercase words
///
/// Matching is whole-token equality on lowercase strings. The empty set is a
/// valid state meaning "nothing known".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KnownWordSet {
    words: HashSet<String>,
}

impl KnownWordSet {
    /// The empty vocabulary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from word strings, lowercasing and skipping blanks.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter_map(|w| {
                let w = w.as_ref().trim().to_lowercase();
                if w.is_empty() {
                    None
                } else {
                    Some(w)
                }
            })
            .collect();
        KnownWordSet { words }
    }

    /// Load the vocabulary from a tabular file with a column literally named
    /// `known` (case-sensitive).
    ///
    /// Never fails: a missing file, an unreadable file, or an absent `known`
    /// column all degrade to the empty set with a `warn`-level log line.
    /// Entries are lowercased; blank cells are skipped.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                tracing::warn!(
                    target: "lexibank::rank",
                    error = %e,
                    path = %path.display(),
                    "known-words source unreadable, treating vocabulary as empty"
                );
                return Self::new();
            }
        };

        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);
        let headers = match reader.headers() {
            Ok(headers) => headers.clone(),
            Err(e) => {
                tracing::warn!(
                    target: "lexibank::rank",
                    error = %e,
                    path = %path.display(),
                    "known-words source has no readable header, treating vocabulary as empty"
                );
                return Self::new();
            }
        };

        let Some(column) = headers.iter().position(|h| h == "known") else {
            tracing::warn!(
                target: "lexibank::rank",
                path = %path.display(),
                "known-words source has no \"known\" column, treating vocabulary as empty"
            );
            return Self::new();
        };

        let mut words = HashSet::new();
        for row in reader.records() {
            let Ok(row) = row else {
                // Malformed row in a soft source: skip it, keep the rest.
                continue;
            };
            if let Some(cell) = row.get(column) {
                let word = cell.trim().to_lowercase();
                if !word.is_empty() {
                    words.insert(word);
                }
            }
        }

        KnownWordSet { words }
    }

    /// True if the lowercase token is in the vocabulary.
    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }

    /// Number of known words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// True if nothing is known.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl KnownWordLookup for KnownWordSet {
    fn is_known(&self, word: &str) -> bool {
        self.contains(word)
    }
}

/// Recompute every record's known-word ratio in place.
///
/// Per record: an empty or whitespace-only sentence scores 0; otherwise the
/// ratio is `known tokens / total tokens`, with repeated tokens counted each
/// time they appear. The result always lies in [0, 1].
pub fn rank(corpus: &mut Corpus, known: &KnownWordSet) {
    for record in corpus.records_mut() {
        record.custom_ratio = sentence_ratio(&record.sentence, known);
    }
    tracing::debug!(
        target: "lexibank::rank",
        rows = corpus.len(),
        vocabulary = known.len(),
        "ranking pass complete"
    );
}

/// Load the vocabulary fresh from `path` and rank against it.
///
/// Never fails; see `KnownWordSet::load` for the degradation contract.
pub fn rank_from_source(corpus: &mut Corpus, path: impl AsRef<Path>) {
    let known = KnownWordSet::load(path);
    rank(corpus, &known);
}

/// Ratio for a single sentence. Zero-token sentences score 0.
fn sentence_ratio(sentence: &str, known: &KnownWordSet) -> f64 {
    if sentence.trim().is_empty() {
        return 0.0;
    }
    let tokens = tokenize(sentence);
    if tokens.is_empty() {
        return 0.0;
    }
    let known_count = tokens.iter().filter(|t| known.contains(t)).count();
    known_count as f64 / tokens.len() as f64
}
