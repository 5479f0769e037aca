//! Literal substring retrieval ranked by known-word ratio
//!
//! Matching is literal and case-insensitive: the query word is
//! metacharacter-escaped before compilation, so `.` matches a period and
//! nothing else. No fuzzy or stemmed matching.

use crate::corpus::Corpus;
use lexibank_core::{BankError, Result, SentenceRecord};
use regex::RegexBuilder;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One retrieval hit, projected from the matching record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedSentence {
    /// The matching sentence
    pub sentence: String,
    /// Its meaning or translation
    pub meaning: String,
    /// Known-word ratio at the time of retrieval
    pub custom_ratio: f64,
}

/// Retrieve up to `count` sentences containing `word`, best-known first.
///
/// Matches are ordered by `custom_ratio` descending; ties keep source-file
/// order (stable sort). Fewer matches than `count` is not an error; the
/// result is simply shorter. Zero matches yield an empty vector. The corpus
/// is never modified, so identical calls return identical results.
///
/// # Errors
///
/// - `InvalidArgument` if `word` is empty
/// - `InvalidArgument` if `count` is zero or exceeds the corpus size
pub fn get_sentences(corpus: &Corpus, word: &str, count: usize) -> Result<Vec<RetrievedSentence>> {
    if word.is_empty() {
        return Err(BankError::InvalidArgument(
            "Word must be non-empty string".to_string(),
        ));
    }
    if count == 0 || count > corpus.len() {
        return Err(BankError::InvalidArgument(
            "count must be a positive integer not exceeding corpus size".to_string(),
        ));
    }

    let pattern = RegexBuilder::new(&regex::escape(word))
        .case_insensitive(true)
        .build()
        .map_err(|e| {
            BankError::InvalidArgument(format!("word cannot be compiled into a pattern: {e}"))
        })?;

    let mut matches: Vec<&SentenceRecord> = corpus
        .iter()
        .filter(|record| pattern.is_match(&record.sentence))
        .collect();

    // Stable sort: equal ratios keep file order.
    matches.sort_by(|a, b| {
        b.custom_ratio
            .partial_cmp(&a.custom_ratio)
            .unwrap_or(Ordering::Equal)
    });
    matches.truncate(count);

    tracing::debug!(
        target: "lexibank::retrieve",
        word,
        requested = count,
        returned = matches.len(),
        "retrieval complete"
    );

    Ok(matches
        .into_iter()
        .map(|record| RetrievedSentence {
            sentence: record.sentence.clone(),
            meaning: record.meaning.clone(),
            custom_ratio: record.custom_ratio,
        })
        .collect())
}
