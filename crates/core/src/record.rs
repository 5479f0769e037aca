//! Sentence corpus records
//!
//! `SentenceRecord` is one row of the corpus after load-time normalization.
//! The loader in `lexibank-engine` enforces the invariants documented on the
//! fields; the ranking engine overwrites `custom_ratio` in place.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Check whether a ratio lies in the closed interval [0, 1].
///
/// NaN is rejected (it satisfies neither bound).
pub fn ratio_in_range(ratio: f64) -> bool {
    (0.0..=1.0).contains(&ratio)
}

/// One row of the sentence corpus
///
/// Invariants (established at load, maintained by the ranking engine):
/// - `sentence` is whitespace-trimmed and unique across the corpus
/// - `meaning` is whitespace-trimmed (may be empty)
/// - `custom_ratio` lies in [0, 1]
///
/// Internal whitespace in `sentence` and `meaning` (including tabs and
/// embedded newlines) is preserved exactly as read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentenceRecord {
    /// The example sentence in the target language
    pub sentence: String,
    /// Its meaning or translation (may be empty)
    pub meaning: String,
    /// Fraction of the sentence's tokens known to the learner
    pub custom_ratio: f64,
    /// Additional source-file columns, preserved but not interpreted.
    /// Ordered map so record equality and serialization are deterministic.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

impl SentenceRecord {
    /// Create a record with no extra columns.
    pub fn new(
        sentence: impl Into<String>,
        meaning: impl Into<String>,
        custom_ratio: f64,
    ) -> Self {
        SentenceRecord {
            sentence: sentence.into(),
            meaning: meaning.into(),
            custom_ratio,
            extra: BTreeMap::new(),
        }
    }
}
