//! In-memory sentence corpus
//!
//! `Corpus` is an ordered array of `SentenceRecord` in source-file order.
//! It is created once by `Corpus::load`, validated eagerly, and never grows
//! or shrinks afterward. The ranking engine rewrites `custom_ratio` by row
//! position; every other access is read-only.

mod loader;

use lexibank_core::SentenceRecord;

/// Ordered, fixed-size collection of sentence records
///
/// Row order is source-file order and is the tie-break order for retrieval.
/// The corpus is owned by a single session; see the crate docs for the
/// (absent) concurrency model.
#[derive(Debug, Clone, PartialEq)]
pub struct Corpus {
    records: Vec<SentenceRecord>,
}

impl Corpus {
    /// Wrap already-validated records. Loader and tests only: callers must
    /// have established the uniqueness and ratio-range invariants.
    pub(crate) fn from_records(records: Vec<SentenceRecord>) -> Self {
        Corpus { records }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the corpus has no data rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in file order.
    pub fn records(&self) -> &[SentenceRecord] {
        &self.records
    }

    /// Record at a row position, if in bounds.
    pub fn get(&self, row: usize) -> Option<&SentenceRecord> {
        self.records.get(row)
    }

    /// Iterate records in file order.
    pub fn iter(&self) -> std::slice::Iter<'_, SentenceRecord> {
        self.records.iter()
    }

    /// Mutable access for the ranking pass. Crate-internal so external
    /// callers cannot break the ratio-range invariant.
    pub(crate) fn records_mut(&mut self) -> &mut [SentenceRecord] {
        &mut self.records
    }
}

impl<'a> IntoIterator for &'a Corpus {
    type Item = &'a SentenceRecord;
    type IntoIter = std::slice::Iter<'a, SentenceRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
