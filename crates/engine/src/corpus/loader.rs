//! TSV corpus loading and validation
//!
//! The loader replaces the usual dataframe pipeline with explicit passes so
//! validation order is visible and testable:
//!
//! read raw rows → fill missing cells with defaults → trim outer whitespace
//! → duplicate check on trimmed sentences → parse ratios → range check
//!
//! Any failure is terminal for the corpus instance; nothing is retried.

use super::Corpus;
use lexibank_core::{ratio_in_range, BankError, Result, SentenceRecord};
use std::collections::{BTreeMap, HashSet};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Columns every corpus file must carry. Matching is exact and
/// case-sensitive; column order in the file is irrelevant.
const REQUIRED_COLUMNS: [&str; 3] = ["Sentence", "Meaning", "Custom Ratio"];

/// Indices of the required columns within the header row.
struct ColumnMap {
    sentence: usize,
    meaning: usize,
    ratio: usize,
}

/// One row as read from the file, before numeric parsing.
struct RawRow {
    sentence: String,
    meaning: String,
    ratio: String,
    extra: BTreeMap<String, String>,
}

impl RawRow {
    /// Pull cells out of a possibly-short record, filling absent cells with
    /// the empty string. Columns outside the required three are preserved
    /// uninterpreted.
    fn from_record(
        row: &csv::StringRecord,
        headers: &csv::StringRecord,
        columns: &ColumnMap,
    ) -> Self {
        let cell = |idx: usize| row.get(idx).unwrap_or("").to_string();

        let mut extra = BTreeMap::new();
        for (idx, name) in headers.iter().enumerate() {
            if idx == columns.sentence || idx == columns.meaning || idx == columns.ratio {
                continue;
            }
            extra.insert(name.to_string(), cell(idx));
        }

        RawRow {
            sentence: cell(columns.sentence),
            meaning: cell(columns.meaning),
            ratio: cell(columns.ratio),
            extra,
        }
    }
}

impl Corpus {
    /// Load and validate a corpus from a tab-separated file.
    ///
    /// The file must be UTF-8, use its first row as a header, and contain at
    /// least the columns `Sentence`, `Meaning`, and `Custom Ratio`. An empty
    /// corpus (header row only) is valid and yields a corpus of size 0.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument`: empty path, or extension is not `.tsv`
    /// - `NotFound` / `PermissionDenied`: filesystem-origin failures
    /// - `SchemaError`: required column absent, or a `Custom Ratio` cell is
    ///   non-numeric or outside [0, 1]
    /// - `DuplicateSentence`: two rows share a post-trim `Sentence` value
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        validate_path(path)?;

        let file = File::open(path).map_err(|e| open_error(path, e))?;
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .flexible(true)
            .from_reader(file);

        let headers = reader.headers().map_err(|e| read_error(path, e))?.clone();
        let columns = locate_columns(&headers)?;

        // Pass 1: raw rows, short rows padded with empty cells.
        let mut raw = Vec::new();
        for row in reader.records() {
            let row = row.map_err(|e| read_error(path, e))?;
            raw.push(RawRow::from_record(&row, &headers, &columns));
        }

        // Pass 2: trim leading/trailing whitespace on Sentence and Meaning.
        // Internal whitespace (tabs inside quoted fields, embedded newlines)
        // stays untouched.
        for row in &mut raw {
            row.sentence = row.sentence.trim().to_string();
            row.meaning = row.meaning.trim().to_string();
        }

        // Pass 3: duplicate check on trimmed sentences. Two empty sentences
        // collide like any other pair.
        let mut seen = HashSet::new();
        for row in &raw {
            if !seen.insert(row.sentence.as_str()) {
                return Err(BankError::DuplicateSentence(row.sentence.clone()));
            }
        }

        // Passes 4+5: numeric parse and range check.
        let mut records = Vec::with_capacity(raw.len());
        for row in raw {
            let custom_ratio = parse_ratio(&row.ratio)?;
            records.push(SentenceRecord {
                sentence: row.sentence,
                meaning: row.meaning,
                custom_ratio,
                extra: row.extra,
            });
        }

        tracing::debug!(
            target: "lexibank::corpus",
            rows = records.len(),
            path = %path.display(),
            "corpus loaded"
        );
        Ok(Corpus::from_records(records))
    }
}

/// Reject empty paths and non-`.tsv` extensions before touching the disk.
fn validate_path(path: &Path) -> Result<()> {
    if path.as_os_str().is_empty() {
        return Err(BankError::InvalidArgument(
            "path to the sentence corpus must be a non-empty string".to_string(),
        ));
    }
    if path.extension().and_then(|ext| ext.to_str()) != Some("tsv") {
        return Err(BankError::InvalidArgument(format!(
            "corpus path must end with .tsv, got {:?}",
            path.display()
        )));
    }
    Ok(())
}

/// Map filesystem errors onto the taxonomy so callers can branch on
/// recoverability.
fn open_error(path: &Path, err: std::io::Error) -> BankError {
    match err.kind() {
        ErrorKind::NotFound => BankError::NotFound(path.to_path_buf()),
        ErrorKind::PermissionDenied => BankError::PermissionDenied(path.to_path_buf()),
        _ => BankError::Io(err),
    }
}

/// Errors surfaced by the TSV reader mid-stream: I/O failures keep their
/// filesystem classification, everything else is a malformed file.
fn read_error(path: &Path, err: csv::Error) -> BankError {
    match err.into_kind() {
        csv::ErrorKind::Io(io) => open_error(path, io),
        other => BankError::SchemaError(format!("corpus file is not valid TSV: {other:?}")),
    }
}

/// Find each required column in the header, naming the first missing one.
fn locate_columns(headers: &csv::StringRecord) -> Result<ColumnMap> {
    let mut indices = [0usize; 3];
    for (slot, name) in REQUIRED_COLUMNS.iter().enumerate() {
        match headers.iter().position(|h| h == *name) {
            Some(idx) => indices[slot] = idx,
            None => {
                let found: Vec<&str> = headers.iter().collect();
                return Err(BankError::SchemaError(format!(
                    "column {name:?} not found; expected at least {REQUIRED_COLUMNS:?}, found {found:?}"
                )));
            }
        }
    }
    Ok(ColumnMap {
        sentence: indices[0],
        meaning: indices[1],
        ratio: indices[2],
    })
}

/// Parse one `Custom Ratio` cell. An absent or empty cell defaults to 0
/// (the fill-default pass); anything else must be a number in [0, 1].
/// Numbers are parsed after trimming, so padded cells like ` 0.5 ` pass.
fn parse_ratio(raw: &str) -> Result<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let ratio: f64 = trimmed
        .parse()
        .map_err(|_| BankError::SchemaError(format!("Custom Ratio {raw:?} is not numeric")))?;
    if !ratio_in_range(ratio) {
        return Err(BankError::SchemaError(format!(
            "Custom Ratios must be between 0 and 1, got {ratio}"
        )));
    }
    Ok(ratio)
}
