//! End-to-end tests through the public `SentenceBank` facade.
//!
//! Scenarios mirror how the flashcard pipeline drives the crate: open a
//! corpus file, rank it against a vocabulary file, pull example sentences
//! for a target word, hand the projection to the exporter.

use lexibank::{note_fields, BankError, SentenceBank, Word};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn init_logging() {
    // Visibility into the soft-failure warnings when running with --nocapture.
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = File::create(&path).unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    path
}

fn mixed_corpus(dir: &TempDir) -> PathBuf {
    write_file(
        dir,
        "sentences.tsv",
        "Sentence\tMeaning\tCustom Ratio\n\
         Hola! Como estas?\tHello! How are you?\t0.3\n\
         Muy bien, gracias.\tVery well, thanks.\t0.6\n\
         hola de nuevo\thello again\t0.9\n\
         ¿Qué tal?\tHow is it going?\t0.1\n\
         HOLA amigo\thello friend\t0.6\n",
    )
}

#[test]
fn test_open_rank_retrieve_session() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let corpus_path = mixed_corpus(&dir);
    let known_path = write_file(&dir, "known.csv", "known\nhola\ncomo\nestas\n");

    let mut bank = SentenceBank::open(&corpus_path).unwrap();
    assert_eq!(bank.len(), 5);

    bank.rank(&known_path);
    // "Hola! Como estas?" is now fully known and ranks first for "hola".
    let hits = bank.get_sentences("hola", 5).unwrap();
    assert_eq!(hits.len(), 3);
    assert_eq!(hits[0].sentence, "Hola! Como estas?");
    assert_eq!(hits[0].custom_ratio, 1.0);
}

#[test]
fn test_retrieval_order_uses_loaded_ratios() {
    let dir = TempDir::new().unwrap();
    let bank = SentenceBank::open(&mixed_corpus(&dir)).unwrap();

    let hits = bank.get_sentences("Hola", 5).unwrap();
    let ratios: Vec<f64> = hits.iter().map(|h| h.custom_ratio).collect();
    assert_eq!(ratios, vec![0.9, 0.6, 0.3]);
}

#[test]
fn test_retrieval_case_insensitive_counts_match() {
    let dir = TempDir::new().unwrap();
    let bank = SentenceBank::open(&mixed_corpus(&dir)).unwrap();

    let lower = bank.get_sentences("hola", 5).unwrap();
    let upper = bank.get_sentences("Hola", 5).unwrap();
    assert_eq!(lower.len(), upper.len());
}

#[test]
fn test_count_beyond_matches_is_not_an_error() {
    // 2 matches for "Hola" out of 5 rows: asking for 5 returns the 2.
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "two_matches.tsv",
        "Sentence\tMeaning\tCustom Ratio\n\
         Hola uno\tone\t0.2\n\
         Hola dos\ttwo\t0.8\n\
         tres\tthree\t0.5\n\
         cuatro\tfour\t0.5\n\
         cinco\tfive\t0.5\n",
    );
    let bank = SentenceBank::open(&path).unwrap();

    let hits = bank.get_sentences("Hola", 5).unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].sentence, "Hola dos");
}

#[test]
fn test_argument_validation_through_facade() {
    let dir = TempDir::new().unwrap();
    let bank = SentenceBank::open(&mixed_corpus(&dir)).unwrap();

    assert!(matches!(
        bank.get_sentences("", 1).unwrap_err(),
        BankError::InvalidArgument(_)
    ));
    assert!(matches!(
        bank.get_sentences("hola", 0).unwrap_err(),
        BankError::InvalidArgument(_)
    ));
    assert!(matches!(
        bank.get_sentences("hola", 6).unwrap_err(),
        BankError::InvalidArgument(_)
    ));
}

#[test]
fn test_missing_vocabulary_is_a_beginner_not_an_error() {
    init_logging();
    let dir = TempDir::new().unwrap();
    let mut bank = SentenceBank::open(&mixed_corpus(&dir)).unwrap();

    bank.rank(dir.path().join("never_written.csv"));
    assert!(bank.corpus().iter().all(|r| r.custom_ratio == 0.0));
}

#[test]
fn test_duplicate_corpus_fails_to_open() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "dupes.tsv",
        "Sentence\tMeaning\tCustom Ratio\nHola!\tHello!\t1.0\nHola!\tHi!\t0.8\n",
    );

    assert!(matches!(
        SentenceBank::open(&path).unwrap_err(),
        BankError::DuplicateSentence(_)
    ));
}

#[test]
fn test_retrieval_is_idempotent_on_unmutated_corpus() {
    let dir = TempDir::new().unwrap();
    let bank = SentenceBank::open(&mixed_corpus(&dir)).unwrap();

    let first = bank.get_sentences("hola", 3).unwrap();
    let second = bank.get_sentences("hola", 3).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_hits_serialize_for_the_exporter() {
    let dir = TempDir::new().unwrap();
    let bank = SentenceBank::open(&mixed_corpus(&dir)).unwrap();

    let hits = bank.get_sentences("hola", 1).unwrap();
    let json = serde_json::to_value(&hits[0]).unwrap();
    assert_eq!(json["sentence"], "hola de nuevo");
    assert_eq!(json["custom_ratio"], 0.9);

    let word = Word::new("hola").unwrap();
    let fields = note_fields(&word);
    assert_eq!(fields.get("word").map(String::as_str), Some("hola"));
}

#[test]
fn test_empty_bank_rejects_any_count() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "empty.tsv", "Sentence\tMeaning\tCustom Ratio\n");
    let bank = SentenceBank::open(&path).unwrap();

    assert!(bank.is_empty());
    // count must not exceed corpus size, and zero is not positive: an empty
    // bank has no valid count at all.
    assert!(matches!(
        bank.get_sentences("hola", 1).unwrap_err(),
        BankError::InvalidArgument(_)
    ));
}
