use std::fs;
use std::io::Cursor;

use sdic::ChunkSequence;
use tempfile::tempdir;

const SEP: &str = "<---Chunk--->";

fn load(input: &str) -> ChunkSequence {
    ChunkSequence::from_reader(Cursor::new(input), SEP).unwrap()
}

fn fragments(sequence: &ChunkSequence, chunk: usize) -> Vec<&str> {
    sequence.chunks()[chunk]
        .fragments()
        .iter()
        .map(String::as_str)
        .collect()
}

#[test]
fn invariant_duplicate_fragments_dropped() {
    let sequence = load("foo\nfoo\nbar\nfoo\n");

    assert_eq!(sequence.len(), 1);
    // First occurrence wins; later identical lines are silently dropped.
    assert_eq!(fragments(&sequence, 0), vec!["", "foo", "bar"]);
}

#[test]
fn invariant_separator_starts_new_chunk() {
    let sequence = load(&format!("a\n{SEP}\nb\n"));

    assert_eq!(sequence.len(), 2);
    assert_eq!(fragments(&sequence, 0), vec!["", "a"]);
    assert_eq!(fragments(&sequence, 1), vec!["", "b"]);
}

#[test]
fn invariant_every_chunk_has_leading_empty_fragment() {
    let sequence = load(&format!("x\n{SEP}\n{SEP}\ny\n"));

    assert_eq!(sequence.len(), 3);
    // The middle chunk saw no fragment lines but still holds the implicit
    // empty fragment.
    assert_eq!(fragments(&sequence, 1), vec![""]);
    assert_eq!(sequence.sizes(), vec![2, 1, 2]);
}

#[test]
fn empty_input_yields_single_empty_chunk() {
    let sequence = load("");

    assert_eq!(sequence.len(), 1);
    assert_eq!(fragments(&sequence, 0), vec![""]);
}

#[test]
fn trailing_separator_yields_trailing_empty_chunk() {
    let sequence = load(&format!("a\n{SEP}\n"));

    assert_eq!(sequence.len(), 2);
    assert_eq!(fragments(&sequence, 1), vec![""]);
}

#[test]
fn matching_is_exact_no_trimming_no_case_folding() {
    let sequence = load("foo\nFoo\n foo\nfoo \n");

    // All four lines differ byte-for-byte, so all four survive.
    assert_eq!(fragments(&sequence, 0), vec!["", "foo", "Foo", " foo", "foo "]);
}

#[test]
fn separator_comparison_is_exact() {
    // A line merely containing the separator is a fragment, not a boundary.
    let sequence = load(&format!("a\n {SEP}\nb\n"));
    let padded = format!(" {SEP}");

    assert_eq!(sequence.len(), 1);
    assert_eq!(fragments(&sequence, 0), vec!["", "a", padded.as_str(), "b"]);
}

#[test]
fn dedup_is_per_chunk_not_global() {
    let sequence = load(&format!("foo\n{SEP}\nfoo\n"));

    assert_eq!(sequence.len(), 2);
    assert_eq!(fragments(&sequence, 0), vec!["", "foo"]);
    assert_eq!(fragments(&sequence, 1), vec!["", "foo"]);
}

#[test]
fn from_path_reads_dictionary_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("dict.txt");
    fs::write(&path, format!("foo\nbar\n{SEP}\n1\n2\n")).unwrap();

    let sequence = ChunkSequence::from_path(&path, SEP).unwrap();

    assert_eq!(sequence.sizes(), vec![3, 3]);
    assert_eq!(fragments(&sequence, 0), vec!["", "foo", "bar"]);
    assert_eq!(fragments(&sequence, 1), vec!["", "1", "2"]);
}

#[test]
fn from_path_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("does-not-exist");

    let result = ChunkSequence::from_path(&path, SEP);
    assert!(matches!(result, Err(sdic::Error::Io(_))));
}
