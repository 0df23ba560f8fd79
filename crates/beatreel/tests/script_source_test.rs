//! Tests for reading scripts from files and standard input.

use beatreel::{BeatreelErrorKind, ScriptSource, ValidationErrorKind};
use std::io::{Cursor, Write};

#[test]
fn test_dash_means_stdin() {
    assert_eq!(ScriptSource::from_arg("-"), ScriptSource::Stdin);
    assert_eq!(
        ScriptSource::from_arg("scripts/pilot.txt"),
        ScriptSource::File("scripts/pilot.txt".into())
    );
}

#[test]
fn test_reads_file_verbatim() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, "  Fade in:\n\nThe harbor wakes.\n").expect("write script");

    let script = ScriptSource::from_arg(file.path())
        .read()
        .expect("readable script");
    assert_eq!(script, "  Fade in:\n\nThe harbor wakes.\n");
}

#[test]
fn test_reads_stdin_stream() {
    let stdin = Cursor::new("Meanwhile, the lighthouse keeper counts the ships.");
    let script = ScriptSource::Stdin
        .read_from(stdin)
        .expect("readable stdin");
    assert_eq!(script, "Meanwhile, the lighthouse keeper counts the ships.");
}

#[test]
fn test_missing_file_is_a_request_failure() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = ScriptSource::from_arg(dir.path().join("absent.txt"))
        .read()
        .unwrap_err();

    assert!(err.is_request_failure());
    match err.kind() {
        BeatreelErrorKind::Validation(e) => {
            assert!(matches!(e.kind, ValidationErrorKind::MissingScript))
        }
        other => panic!("expected a validation error, got {other:?}"),
    }
}
