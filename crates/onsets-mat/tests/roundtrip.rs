use std::fs;

use onsets_mat::{MatDocument, MatStruct, MatValue, read_mat, write_mat};
use proptest::prelude::{any, proptest};
use tempfile::tempdir;

/// A document shaped like a two-condition onset file with modulators.
fn onset_document() -> MatDocument {
    let mut doc = MatDocument::new();
    doc.push(
        "names",
        MatValue::Cell(vec![MatValue::string("face"), MatValue::string("house")]),
    );
    doc.push(
        "durations",
        MatValue::Cell(vec![MatValue::row(vec![0.0]), MatValue::row(vec![0.0])]),
    );
    doc.push(
        "onsets",
        MatValue::Cell(vec![
            MatValue::row(vec![1.0, 3.0, 5.0]),
            MatValue::row(vec![2.0, 4.0, 6.0]),
        ]),
    );
    doc.push(
        "pmod",
        MatValue::Struct(MatStruct {
            fields: vec!["name".to_string(), "poly".to_string(), "param".to_string()],
            records: vec![
                vec![
                    MatValue::Cell(vec![MatValue::string("rt")]),
                    MatValue::Cell(vec![MatValue::scalar(1.0)]),
                    MatValue::Cell(vec![MatValue::row(vec![42.0, 13.0, 666.0])]),
                ],
                vec![MatValue::empty(), MatValue::empty(), MatValue::empty()],
            ],
        }),
    );
    doc
}

#[test]
fn writes_and_reads_onset_document() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("design_run1.mat");

    let doc = onset_document();
    write_mat(&path, &doc).expect("write mat");
    let round = read_mat(&path).expect("read back");

    assert_eq!(round, doc);
    let names = round.get("names").expect("names variable");
    assert_eq!(
        names,
        &MatValue::Cell(vec![MatValue::string("face"), MatValue::string("house")])
    );
}

#[test]
fn rewriting_is_byte_identical() {
    let dir = tempdir().expect("tempdir");
    let first = dir.path().join("first.mat");
    let second = dir.path().join("second.mat");

    let doc = onset_document();
    write_mat(&first, &doc).expect("write first");
    write_mat(&second, &doc).expect("write second");

    let a = fs::read(&first).expect("read first");
    let b = fs::read(&second).expect("read second");
    assert_eq!(a, b);
}

#[test]
fn file_starts_with_level5_header() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("header.mat");
    write_mat(&path, &onset_document()).expect("write mat");

    let bytes = fs::read(&path).expect("read file");
    assert!(bytes.len() > 128);
    assert!(bytes.starts_with(b"MATLAB 5.0 MAT-file"));
    assert_eq!(&bytes[124..126], &[0x00, 0x01]);
    assert_eq!(&bytes[126..128], b"IM");
    // Every data element is 8-byte aligned, so the payload length is too.
    assert_eq!((bytes.len() - 128) % 8, 0);
}

#[test]
fn empty_arrays_roundtrip_as_zero_by_zero() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("empty.mat");

    let mut doc = MatDocument::new();
    doc.push("onsets", MatValue::Cell(vec![MatValue::row(Vec::new())]));
    doc.push("names", MatValue::Cell(Vec::new()));
    write_mat(&path, &doc).expect("write mat");

    let round = read_mat(&path).expect("read back");
    assert_eq!(
        round.get("onsets"),
        Some(&MatValue::Cell(vec![MatValue::empty()]))
    );
    assert_eq!(round.get("names"), Some(&MatValue::Cell(Vec::new())));
}

#[test]
fn nan_values_survive_serialization() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("nan.mat");

    let mut doc = MatDocument::new();
    doc.push("onsets", MatValue::row(vec![1.0, f64::NAN, 3.0]));
    write_mat(&path, &doc).expect("write mat");

    let round = read_mat(&path).expect("read back");
    let Some(MatValue::Numeric { data, .. }) = round.get("onsets") else {
        panic!("expected numeric onsets");
    };
    assert_eq!(data.len(), 3);
    assert!(data[1].is_nan());
}

#[test]
fn invalid_variable_name_is_rejected() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("bad.mat");

    let mut doc = MatDocument::new();
    doc.push("1bad name", MatValue::scalar(1.0));
    assert!(write_mat(&path, &doc).is_err());
    assert!(!path.exists() || fs::read(&path).expect("read").is_empty());
}

proptest! {
    #[test]
    fn row_vectors_roundtrip(values in proptest::collection::vec(any::<i32>(), 0..32)) {
        let values: Vec<f64> = values.into_iter().map(f64::from).collect();
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("prop.mat");

        let mut doc = MatDocument::new();
        doc.push("onsets", MatValue::row(values.clone()));
        write_mat(&path, &doc).expect("write mat");
        let round = read_mat(&path).expect("read back");

        assert_eq!(round.get("onsets"), Some(&MatValue::row(values)));
    }

    #[test]
    fn labels_roundtrip(label in "[a-zA-Z][a-zA-Z0-9_]{0,15}") {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("label.mat");

        let mut doc = MatDocument::new();
        doc.push("names", MatValue::Cell(vec![MatValue::string(label.clone())]));
        write_mat(&path, &doc).expect("write mat");
        let round = read_mat(&path).expect("read back");

        assert_eq!(
            round.get("names"),
            Some(&MatValue::Cell(vec![MatValue::string(label)]))
        );
    }
}
