use std::fs;

use lead_ingest::{IngestError, read_csv_table, write_csv_file, write_csv_table};
use lead_model::Table;

#[test]
fn reads_table_from_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("leads.csv");
    fs::write(
        &path,
        "Owner First,Property Address,Zip\nJohn,\"123 Main St, Apt 4\",\n\n,,\nJane,9 Oak Ave,02108\n",
    )
    .expect("write file");

    let table = read_csv_table(&path).expect("read csv");
    assert_eq!(table.headers(), ["Owner First", "Property Address", "Zip"]);
    assert_eq!(table.row_count(), 2);
    assert_eq!(table.cell(0, "Property Address"), Some("123 Main St, Apt 4"));
    assert_eq!(table.cell(0, "Zip"), None);
    assert_eq!(table.cell(1, "Zip"), Some("02108"));
}

#[test]
fn missing_file_is_reported() {
    let dir = tempfile::tempdir().expect("temp dir");
    let err = read_csv_table(&dir.path().join("absent.csv")).unwrap_err();
    assert!(matches!(err, IngestError::FileNotFound { .. }));
}

#[test]
fn repeated_and_blank_headers_still_load() {
    let table =
        lead_ingest::read_csv_from_reader("Zip,Address,Zip,\n02108,1 Elm St,02109,x\n".as_bytes())
            .expect("read csv");
    assert_eq!(table.headers(), ["Zip", "Address", "Zip (2)", "Unnamed: 3"]);
    assert_eq!(table.cell(0, "Zip"), Some("02108"));
    assert_eq!(table.cell(0, "Zip (2)"), Some("02109"));
    assert_eq!(table.cell(0, "Unnamed: 3"), Some("x"));
}

#[test]
fn writes_absent_cells_as_empty_fields() {
    let mut table = Table::new(vec!["Address Line 1".to_string(), "Notes".to_string()])
        .expect("table");
    table
        .push_row(vec![Some("123 Main Street".to_string()), None])
        .expect("row");
    table
        .push_row(vec![Some("9 Oak Avenue".to_string()), Some("gate, code 12".to_string())])
        .expect("row");

    let mut out = Vec::new();
    write_csv_table(&table, &mut out).expect("write csv");
    let out = String::from_utf8(out).expect("utf-8");
    insta::assert_snapshot!(out, @r#"
    Address Line 1,Notes
    123 Main Street,
    9 Oak Avenue,"gate, code 12"
    "#);
}

#[test]
fn file_round_trip_preserves_cells() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("out.csv");
    let mut table = Table::new(vec!["A".to_string(), "B".to_string()]).expect("table");
    table
        .push_row(vec![Some("x".to_string()), None])
        .expect("row");

    write_csv_file(&table, &path).expect("write file");
    let back = read_csv_table(&path).expect("read back");
    assert_eq!(back, table);
}
