//! Load, clean, write and report through the library crates, the way the
//! `clean` command chains them.

use std::fs;
use std::path::Path;

use lead_cli::config::{ConfigFile, Overrides};
use lead_cli::report::{CleanReport, default_output_path};
use lead_core::run_pipeline_with;
use lead_ingest::{read_csv_table, write_csv_file};

const LEADS: &str = "\
Owner Name,Property Address,Property City,Property State,Property Zip,APN
JOHN SMITH,\"123 main st, apt 4\",austin,tx,78701,0001
Jane Doe,,austin,tx,78701,0002
john smith,123 MAIN STREET Apt. 4,Austin,TX,78701-0000,0003
";

fn write_input(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("leads.csv");
    fs::write(&path, LEADS).expect("write input");
    path
}

#[test]
fn clean_writes_csv_and_report() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(dir.path());
    let config = ConfigFile::default();

    let table = read_csv_table(&input).expect("read input");
    let result =
        run_pipeline_with(&table, &config.options, &config.keyword_table()).expect("clean");

    let output = default_output_path(&input);
    write_csv_file(&result.table, &output).expect("write output");
    let written = fs::read_to_string(&output).expect("read output");
    insta::assert_snapshot!(written, @r"
    First Name,Last Name,Address Line 1,Address Line 2,City,State,Zip Code,APN
    John,Smith,123 Main Street,Apt 4,Austin,TX,78701,0001
    ");

    let report = CleanReport::new(&input, Some(&output), &result);
    insta::assert_json_snapshot!(report.detected_columns, @r#"
    {
      "Address": "Property Address",
      "City": "Property City",
      "State": "Property State",
      "Zip": "Property Zip",
      "Email": null,
      "Phone": null,
      "First Name": null,
      "Last Name": null,
      "Full Name": "Owner Name"
    }
    "#);

    let report_path = dir.path().join("report.json");
    report.write(&report_path).expect("write report");
    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&report_path).expect("read report"))
            .expect("parse report");
    assert_eq!(json["summary"]["input_rows"], 3);
    assert_eq!(json["summary"]["dropped_blank_address"], 1);
    assert_eq!(json["summary"]["dropped_duplicates"], 1);
    assert_eq!(json["summary"]["unmapped_columns"][0], "APN");
}

#[test]
fn config_and_flags_shape_the_run() {
    let dir = tempfile::tempdir().expect("temp dir");
    let input = write_input(dir.path());
    let config_path = dir.path().join("lead-cleaner.toml");
    fs::write(&config_path, "[options]\nextra_columns = \"drop\"\n").expect("write config");

    let config = ConfigFile::load(&config_path).expect("load config");
    let options = Overrides {
        no_name_split: true,
        ..Overrides::default()
    }
    .apply(config.options);

    let table = read_csv_table(&input).expect("read input");
    let result = run_pipeline_with(&table, &options, &config.keyword_table()).expect("clean");
    assert_eq!(
        result.table.headers(),
        [
            "Address Line 1",
            "Address Line 2",
            "City",
            "State",
            "Zip Code"
        ]
    );
    assert_eq!(result.table.row_count(), 1);
    assert_eq!(result.summary.unmapped_columns, vec!["Owner Name", "APN"]);
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("bad.toml");
    fs::write(&path, "[options]\nzip_policy = \"round\"\n").expect("write config");
    let err = ConfigFile::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("bad.toml"));
}
