use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use lead_model::Table;
use tracing::{debug, info, warn};

use crate::error::{IngestError, Result};

const UTF8_BOM: char = '\u{feff}';

/// Loads a CSV file into a [`Table`].
pub fn read_csv_table(path: &Path) -> Result<Table> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            IngestError::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            IngestError::FileRead {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;
    let table = read_csv_from_reader(BufReader::new(file))?;
    info!(
        path = %path.display(),
        columns = table.headers().len(),
        rows = table.row_count(),
        "CSV loaded"
    );
    Ok(table)
}

/// Loads CSV data from any reader.
///
/// Header text is kept exactly as written apart from a leading UTF-8 byte
/// order mark. Blank headers become `Unnamed: <index>` and repeats get a
/// ` (2)`, ` (3)` suffix, so every column loads.
pub fn read_csv_from_reader<R: Read>(reader: R) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut records = reader.records();

    let header_record = match records.next() {
        Some(record) => record?,
        None => return Err(IngestError::EmptyCsv),
    };
    let headers: Vec<String> = header_record
        .iter()
        .enumerate()
        .map(|(idx, header)| {
            if idx == 0 {
                header.trim_start_matches(UTF8_BOM).to_string()
            } else {
                header.to_string()
            }
        })
        .collect();
    let headers = unique_headers(headers);
    let width = headers.len();
    let mut table = Table::new(headers)?;

    for (line, record) in records.enumerate() {
        let record = record?;
        // Line numbers are 1-based and count the header row.
        let line = line + 2;
        if record.iter().all(|field| field.trim().is_empty()) {
            debug!(line, "skipping blank row");
            continue;
        }
        if record.len() != width {
            warn!(
                line,
                expected = width,
                found = record.len(),
                "row width does not match header"
            );
        }
        let cells: Vec<Option<String>> = record
            .iter()
            .take(width)
            .map(|field| (!field.is_empty()).then(|| field.to_string()))
            .collect();
        table.push_row(cells)?;
    }
    Ok(table)
}

/// Names blank headers after their 0-based position and suffixes repeats.
fn unique_headers(headers: Vec<String>) -> Vec<String> {
    let mut taken = BTreeSet::new();
    let mut unique = Vec::with_capacity(headers.len());
    for (column, header) in headers.into_iter().enumerate() {
        let base = if header.trim().is_empty() {
            format!("Unnamed: {column}")
        } else {
            header.clone()
        };
        let mut name = base.clone();
        let mut n = 2;
        while taken.contains(&name) {
            name = format!("{base} ({n})");
            n += 1;
        }
        if name != header {
            warn!(column, original = %header, renamed = %name, "renamed blank or repeated header");
        }
        taken.insert(name.clone());
        unique.push(name);
    }
    unique
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(input: &str) -> Table {
        read_csv_from_reader(input.as_bytes()).unwrap()
    }

    #[test]
    fn strips_bom_from_first_header() {
        let table = read("\u{feff}Address,Zip\n1 Elm St,02108\n");
        assert_eq!(table.headers(), ["Address", "Zip"]);
    }

    #[test]
    fn header_whitespace_is_preserved() {
        let table = read(" Owner First ,Zip\nann,1\n");
        assert_eq!(table.headers(), [" Owner First ", "Zip"]);
    }

    #[test]
    fn ragged_rows_fit_header_width() {
        let table = read("A,B,C\n1\n1,2,3,4\n");
        assert_eq!(table.rows()[0].cells(), [Some("1".to_string()), None, None]);
        assert_eq!(table.rows()[1].cells().len(), 3);
        assert_eq!(table.cell(1, "C"), Some("3"));
    }

    #[test]
    fn blank_and_repeated_headers_are_renamed() {
        let table = read("Address,Zip,,\n1 Elm St,02108,,\n");
        assert_eq!(table.headers(), ["Address", "Zip", "Unnamed: 2", "Unnamed: 3"]);
        assert_eq!(table.row_count(), 1);

        let table = read("Zip,Zip,Zip (2), \n1,2,3,4\n");
        assert_eq!(table.headers(), ["Zip", "Zip (2)", "Zip (2) (2)", "Unnamed: 3"]);
        assert_eq!(table.cell(0, "Zip (2)"), Some("2"));
    }

    #[test]
    fn empty_input_is_an_error() {
        assert!(matches!(
            read_csv_from_reader("".as_bytes()),
            Err(IngestError::EmptyCsv)
        ));
    }

    #[test]
    fn header_only_input_yields_no_rows() {
        let table = read("Address,Zip\n");
        assert_eq!(table.row_count(), 0);
    }
}
