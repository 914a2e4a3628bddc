use std::fs::File;
use std::io::Write;
use std::path::Path;

use lead_model::Table;
use tracing::info;

use crate::error::{IngestError, Result};

/// Writes the header row and every row of `table` as CSV.
pub fn write_csv_table<W: Write>(table: &Table, writer: W) -> Result<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(table.headers())?;
    for row in table.rows() {
        writer.write_record(row.cells().iter().map(|cell| cell.as_deref().unwrap_or("")))?;
    }
    writer.flush().map_err(|source| IngestError::Write {
        target: "writer".to_string(),
        source,
    })
}

/// Writes `table` to `path`, replacing any existing file.
pub fn write_csv_file(table: &Table, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| IngestError::Write {
        target: path.display().to_string(),
        source,
    })?;
    write_csv_table(table, file)?;
    info!(path = %path.display(), rows = table.row_count(), "CSV written");
    Ok(())
}
