use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use lead_core::{CleanResult, run_pipeline_with};
use lead_ingest::{read_csv_table, write_csv_file};
use lead_map::classify_with;
use lead_model::Table;
use tracing::{info, info_span, trace};

use lead_cli::config::{ConfigFile, Overrides};
use lead_cli::logging::redact_value;
use lead_cli::report::{CleanReport, default_output_path};

use crate::cli::{CleanArgs, InspectArgs, RolesArgs};
use crate::summary::{print_keyword_table, print_preview, print_role_table};

/// Result of a `clean` invocation.
pub struct CleanOutcome {
    pub input: PathBuf,
    /// `None` for dry runs.
    pub output: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub result: CleanResult,
}

pub fn run_clean(args: &CleanArgs) -> Result<CleanOutcome> {
    let span = info_span!("clean", input = %args.input.display());
    let _guard = span.enter();
    let start = Instant::now();

    let config = load_config(args.config.as_deref())?;
    let overrides = Overrides {
        drop_extra_columns: args.drop_extra_columns,
        pad_zip: args.pad_zip,
        require_email_at: args.require_email_at,
        no_name_split: args.no_name_split,
    };
    let options = overrides.apply(config.options);
    let keywords = config.keyword_table();

    let table = read_csv_table(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    let result = run_pipeline_with(&table, &options, &keywords).context("clean table")?;
    trace_rows(&result.table);

    let output = if args.dry_run {
        None
    } else {
        let path = args
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(&args.input));
        write_csv_file(&result.table, &path)
            .with_context(|| format!("write {}", path.display()))?;
        Some(path)
    };

    if let Some(report_path) = &args.report {
        CleanReport::new(&args.input, output.as_deref(), &result).write(report_path)?;
    }

    info!(
        rows_in = result.summary.input_rows,
        rows_out = result.summary.output_rows,
        dry_run = args.dry_run,
        duration_ms = start.elapsed().as_millis(),
        "clean complete"
    );
    Ok(CleanOutcome {
        input: args.input.clone(),
        output,
        report: args.report.clone(),
        result,
    })
}

pub fn run_inspect(args: &InspectArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let table = read_csv_table(&args.input)
        .with_context(|| format!("load {}", args.input.display()))?;
    let roles = classify_with(table.headers(), &config.keyword_table());

    println!("File: {}", args.input.display());
    println!(
        "Rows: {}  Columns: {}",
        table.row_count(),
        table.headers().len()
    );
    print_role_table(&roles, table.headers());
    print_preview(&table, args.rows);
    Ok(())
}

pub fn run_roles(args: &RolesArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    print_keyword_table(&config.keyword_table());
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ConfigFile> {
    match path {
        Some(path) => ConfigFile::load(path),
        None => Ok(ConfigFile::default()),
    }
}

fn trace_rows(table: &Table) {
    for (index, row) in table.rows().iter().enumerate() {
        for (header, cell) in table.headers().iter().zip(row.cells()) {
            trace!(
                row = index,
                column = %header,
                value = redact_value(cell.as_deref().unwrap_or_default()),
                "output cell"
            );
        }
    }
}
