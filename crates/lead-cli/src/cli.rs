//! CLI argument definitions for the lead cleaner.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lead-cleaner",
    version,
    about = "Clean, normalize and deduplicate property lead lists",
    long_about = "Clean property lead CSV exports.\n\n\
                  Detects address, contact and name columns from their headers,\n\
                  normalizes every value and collapses duplicate addresses."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format.
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Include cell values in trace logs. Lead data is personal data.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean a lead CSV and write the result.
    Clean(CleanArgs),

    /// Show detected columns and a preview of the first rows.
    Inspect(InspectArgs),

    /// List the column roles and the header keywords that select them.
    Roles(RolesArgs),
}

#[derive(Parser)]
pub struct CleanArgs {
    /// Lead CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output CSV path (default: <INPUT stem>_cleaned.csv beside the input).
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Write detected columns and run counts as JSON.
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// TOML configuration file.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Leave unrecognized columns out of the output.
    #[arg(long = "drop-extra-columns")]
    pub drop_extra_columns: bool,

    /// Left-pad short numeric zip codes with zeros.
    #[arg(long = "pad-zip")]
    pub pad_zip: bool,

    /// Blank out emails without an '@'.
    #[arg(long = "require-email-at")]
    pub require_email_at: bool,

    /// Keep a full-name column as is instead of splitting it.
    #[arg(long = "no-name-split")]
    pub no_name_split: bool,

    /// Run the pipeline and print the summary without writing the CSV.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    /// Lead CSV file.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Number of rows to preview.
    #[arg(long, default_value_t = 5)]
    pub rows: usize,

    /// TOML configuration file providing extra keywords.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

#[derive(Parser)]
pub struct RolesArgs {
    /// TOML configuration file providing extra keywords.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
