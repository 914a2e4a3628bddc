//! Lead cleaning pipeline.
//!
//! Sequences column classification, per-row normalization, deduplication and
//! output shaping over an in-memory [`Table`](lead_model::Table). Nothing here
//! performs file I/O.

pub mod dedupe;
pub mod output;
pub mod pipeline;

pub use dedupe::{DedupeOutcome, dedupe};
pub use output::{OutputColumn, output_columns};
pub use pipeline::{
    ClassifiedRun, CleanResult, CleaningRun, DedupedRun, NormalizedRun, RunSummary, Stage,
    run_pipeline, run_pipeline_with,
};
