//! Library side of the `lead-cleaner` command: configuration, logging and
//! the JSON run report.

pub mod config;
pub mod logging;
pub mod report;
