//! Data model for lead cleaning.
//!
//! - **table**: raw and cleaned tabular data (`Table`, `Row`)
//! - **role**: semantic column roles and the per-table `RoleMap`
//! - **record**: normalized records and the deduplication key
//! - **options**: run configuration

pub mod error;
pub mod options;
pub mod record;
pub mod role;
pub mod table;

pub use error::{ModelError, Result};
pub use options::{CleanOptions, ExtraColumns, ZipPolicy};
pub use record::{AddressLines, DedupeKey, NormalizedRecord};
pub use role::{Role, RoleMap};
pub use table::{Row, Table};
