//! Column role classification.
//!
//! Maps free-form source headers onto semantic lead roles using a statically
//! declared, priority-ordered keyword table.
//!
//! ```
//! use lead_map::classify;
//! use lead_model::Role;
//!
//! let headers = vec!["Property Address".to_string(), "Owner First".to_string()];
//! let roles = classify(&headers);
//! assert_eq!(roles.header(Role::Address), Some("Property Address"));
//! assert_eq!(roles.header(Role::Email), None);
//! ```

#![deny(unsafe_code)]

mod classify;
mod keywords;
mod utils;

pub use classify::{classify, classify_with, detect_column};
pub use keywords::{KeywordTable, RoleKeywords};
pub use utils::normalize_text;
