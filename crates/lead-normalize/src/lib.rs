//! Field normalizers for lead records.
//!
//! Every normalizer is total: it accepts any input, never panics, and returns
//! an empty string for values it cannot interpret.
//!
//! - **text**: base sanitizer and casing helpers
//! - **address**: street address canonicalization and unit extraction
//! - **email** / **phone**: contact normalization
//! - **name**: person and city names, full-name splitting
//! - **zip** / **state**: postal fields

pub mod address;
pub mod email;
pub mod name;
pub mod phone;
pub mod state;
pub mod text;
pub mod zip;

use lead_model::{CleanOptions, Role};

pub use address::canonicalize_address;
pub use email::{looks_like_email, normalize_email};
pub use name::{normalize_city, normalize_name, split_full_name};
pub use phone::normalize_phone;
pub use state::normalize_state;
pub use text::{lowercase_ordinals, sanitize_text, title_case};
pub use zip::normalize_zip;

/// Normalizes a single cell for a scalar role.
///
/// Absent cells normalize to the empty string. The address and full-name
/// roles produce structured output (see [`canonicalize_address`] and
/// [`split_full_name`]); for them this only applies the text sanitizer.
pub fn normalize_field(role: Role, value: Option<&str>, options: &CleanOptions) -> String {
    let Some(value) = value else {
        return String::new();
    };
    match role {
        Role::City => normalize_city(value),
        Role::State => normalize_state(value),
        Role::Zip => normalize_zip(value, options.zip_policy),
        Role::Email => {
            let email = normalize_email(value);
            if options.require_email_at && !looks_like_email(&email) {
                String::new()
            } else {
                email
            }
        }
        Role::Phone => normalize_phone(value),
        Role::FirstName | Role::LastName => normalize_name(value),
        Role::Address | Role::FullName => sanitize_text(value),
    }
}
