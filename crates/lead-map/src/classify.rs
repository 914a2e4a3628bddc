//! Header-to-role classification.

use lead_model::{Role, RoleMap};

use crate::keywords::KeywordTable;
use crate::utils::normalize_text;

/// Returns the first header, in table order, whose lowercase form contains
/// any of `keywords`.
///
/// The separator-normalized form of the header is tried as well, so
/// `Owner_First_Name` matches `first name`.
pub fn detect_column<'a, S: AsRef<str>>(headers: &'a [String], keywords: &[S]) -> Option<&'a str> {
    headers
        .iter()
        .find(|header| {
            let lower = header.to_lowercase();
            let normalized = normalize_text(header);
            keywords.iter().any(|keyword| {
                let keyword = keyword.as_ref().to_lowercase();
                lower.contains(&keyword) || normalized.contains(&keyword)
            })
        })
        .map(String::as_str)
}

/// Classifies headers with the built-in keyword table.
pub fn classify(headers: &[String]) -> RoleMap {
    classify_with(headers, &KeywordTable::default())
}

/// Classifies headers against `table`.
///
/// Each role independently picks its first matching header, so one header can
/// serve several roles. The full-name role is only consulted when neither
/// first nor last name resolved; resolving it marks the map as requiring a
/// name split.
pub fn classify_with(headers: &[String], table: &KeywordTable) -> RoleMap {
    let mut assignments = Vec::new();
    for role in Role::ALL {
        if role == Role::FullName {
            continue;
        }
        if let Some(header) = detect_column(headers, table.keywords(role)) {
            assignments.push((role, header.to_string()));
        }
    }

    let has_split_names = assignments
        .iter()
        .any(|(role, _)| matches!(role, Role::FirstName | Role::LastName));
    let mut name_split_required = false;
    if !has_split_names {
        if let Some(header) = detect_column(headers, table.keywords(Role::FullName)) {
            assignments.push((Role::FullName, header.to_string()));
            name_split_required = true;
        }
    }

    RoleMap::new(assignments, name_split_required)
}
