//! Person and place name normalization.

use crate::text::{sanitize_text, title_case};

/// Sanitizes and title-cases each word. Hyphens and apostrophes are kept.
pub fn normalize_name(raw: &str) -> String {
    title_case(&sanitize_text(raw))
}

/// City names follow the same display convention as person names.
pub fn normalize_city(raw: &str) -> String {
    title_case(&sanitize_text(raw))
}

/// Splits a full name on its first whitespace run into (first, last).
///
/// A single-token name yields an empty last name. Both parts are normalized
/// with [`normalize_name`].
pub fn split_full_name(raw: &str) -> (String, String) {
    let full = normalize_name(raw);
    match full.split_once(' ') {
        Some((first, last)) => (first.to_string(), last.to_string()),
        None => (full, String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_cases_names() {
        assert_eq!(normalize_name("  JOHN   smith "), "John Smith");
        assert_eq!(normalize_name("o'brien-SMITH"), "O'Brien-Smith");
    }

    #[test]
    fn splits_on_first_whitespace() {
        assert_eq!(
            split_full_name("mary ann  van   dyke"),
            ("Mary".to_string(), "Ann Van Dyke".to_string())
        );
        assert_eq!(split_full_name("CHER"), ("Cher".to_string(), String::new()));
        assert_eq!(split_full_name("   "), (String::new(), String::new()));
    }
}
