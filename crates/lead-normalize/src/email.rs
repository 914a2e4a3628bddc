//! Email normalization.

use crate::text::sanitize_text;

/// Sanitizes, lower-cases and removes all whitespace. Does not validate.
pub fn normalize_email(raw: &str) -> String {
    sanitize_text(raw)
        .to_lowercase()
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect()
}

/// Minimal structural check used by the optional email filter.
pub fn looks_like_email(value: &str) -> bool {
    value.contains('@')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_and_trims() {
        assert_eq!(normalize_email(" Jane.Doe@EXAMPLE.com "), "jane.doe@example.com");
    }

    #[test]
    fn removes_interior_whitespace() {
        assert_eq!(normalize_email("jane . doe @ example.com"), "jane.doe@example.com");
    }

    #[test]
    fn malformed_input_passes_through() {
        assert_eq!(normalize_email("N/A"), "n/a");
        assert!(!looks_like_email("n/a"));
        assert!(looks_like_email("a@b"));
    }
}
