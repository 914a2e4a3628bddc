//! State normalization.

use crate::text::sanitize_text;

/// Sanitizes and upper-cases the value as given.
pub fn normalize_state(raw: &str) -> String {
    sanitize_text(raw).to_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uppercases_without_lookup() {
        assert_eq!(normalize_state(" tx "), "TX");
        assert_eq!(normalize_state("new  york"), "NEW YORK");
    }
}
