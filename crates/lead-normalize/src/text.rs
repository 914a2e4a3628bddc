//! Text sanitizing and casing helpers shared by every normalizer.

use std::sync::LazyLock;

use regex::Regex;

/// Ordinal suffix directly after digits, in any case (`1ST`, `22Nd`).
static ORDINAL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(\d+)(st|nd|rd|th)\b").expect("Invalid ordinal regex")
});

/// Base pass applied to every field.
///
/// Replaces non-breaking spaces, tabs and line breaks with plain spaces,
/// strips the remaining ASCII control characters, collapses whitespace runs
/// to a single space and trims.
pub fn sanitize_text(raw: &str) -> String {
    let cleaned: String = raw
        .chars()
        .filter_map(|ch| match ch {
            '\u{a0}' => Some(' '),
            ch if ch.is_ascii_whitespace() => Some(' '),
            ch if u32::from(ch) < 0x20 => None,
            ch => Some(ch),
        })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Naive title case: a letter is upper-cased when it follows a non-letter and
/// lower-cased otherwise, so `o'brien-smith` becomes `O'Brien-Smith` and
/// `12b` becomes `12B`.
///
/// Letters whose case mapping expands to several characters are kept as is.
pub fn title_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut after_letter = false;
    for ch in value.chars() {
        if ch.is_alphabetic() {
            if after_letter {
                push_single_mapping(&mut out, ch, ch.to_lowercase());
            } else {
                push_single_mapping(&mut out, ch, ch.to_uppercase());
            }
            after_letter = true;
        } else {
            out.push(ch);
            after_letter = false;
        }
    }
    out
}

fn push_single_mapping(out: &mut String, original: char, mut mapped: impl Iterator<Item = char>) {
    match (mapped.next(), mapped.next()) {
        (Some(single), None) => out.push(single),
        _ => out.push(original),
    }
}

/// Lower-cases ordinal suffixes after digits (`1St` → `1st`).
pub fn lowercase_ordinals(value: &str) -> String {
    ORDINAL_REGEX
        .replace_all(value, |caps: &regex::Captures<'_>| {
            format!("{}{}", &caps[1], caps[2].to_ascii_lowercase())
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_collapses_and_strips() {
        assert_eq!(sanitize_text("  123\u{a0}\u{a0}Main \t St\r\n"), "123 Main St");
        assert_eq!(sanitize_text("a\u{0}b"), "ab");
        assert_eq!(sanitize_text("123 Main St\nApt 4"), "123 Main St Apt 4");
        assert_eq!(sanitize_text("Jane\tDoe\r\nSmith"), "Jane Doe Smith");
        assert_eq!(sanitize_text("a\u{c}b"), "a b");
        assert_eq!(sanitize_text("   "), "");
    }

    #[test]
    fn sanitize_is_idempotent() {
        let once = sanitize_text(" \u{a0} Jane \u{7} Doe ");
        assert_eq!(sanitize_text(&once), once);
    }

    #[test]
    fn title_case_follows_letter_boundaries() {
        assert_eq!(title_case("MARY-JANE o'neil"), "Mary-Jane O'Neil");
        assert_eq!(title_case("12b main"), "12B Main");
        assert_eq!(title_case("1st"), "1St");
    }

    #[test]
    fn ordinals_are_lowercased_after_digits() {
        assert_eq!(lowercase_ordinals("1St 22ND 3Rd 4Th Street"), "1st 22nd 3rd 4th Street");
        assert_eq!(lowercase_ordinals("Rd St"), "Rd St");
    }
}
