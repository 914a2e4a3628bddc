//! Zip code normalization.

use lead_model::ZipPolicy;

use crate::text::sanitize_text;

/// Normalizes a zip code under the given policy.
///
/// With [`ZipPolicy::FirstDigitRun`] the result is the first run of five
/// consecutive digits, or empty. [`ZipPolicy::PadNumeric`] additionally
/// left-pads all-numeric values shorter than five digits.
pub fn normalize_zip(raw: &str, policy: ZipPolicy) -> String {
    let value = sanitize_text(raw);
    if policy == ZipPolicy::PadNumeric
        && !value.is_empty()
        && value.len() < 5
        && value.chars().all(|ch| ch.is_ascii_digit())
    {
        return format!("{value:0>5}");
    }
    first_five_digit_run(&value).unwrap_or_default()
}

fn first_five_digit_run(value: &str) -> Option<String> {
    let chars: Vec<char> = value.chars().collect();
    chars
        .windows(5)
        .find(|window| window.iter().all(char::is_ascii_digit))
        .map(|window| window.iter().collect())
}
