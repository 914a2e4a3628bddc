//! Phone number normalization.

/// Keeps only digits and accepts exactly ten of them.
///
/// Any other length, including numbers carrying a country code, is treated as
/// invalid and yields an empty string.
pub fn normalize_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() == 10 { digits } else { String::new() }
}
