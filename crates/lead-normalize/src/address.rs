//! Street address canonicalization.
//!
//! Splits free-form address text into a main line and a unit line, then
//! rewrites the main line into one display form. The canonical direction is
//! expansion: `N` becomes `North` and `St` becomes `Street`, never the
//! reverse. Running the canonicalizer on its own line 1 output returns that
//! line unchanged with an empty line 2, and running it on line 1 followed by
//! line 2 returns the same pair.
//!
//! A unit value must contain a digit or be a single letter (`Apt 4`,
//! `Bldg C`), so `Lot Rd` and `Ste Genevieve` stay street names. Five or more
//! bare digits read as a ZIP code, not a unit.
//!
//! Digit/letter splitting (`12B` → `12 B`) only touches line 1. It can break
//! up legitimate alphanumeric house numbers; units keep their tokens intact
//! because they are extracted first.

use std::sync::LazyLock;

use lead_model::AddressLines;
use regex::Regex;

use crate::text::{lowercase_ordinals, sanitize_text, title_case};

/// Shape of a unit value: ASCII alphanumerics and inner dashes.
static UNIT_VALUE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9-]*$").expect("Invalid unit value regex")
});

/// Canonicalizes a street address into (line 1, line 2).
///
/// Line 2 holds every extracted unit designator in the order found, followed
/// by any trailing positional qualifiers. Both lines are title-cased and
/// either may be empty.
pub fn canonicalize_address(raw: &str) -> AddressLines {
    let mut designators = Vec::new();
    let mut qualifiers = Vec::new();
    let mut tokens: Vec<String> = strip_punctuation(&sanitize_text(raw))
        .split_whitespace()
        .map(str::to_string)
        .collect();

    // Digit splitting can expose new designators (`12Apt 4`), so the passes
    // repeat until the tokens stop changing.
    loop {
        let before = tokens.clone();
        tokens = extract_designators(&tokens, &mut designators);
        tokens = split_digit_letters(&tokens);
        tokens = extract_qualifiers(tokens, &mut qualifiers);
        absorb_dangling_designator(&mut tokens, &mut designators);
        if tokens == before {
            break;
        }
    }

    let line1 = expand_abbreviations(&tokens);
    designators.extend(qualifiers);
    let line2 = designators.join(" ");

    AddressLines {
        line1: display_case(&line1),
        line2: display_case(&line2),
    }
}

fn display_case(value: &str) -> String {
    lowercase_ordinals(&title_case(value))
}

/// Removes keyword and hash units from `tokens`, pushing their canonical
/// rendering onto `units` in position order.
fn extract_designators(tokens: &[String], units: &mut Vec<String>) -> Vec<String> {
    let mut kept = Vec::with_capacity(tokens.len());
    let mut idx = 0;
    while idx < tokens.len() {
        let token = &tokens[idx];
        if let Some(label) = designator_label(token) {
            // At most one `#` between the keyword and its value (`Unit #B`).
            let value_idx = if tokens.get(idx + 1).is_some_and(|next| next == "#") {
                idx + 2
            } else {
                idx + 1
            };
            if let Some(value) = tokens.get(value_idx).filter(|value| is_unit_value(value)) {
                units.push(format!("{label} {value}"));
                idx = value_idx + 1;
                continue;
            }
        } else if token == "#" {
            if let Some(value) = tokens.get(idx + 1).filter(|value| is_unit_value(value)) {
                units.push(format!("#{value}"));
                idx += 2;
                continue;
            }
        }
        kept.push(token.clone());
        idx += 1;
    }
    kept
}

fn designator_label(token: &str) -> Option<&'static str> {
    Some(match token.to_ascii_lowercase().as_str() {
        "apartment" | "apt" => "Apt",
        "unit" => "Unit",
        "suite" | "ste" => "Suite",
        "lot" => "Lot",
        "floor" | "fl" => "Floor",
        "building" | "bldg" => "Building",
        _ => return None,
    })
}

/// Accepts `4`, `12B`, `4-B` and single letters other than directionals.
fn is_unit_value(token: &str) -> bool {
    if !UNIT_VALUE_REGEX.is_match(token) {
        return false;
    }
    if token.chars().any(|ch| ch.is_ascii_digit()) {
        let zip_like = token.len() >= 5 && token.chars().all(|ch| ch.is_ascii_digit());
        return !zip_like;
    }
    token.len() == 1 && expand_directional(&token.to_ascii_lowercase()).is_none()
}

/// A designator keyword left at the end of line 1 claims a leading hash unit,
/// the same reading `Lot #5` gets when the two lines are joined.
fn absorb_dangling_designator(tokens: &mut Vec<String>, units: &mut [String]) {
    let (Some(first), Some(label)) = (
        units.first_mut(),
        tokens.last().and_then(|last| designator_label(last)),
    ) else {
        return;
    };
    let Some(value) = first.strip_prefix('#').map(str::to_string) else {
        return;
    };
    *first = format!("{label} {value}");
    tokens.pop();
}

/// Peels trailing positional qualifiers (`Rear`, `Lower Front`) off the line.
///
/// Later passes peel qualifiers that sat before the earlier ones, so they go
/// in front.
fn extract_qualifiers(mut tokens: Vec<String>, qualifiers: &mut Vec<String>) -> Vec<String> {
    let mut peeled = Vec::new();
    while tokens.last().is_some_and(|last| is_positional_qualifier(last)) {
        if let Some(last) = tokens.pop() {
            peeled.push(last);
        }
    }
    if !peeled.is_empty() {
        peeled.reverse();
        peeled.append(qualifiers);
        *qualifiers = peeled;
    }
    tokens
}

fn is_positional_qualifier(token: &str) -> bool {
    matches!(token.to_ascii_lowercase().as_str(), "front" | "rear" | "upper" | "lower")
}

/// Drops apostrophes, keeps `-` and `/`, sets `#` apart as its own token and
/// turns any other punctuation into a space.
///
/// A period vanishes (`St.`, `U.S.`) unless it sits between a letter and a
/// digit (`Ste.200`), where it separates the two.
fn strip_punctuation(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len() + 4);
    for (idx, ch) in chars.iter().copied().enumerate() {
        match ch {
            '#' => out.push_str(" # "),
            '\'' | '\u{2019}' => {}
            '.' => {
                let after_letter = idx
                    .checked_sub(1)
                    .and_then(|prev| chars.get(prev))
                    .is_some_and(|prev| prev.is_alphabetic());
                let before_digit = chars.get(idx + 1).is_some_and(char::is_ascii_digit);
                if after_letter && before_digit {
                    out.push(' ');
                }
            }
            ch if ch.is_alphanumeric() || ch.is_whitespace() || matches!(ch, '-' | '/') => {
                out.push(ch);
            }
            _ => out.push(' '),
        }
    }
    out
}

/// Inserts a break between a digit and a directly following letter, leaving
/// ordinal suffixes (`1st`, `42nd`) attached.
fn split_digit_letters(tokens: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(tokens.len());
    for token in tokens {
        let chars: Vec<char> = token.chars().collect();
        let mut piece = String::with_capacity(token.len());
        for (idx, ch) in chars.iter().enumerate() {
            piece.push(*ch);
            if !ch.is_ascii_digit() {
                continue;
            }
            let rest = &chars[idx + 1..];
            if rest.first().is_some_and(|next| next.is_alphabetic()) && !is_ordinal_suffix(rest) {
                out.push(std::mem::take(&mut piece));
            }
        }
        out.push(piece);
    }
    out
}

fn is_ordinal_suffix(rest: &[char]) -> bool {
    let word: String = rest.iter().take_while(|ch| ch.is_alphanumeric()).collect();
    matches!(word.to_ascii_lowercase().as_str(), "st" | "nd" | "rd" | "th")
}

fn expand_abbreviations(tokens: &[String]) -> String {
    let street_start = street_name_start(tokens);
    tokens
        .iter()
        .enumerate()
        .map(|(idx, token)| {
            let lower = token.to_ascii_lowercase();
            if let Some(full) = expand_directional(&lower) {
                return full.to_string();
            }
            // `St Charles` is a saint only where the street name begins.
            if lower == "st"
                && idx == street_start
                && tokens.get(idx + 1).is_some_and(|next| is_place_word(next))
            {
                return token.clone();
            }
            if let Some(full) = expand_street_suffix(&lower) {
                return full.to_string();
            }
            token.clone()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Index of the first street-name token: past a leading house number and any
/// directionals after it.
fn street_name_start(tokens: &[String]) -> usize {
    let mut idx = usize::from(
        tokens
            .first()
            .is_some_and(|first| first.chars().any(|ch| ch.is_ascii_digit())),
    );
    while tokens.get(idx).is_some_and(|token| is_directional(token)) {
        idx += 1;
    }
    idx
}

fn is_directional(token: &str) -> bool {
    let lower = token.to_ascii_lowercase();
    expand_directional(&lower).is_some()
        || matches!(
            lower.as_str(),
            "north" | "south" | "east" | "west" | "northeast" | "northwest" | "southeast" | "southwest"
        )
}

fn is_place_word(token: &str) -> bool {
    token.chars().all(char::is_alphabetic)
        && !is_directional(token)
        && expand_street_suffix(&token.to_ascii_lowercase()).is_none()
}

fn expand_directional(lower: &str) -> Option<&'static str> {
    Some(match lower {
        "n" => "North",
        "s" => "South",
        "e" => "East",
        "w" => "West",
        "ne" => "Northeast",
        "nw" => "Northwest",
        "se" => "Southeast",
        "sw" => "Southwest",
        _ => return None,
    })
}

fn expand_street_suffix(lower: &str) -> Option<&'static str> {
    Some(match lower {
        "st" => "Street",
        "ave" => "Avenue",
        "rd" => "Road",
        "blvd" => "Boulevard",
        "dr" => "Drive",
        "ln" => "Lane",
        "ct" => "Court",
        "pl" => "Place",
        "ter" => "Terrace",
        "cir" => "Circle",
        "pkwy" => "Parkway",
        "hwy" => "Highway",
        _ => return None,
    })
}
