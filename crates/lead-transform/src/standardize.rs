//! Per-field standardization rules.

use std::sync::OnceLock;

use regex::Regex;

use lead_model::{capitalize_word, comparison_key, title_case_with_exceptions};
use lead_standards::segments::segment_key;
use lead_standards::{LocalityIndex, SegmentDictionary};

/// Connective particles dropped from surnames and kept lower-case in
/// title-cased phrases.
const NAME_CONNECTIVES: &[&str] = &["de", "da", "do", "dos", "das"];
const COMPANY_EXCEPTIONS: &[&str] = &["de", "da", "do", "dos", "das", "e"];
const CITY_EXCEPTIONS: &[&str] = &["de", "da", "do", "dos", "das"];
const STATE_EXCEPTIONS: &[&str] = &["de", "do"];

/// Valid Brazilian two-digit area codes (DDD) per the ANATEL numbering plan.
const VALID_DDDS: &[&str] = &[
    "11", "12", "13", "14", "15", "16", "17", "18", "19", // São Paulo
    "21", "22", "24", "27", "28", // Rio de Janeiro / Espírito Santo
    "31", "32", "33", "34", "35", "37", "38", // Minas Gerais
    "41", "42", "43", "44", "45", "46", "47", "48", "49", // Paraná / Santa Catarina
    "51", "53", "54", "55", // Rio Grande do Sul
    "61", "62", "63", "64", "65", "66", "67", "68", "69", // Centro-Oeste / Norte
    "71", "73", "74", "75", "77", "79", // Bahia / Sergipe
    "81", "82", "83", "84", "85", "86", "87", "88", "89", // Nordeste
    "91", "92", "93", "94", "95", "96", "97", "98", "99", // Norte / Maranhão
];

/// Builds the canonical contact name from the first-name and last-name
/// source values.
///
/// Takes the first whitespace token of the first name and the last
/// non-connective token of the last name, then title-cases the result.
/// A blank first name yields an empty string.
pub fn contact_name(first: &str, last: &str) -> String {
    let Some(first_token) = first.split_whitespace().next() else {
        return String::new();
    };
    let surname_parts: Vec<&str> = last
        .split_whitespace()
        .filter(|part| !NAME_CONNECTIVES.contains(&part.to_lowercase().as_str()))
        .collect();
    let surname = surname_parts.last().copied().unwrap_or("");
    let full = format!("{first_token} {surname}");
    full.trim()
        .split_whitespace()
        .map(capitalize_word)
        .collect::<Vec<_>>()
        .join(" ")
}

fn legal_suffix_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // Ordered so longer forms win: "S.A." before "SA", "MEI" before "ME".
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\s(S/A|S\.A\.?|SA\b|LTDA\b|EIRELI\b|EPP\b|MEI\b|ME\b)")
            .expect("legal suffix pattern is valid")
    })
}

/// Strips Brazilian legal-entity suffixes and title-cases the company name.
pub fn company(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let stripped = legal_suffix_pattern().replace_all(trimmed, "");
    title_case_with_exceptions(stripped.trim(), COMPANY_EXCEPTIONS)
}

/// Which locality field is being standardized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalityKind {
    City,
    State,
    Country,
}

/// Resolves a free-text locality against the reference index.
///
/// Misses fall back to title-casing the raw value (country: capitalizing
/// it), so an empty reference index degrades gracefully instead of erasing
/// data.
pub fn locality(raw: &str, kind: LocalityKind, index: &LocalityIndex) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let key = comparison_key(trimmed);
    match kind {
        LocalityKind::City => index
            .city(&key)
            .map(str::to_string)
            .unwrap_or_else(|| title_case_with_exceptions(trimmed, CITY_EXCEPTIONS)),
        LocalityKind::State => {
            if key.contains("federal district") {
                return "Distrito Federal".to_string();
            }
            let state_key = key.strip_prefix("state of ").unwrap_or(&key).trim();
            index
                .state(state_key)
                .map(str::to_string)
                .unwrap_or_else(|| title_case_with_exceptions(trimmed, STATE_EXCEPTIONS))
        }
        LocalityKind::Country => match key.as_str() {
            "br" | "bra" | "brazil" => "Brasil".to_string(),
            _ => capitalize_word(trimmed),
        },
    }
}

/// Normalizes a website value to the `www.`-prefixed bare-host form.
pub fn website(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    let lower = trimmed.to_lowercase();
    let mut rest = trimmed;
    for scheme in ["https://", "http://"] {
        if lower.starts_with(scheme) {
            rest = &trimmed[scheme.len()..];
            break;
        }
    }
    let rest = rest.trim_end_matches('/');
    if rest.to_lowercase().starts_with("www.") {
        rest.to_string()
    } else {
        format!("www.{rest}")
    }
}

/// Validates and formats a Brazilian phone number.
///
/// Returns `(DD) NNNNN-NNNN` for mobile numbers and `(DD) NNNN-NNNN` for
/// landlines; anything outside the Brazilian numbering rules (foreign
/// prefix, toll-free, bad area code, wrong length or subscriber prefix)
/// becomes an empty string.
pub fn phone(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if trimmed.starts_with('+') && !trimmed.starts_with("+55") {
        return String::new();
    }
    let mut digits: String = trimmed.chars().filter(char::is_ascii_digit).collect();
    if let Some(rest) = digits.strip_prefix("55") {
        digits = rest.to_string();
    }
    if digits.starts_with("0800") {
        return String::new();
    }
    // Trunk prefix: "011 3765-4321" carries a leading zero before the DDD.
    if digits.len() == 11 && digits.starts_with('0') {
        digits.remove(0);
    }
    if digits.len() != 10 && digits.len() != 11 {
        return String::new();
    }
    if digits.starts_with("800") {
        return String::new();
    }
    let ddd = &digits[..2];
    if !VALID_DDDS.contains(&ddd) {
        return String::new();
    }
    let third = digits.as_bytes()[2];
    if digits.len() == 11 {
        if third != b'9' {
            return String::new();
        }
        format!("({ddd}) {}-{}", &digits[2..7], &digits[7..])
    } else {
        if !(b'2'..=b'5').contains(&third) {
            return String::new();
        }
        format!("({ddd}) {}-{}", &digits[2..6], &digits[6..])
    }
}

/// Translates an industry segment via the dictionary, falling back to
/// capitalizing every word.
pub fn segment(raw: &str, dictionary: &SegmentDictionary) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    dictionary
        .get(&segment_key(trimmed))
        .map(str::to_string)
        .unwrap_or_else(|| title_case_with_exceptions(trimmed, &[]))
}

/// Reformats an employee count as an integer string, dropping any
/// fractional part. Non-numeric values pass through unchanged so a human
/// can review them.
pub fn employee_count(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => format!("{}", value.trunc() as i64),
        _ => trimmed.to_string(),
    }
}
