//! Text normalization primitives.
//!
//! Every lookup in the pipeline (header aliases, locality names, segment
//! labels) goes through [`comparison_key`] so that "São Paulo", "SAO PAULO"
//! and "sao paulo " all compare equal.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Builds a diacritic-insensitive, case-insensitive comparison key.
///
/// Lower-cases, trims, decomposes to NFD and drops the combining marks, so
/// only base letters remain. Pure and total: blank input yields `""`.
pub fn comparison_key(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .nfd()
        .filter(|ch| !is_combining_mark(*ch))
        .collect()
}

/// Upper-cases the first character and lower-cases the rest.
pub fn capitalize_word(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Title-cases a phrase while keeping connective words lower-case.
///
/// The first word is always capitalized. Later words whose lower-cased form
/// appears in `exceptions` stay lower-case; everything else is capitalized.
/// Words are rejoined with single spaces, so runs of whitespace collapse.
pub fn title_case_with_exceptions(raw: &str, exceptions: &[&str]) -> String {
    let mut words = raw.split_whitespace();
    let Some(first) = words.next() else {
        return String::new();
    };
    let mut parts = vec![capitalize_word(first)];
    for word in words {
        let lowered = word.to_lowercase();
        if exceptions.contains(&lowered.as_str()) {
            parts.push(lowered);
        } else {
            parts.push(capitalize_word(word));
        }
    }
    parts.join(" ")
}
