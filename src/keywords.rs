//! Keyword derivation for FAQ write paths.
//!
//! Keywords are derived once when an entry is created or its text changes;
//! search-time matching treats them as one more text field.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Maximal runs of word characters, at least three long. Shorter runs and
/// punctuation are separators and are discarded.
static WORD_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w{3,}").expect("valid word-run regex"));

/// Derive normalized search keywords from a question/answer pair.
///
/// The two texts are joined, lower-cased, scanned for word runs of length
/// >= 3, and deduplicated preserving first-seen order. No stop-word removal
/// and no stemming. Pure and total: empty input yields an empty vec.
pub fn derive_keywords(question: &str, answer: &str) -> Vec<String> {
    let text = format!("{} {}", question, answer).to_lowercase();

    let mut seen = HashSet::new();
    WORD_RUN
        .find_iter(&text)
        .map(|m| m.as_str().to_string())
        .filter(|word| seen.insert(word.clone()))
        .collect()
}
