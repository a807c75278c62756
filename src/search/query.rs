//! Query tokenization and search planning.

use crate::models::FaqCategory;
use crate::state::FaqFilter;

/// Tokens shorter than this carry no signal and are dropped
const MIN_TOKEN_LEN: usize = 3;

/// Split a free-text chatbot query into lower-cased search terms.
///
/// Splits on whitespace runs and drops tokens shorter than three
/// characters. An empty result is valid: the search then falls back to
/// filter-only matching (school + active + optional category).
pub fn tokenize(query: &str) -> Vec<String> {
    query
        .to_lowercase()
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_TOKEN_LEN)
        .map(|token| token.to_string())
        .collect()
}

/// Build the tenant-scoped match predicate for one search.
///
/// Always scopes to the school and to active entries; the category and the
/// term disjunction are added when present. School-level checks (domain
/// lookup, school `is_active`) happen before this, in the service.
pub fn build_filter(school_id: i64, terms: Vec<String>, category: Option<FaqCategory>) -> FaqFilter {
    FaqFilter {
        school_id: Some(school_id),
        active_only: true,
        category,
        terms,
    }
}
