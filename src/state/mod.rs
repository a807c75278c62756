pub mod memory;

pub use memory::InMemoryStore;

use crate::error::Result;
use crate::models::{FaqCategory, FaqEntry, School};
use async_trait::async_trait;
use uuid::Uuid;

/// Trait for record-store access.
///
/// The engine is written against this seam; the in-memory implementation
/// backs tests and MVP deployments, a relational backend lives outside the
/// crate. Implementations report infrastructure failures as
/// [`crate::AppError::Storage`].
#[async_trait]
pub trait FaqStore: Send + Sync {
    /// Save (insert or replace) a school record
    async fn save_school(&self, school: &School) -> Result<()>;

    /// Look up a school by its unique domain
    async fn find_school_by_domain(&self, domain: &str) -> Result<Option<School>>;

    /// Look up a school by id (existence checks before FAQ creation)
    async fn find_school_by_id(&self, id: i64) -> Result<Option<School>>;

    /// Insert a FAQ entry
    async fn insert_faq(&self, entry: &FaqEntry) -> Result<()>;

    /// Get a FAQ entry by id
    async fn get_faq(&self, id: &Uuid) -> Result<Option<FaqEntry>>;

    /// Replace an existing FAQ entry
    async fn update_faq(&self, entry: &FaqEntry) -> Result<()>;

    /// Delete a FAQ entry; returns whether a record was removed
    async fn delete_faq(&self, id: &Uuid) -> Result<bool>;

    /// List FAQ entries matching a filter, newest first, optionally limited
    async fn list_faqs(&self, filter: &FaqFilter, limit: Option<usize>) -> Result<Vec<FaqEntry>>;
}

/// Filter for querying FAQ entries.
///
/// Conjunctive over its parts; `terms` is a disjunction applied to the
/// question, answer and keyword texts.
#[derive(Debug, Clone, Default)]
pub struct FaqFilter {
    /// Restrict to one school
    pub school_id: Option<i64>,

    /// Restrict to active entries
    pub active_only: bool,

    /// Restrict to one category
    pub category: Option<FaqCategory>,

    /// Lower-cased search terms; a record matches when ANY term occurs as a
    /// case-insensitive substring of question, answer, or joined keywords.
    /// Empty means no term predicate.
    pub terms: Vec<String>,
}

impl FaqFilter {
    /// Whether an entry satisfies this filter
    pub fn matches(&self, entry: &FaqEntry) -> bool {
        if let Some(school_id) = self.school_id {
            if entry.school_id != school_id {
                return false;
            }
        }

        if self.active_only && !entry.is_active {
            return false;
        }

        if let Some(category) = self.category {
            if entry.category != category {
                return false;
            }
        }

        if self.terms.is_empty() {
            return true;
        }

        let question = entry.question.to_lowercase();
        let answer = entry.answer.to_lowercase();
        let keywords = entry.keywords.join(" ").to_lowercase();

        self.terms
            .iter()
            .any(|term| question.contains(term) || answer.contains(term) || keywords.contains(term))
    }
}
