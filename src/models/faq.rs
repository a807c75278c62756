use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use uuid::Uuid;
use validator::Validate;

/// Topic classification for a FAQ entry.
///
/// Closed set; the wire names are the lower-case snake_case strings used by
/// both serde and strum. Not externally configurable.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FaqCategory {
    Admissions,
    AcademicPrograms,
    CampusLife,
    ContactSupport,
    GeneralInfo,
}

/// One categorized question/answer record belonging to a school
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FaqEntry {
    /// Unique identifier
    pub id: Uuid,

    /// Owning school; required and immutable
    pub school_id: i64,

    /// Topic classification
    pub category: FaqCategory,

    /// The question text
    #[validate(length(min = 1))]
    pub question: String,

    /// The answer text
    #[validate(length(min = 1))]
    pub answer: String,

    /// Normalized search keywords; insertion order is preserved in storage,
    /// matching does not depend on it
    pub keywords: Vec<String>,

    /// Inactive entries are invisible to search
    pub is_active: bool,

    /// Administrative user who created the entry; opaque to the engine
    pub created_by: Uuid,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl FaqEntry {
    /// Create a new active FAQ entry
    pub fn new(
        school_id: i64,
        category: FaqCategory,
        question: String,
        answer: String,
        keywords: Vec<String>,
        created_by: Uuid,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            school_id,
            category,
            question,
            answer,
            keywords,
            is_active: true,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh the update timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// Result of one chatbot search; ephemeral, never persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    /// Matching entries, newest first, capped at the search limit
    pub faqs: Vec<FaqEntry>,

    /// Distinct categories with active content for the school, in
    /// first-encounter order; computed tenant-wide, independent of the query
    pub suggested_categories: Vec<FaqCategory>,

    /// Count of the returned (already capped) sequence
    pub total_results: usize,
}

impl SearchResult {
    /// An empty result, returned for unknown or inactive domains
    pub fn empty() -> Self {
        Self {
            faqs: Vec::new(),
            suggested_categories: Vec::new(),
            total_results: 0,
        }
    }
}
