use crate::error::{AppError, Result};
use crate::keywords::derive_keywords;
use crate::models::{FaqCategory, FaqEntry};
use crate::state::FaqStore;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

/// Fields for creating a FAQ entry
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateFaqRequest {
    pub school_id: i64,
    pub category: FaqCategory,
    #[validate(length(min = 1))]
    pub question: String,
    #[validate(length(min = 1))]
    pub answer: String,
    /// Explicit keywords win over derivation; absent or empty means derive
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    pub created_by: Uuid,
}

/// Partial fields for updating a FAQ entry; `school_id` is immutable and
/// deliberately not part of the shape
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFaqRequest {
    pub category: Option<FaqCategory>,
    #[validate(length(min = 1))]
    pub question: Option<String>,
    #[validate(length(min = 1))]
    pub answer: Option<String>,
    /// Explicit keywords win over derivation, including an explicit empty
    /// list; absent means re-derive when question or answer changed
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    pub is_active: Option<bool>,
}

/// Write path for FAQ entries: create, read, update, delete
#[derive(Clone)]
pub struct FaqService {
    store: Arc<dyn FaqStore>,
}

impl FaqService {
    pub fn new(store: Arc<dyn FaqStore>) -> Self {
        Self { store }
    }

    /// Create a FAQ entry.
    ///
    /// The owning school must exist. When no keywords (or an empty list)
    /// are supplied, they are derived from the question and answer, so the
    /// stored entry never has an empty keyword set.
    pub async fn create_faq(&self, request: CreateFaqRequest) -> Result<FaqEntry> {
        request.validate()?;

        // Existence check and insert are not atomic; a school deleted in
        // between is the administrative subsystem's cascade to clean up.
        if self.store.find_school_by_id(request.school_id).await?.is_none() {
            return Err(AppError::NotFound(format!(
                "School {} not found",
                request.school_id
            )));
        }

        let keywords = match request.keywords {
            Some(keywords) if !keywords.is_empty() => keywords,
            _ => derive_keywords(&request.question, &request.answer),
        };

        let entry = FaqEntry::new(
            request.school_id,
            request.category,
            request.question,
            request.answer,
            keywords,
            request.created_by,
        );
        self.store.insert_faq(&entry).await?;

        tracing::info!(
            faq_id = %entry.id,
            school_id = entry.school_id,
            category = %entry.category,
            "FAQ created"
        );
        Ok(entry)
    }

    /// Get a FAQ entry by id
    pub async fn get_faq(&self, id: &Uuid) -> Result<FaqEntry> {
        self.store
            .get_faq(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("FAQ {} not found", id)))
    }

    /// Apply a partial update to a FAQ entry.
    ///
    /// Keywords are re-derived only when the question or answer changed and
    /// no keywords were supplied; supplied keywords (even an empty list)
    /// always win.
    pub async fn update_faq(&self, id: &Uuid, request: UpdateFaqRequest) -> Result<FaqEntry> {
        request.validate()?;

        let mut entry = self.get_faq(id).await?;

        let mut text_changed = false;
        if let Some(question) = request.question {
            if question != entry.question {
                text_changed = true;
            }
            entry.question = question;
        }
        if let Some(answer) = request.answer {
            if answer != entry.answer {
                text_changed = true;
            }
            entry.answer = answer;
        }
        if let Some(category) = request.category {
            entry.category = category;
        }
        if let Some(is_active) = request.is_active {
            entry.is_active = is_active;
        }

        match request.keywords {
            Some(keywords) => entry.keywords = keywords,
            None if text_changed => {
                entry.keywords = derive_keywords(&entry.question, &entry.answer);
            }
            None => {}
        }

        entry.touch();
        self.store.update_faq(&entry).await?;

        tracing::info!(faq_id = %entry.id, "FAQ updated");
        Ok(entry)
    }

    /// Delete a FAQ entry by id
    pub async fn delete_faq(&self, id: &Uuid) -> Result<()> {
        if self.store.delete_faq(id).await? {
            tracing::info!(faq_id = %id, "FAQ deleted");
            Ok(())
        } else {
            Err(AppError::NotFound(format!("FAQ {} not found", id)))
        }
    }
}
