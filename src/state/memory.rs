use crate::error::{AppError, Result};
use crate::models::{FaqEntry, School};
use crate::state::{FaqFilter, FaqStore};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// In-memory FAQ store (for MVP and testing)
#[derive(Clone)]
pub struct InMemoryStore {
    schools: Arc<DashMap<i64, School>>,
    domain_index: Arc<DashMap<String, i64>>,
    faqs: Arc<DashMap<Uuid, FaqEntry>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            schools: Arc::new(DashMap::new()),
            domain_index: Arc::new(DashMap::new()),
            faqs: Arc::new(DashMap::new()),
        }
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FaqStore for InMemoryStore {
    async fn save_school(&self, school: &School) -> Result<()> {
        // Keep the domain index consistent when a school changes domain
        if let Some(existing) = self.schools.get(&school.id) {
            if existing.domain != school.domain {
                self.domain_index.remove(&existing.domain);
            }
        }

        self.domain_index.insert(school.domain.clone(), school.id);
        self.schools.insert(school.id, school.clone());

        tracing::debug!(school_id = school.id, domain = %school.domain, "School saved");
        Ok(())
    }

    async fn find_school_by_domain(&self, domain: &str) -> Result<Option<School>> {
        let id = match self.domain_index.get(domain) {
            Some(entry) => *entry,
            None => return Ok(None),
        };
        Ok(self.schools.get(&id).map(|entry| entry.clone()))
    }

    async fn find_school_by_id(&self, id: i64) -> Result<Option<School>> {
        Ok(self.schools.get(&id).map(|entry| entry.clone()))
    }

    async fn insert_faq(&self, entry: &FaqEntry) -> Result<()> {
        self.faqs.insert(entry.id, entry.clone());
        tracing::debug!(faq_id = %entry.id, school_id = entry.school_id, "FAQ saved");
        Ok(())
    }

    async fn get_faq(&self, id: &Uuid) -> Result<Option<FaqEntry>> {
        Ok(self.faqs.get(id).map(|entry| entry.clone()))
    }

    async fn update_faq(&self, entry: &FaqEntry) -> Result<()> {
        if self.faqs.contains_key(&entry.id) {
            self.faqs.insert(entry.id, entry.clone());
            tracing::debug!(faq_id = %entry.id, "FAQ updated");
            Ok(())
        } else {
            Err(AppError::NotFound(format!("FAQ {} not found", entry.id)))
        }
    }

    async fn delete_faq(&self, id: &Uuid) -> Result<bool> {
        let removed = self.faqs.remove(id).is_some();
        if removed {
            tracing::debug!(faq_id = %id, "FAQ deleted");
        }
        Ok(removed)
    }

    async fn list_faqs(&self, filter: &FaqFilter, limit: Option<usize>) -> Result<Vec<FaqEntry>> {
        let mut entries: Vec<FaqEntry> = self
            .faqs
            .iter()
            .map(|entry| entry.value().clone())
            .filter(|entry| filter.matches(entry))
            .collect();

        // Newest first; ties broken by id so repeated scans are stable
        entries.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        if let Some(limit) = limit {
            entries.truncate(limit);
        }

        Ok(entries)
    }
}
