use crate::error::Result;
use crate::models::{FaqCategory, School, SearchResult};
use crate::search::query::{build_filter, tokenize};
use crate::state::{FaqFilter, FaqStore};
use std::sync::Arc;

/// Hard cap on returned entries per search; not configurable
pub const MAX_RESULTS: usize = 20;

/// Chatbot-facing search over a school's FAQ set
#[derive(Clone)]
pub struct SearchService {
    store: Arc<dyn FaqStore>,
}

impl SearchService {
    pub fn new(store: Arc<dyn FaqStore>) -> Self {
        Self { store }
    }

    /// Execute one chatbot search scoped to a school domain.
    ///
    /// Unknown or inactive domains yield an empty [`SearchResult`], not an
    /// error. Matching entries come back newest first, capped at
    /// [`MAX_RESULTS`]; `suggested_categories` is always the school-wide
    /// set of categories with active content, independent of the query and
    /// category filter. `total_results` counts the capped sequence.
    pub async fn search(
        &self,
        domain: &str,
        query: &str,
        category: Option<FaqCategory>,
    ) -> Result<SearchResult> {
        let school = match self.active_school(domain).await? {
            Some(school) => school,
            None => {
                tracing::debug!(domain, "Search against unknown or inactive domain");
                return Ok(SearchResult::empty());
            }
        };

        let terms = tokenize(query);
        let filter = build_filter(school.id, terms, category);
        let faqs = self.store.list_faqs(&filter, Some(MAX_RESULTS)).await?;

        let suggested_categories = self.categories_for(school.id).await?;
        let total_results = faqs.len();

        tracing::info!(
            domain,
            school_id = school.id,
            results = total_results,
            "FAQ search completed"
        );

        Ok(SearchResult {
            faqs,
            suggested_categories,
            total_results,
        })
    }

    /// Distinct categories with active content for a school domain.
    ///
    /// Empty when the domain is unknown, the school is inactive, or no
    /// active entry exists.
    pub async fn available_categories(&self, domain: &str) -> Result<Vec<FaqCategory>> {
        match self.active_school(domain).await? {
            Some(school) => self.categories_for(school.id).await,
            None => Ok(Vec::new()),
        }
    }

    async fn active_school(&self, domain: &str) -> Result<Option<School>> {
        Ok(self
            .store
            .find_school_by_domain(domain)
            .await?
            .filter(|school| school.is_active))
    }

    async fn categories_for(&self, school_id: i64) -> Result<Vec<FaqCategory>> {
        let filter = FaqFilter {
            school_id: Some(school_id),
            active_only: true,
            ..Default::default()
        };
        let entries = self.store.list_faqs(&filter, None).await?;

        let mut categories = Vec::new();
        for entry in &entries {
            if !categories.contains(&entry.category) {
                categories.push(entry.category);
            }
        }
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FaqCategory, FaqEntry};
    use crate::state::InMemoryStore;
    use uuid::Uuid;

    async fn seeded_store() -> Arc<InMemoryStore> {
        let store = Arc::new(InMemoryStore::new());
        store
            .save_school(&School::new(1, "Acme University".to_string(), "acme.edu".to_string()))
            .await
            .unwrap();
        store
    }

    fn faq(school_id: i64, category: FaqCategory, question: &str, answer: &str) -> FaqEntry {
        FaqEntry::new(
            school_id,
            category,
            question.to_string(),
            answer.to_string(),
            crate::keywords::derive_keywords(question, answer),
            Uuid::new_v4(),
        )
    }

    #[tokio::test]
    async fn test_search_matches_on_terms() {
        let store = seeded_store().await;
        let entry = faq(
            1,
            FaqCategory::Admissions,
            "What are the admission requirements?",
            "A diploma and test scores.",
        );
        store.insert_faq(&entry).await.unwrap();
        store
            .insert_faq(&faq(
                1,
                FaqCategory::CampusLife,
                "Are there dorms?",
                "Yes, three residence halls.",
            ))
            .await
            .unwrap();

        let service = SearchService::new(store);
        let result = service
            .search("acme.edu", "admission requirements", None)
            .await
            .unwrap();

        assert_eq!(result.total_results, 1);
        assert_eq!(result.faqs[0].id, entry.id);
        assert!(result.suggested_categories.contains(&FaqCategory::Admissions));
        // suggestions are tenant-wide, not restricted to the match
        assert!(result.suggested_categories.contains(&FaqCategory::CampusLife));
    }

    #[tokio::test]
    async fn test_empty_query_falls_back_to_filter_only() {
        let store = seeded_store().await;
        store
            .insert_faq(&faq(1, FaqCategory::GeneralInfo, "Where is campus?", "Downtown."))
            .await
            .unwrap();

        let service = SearchService::new(store);
        let result = service.search("acme.edu", "to be or", None).await.unwrap();

        assert_eq!(result.total_results, 1);
    }

    #[tokio::test]
    async fn test_category_filter_narrows_but_not_suggestions() {
        let store = seeded_store().await;
        store
            .insert_faq(&faq(1, FaqCategory::Admissions, "How do I apply?", "Online form."))
            .await
            .unwrap();
        store
            .insert_faq(&faq(1, FaqCategory::CampusLife, "Any clubs?", "Over fifty."))
            .await
            .unwrap();

        let service = SearchService::new(store);
        let result = service
            .search("acme.edu", "", Some(FaqCategory::Admissions))
            .await
            .unwrap();

        assert_eq!(result.total_results, 1);
        assert_eq!(result.faqs[0].category, FaqCategory::Admissions);
        assert_eq!(result.suggested_categories.len(), 2);
    }

    #[tokio::test]
    async fn test_unknown_domain_yields_empty_result() {
        let store = seeded_store().await;
        let service = SearchService::new(store);

        let result = service.search("unknown.edu", "anything", None).await.unwrap();
        assert!(result.faqs.is_empty());
        assert!(result.suggested_categories.is_empty());
        assert_eq!(result.total_results, 0);
    }

    #[tokio::test]
    async fn test_inactive_school_is_invisible() {
        let store = Arc::new(InMemoryStore::new());
        let mut school = School::new(2, "Closed College".to_string(), "closed.edu".to_string());
        school.is_active = false;
        store.save_school(&school).await.unwrap();
        store
            .insert_faq(&faq(2, FaqCategory::GeneralInfo, "Still open?", "No longer."))
            .await
            .unwrap();

        let service = SearchService::new(store);
        let result = service.search("closed.edu", "open", None).await.unwrap();
        assert_eq!(result.total_results, 0);
        assert!(service.available_categories("closed.edu").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_results_are_capped_at_limit() {
        let store = seeded_store().await;
        for i in 0..25 {
            store
                .insert_faq(&faq(
                    1,
                    FaqCategory::GeneralInfo,
                    &format!("General question number {i}?"),
                    "General answer.",
                ))
                .await
                .unwrap();
        }

        let service = SearchService::new(store);
        let result = service.search("acme.edu", "general", None).await.unwrap();

        assert_eq!(result.faqs.len(), MAX_RESULTS);
        assert_eq!(result.total_results, MAX_RESULTS);
    }

    #[tokio::test]
    async fn test_available_categories_distinct_and_active_only() {
        let store = seeded_store().await;
        store
            .insert_faq(&faq(1, FaqCategory::Admissions, "How do I apply?", "Online form."))
            .await
            .unwrap();
        store
            .insert_faq(&faq(1, FaqCategory::Admissions, "Any deadline?", "March first."))
            .await
            .unwrap();
        let mut hidden = faq(1, FaqCategory::ContactSupport, "Phone number?", "Call us.");
        hidden.is_active = false;
        store.insert_faq(&hidden).await.unwrap();

        let service = SearchService::new(store);
        let categories = service.available_categories("acme.edu").await.unwrap();

        assert_eq!(categories, vec![FaqCategory::Admissions]);
    }
}
