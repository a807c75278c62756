//! Common test utilities for the FAQ engine integration tests.
//!
//! Provides a seeded in-memory store and tracing setup shared by the
//! end-to-end scenarios.

use campus_faq_engine::{FaqCategory, FaqEntry, School};
use campus_faq_engine::{FaqStore, InMemoryStore};
use std::sync::Arc;
use std::sync::Once;
use uuid::Uuid;

static TRACING: Once = Once::new();

/// Initialize tracing once for the whole test binary
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| "campus_faq_engine=debug".into()),
            )
            .with_test_writer()
            .try_init();
    });
}

/// A fresh store seeded with one active school (`acme.edu`, id 1)
pub async fn store_with_acme() -> Arc<InMemoryStore> {
    init_tracing();
    let store = Arc::new(InMemoryStore::new());
    store
        .save_school(&School::new(
            1,
            "Acme University".to_string(),
            "acme.edu".to_string(),
        ))
        .await
        .expect("seed school");
    store
}

/// Build a FAQ entry with derived keywords for a seeded school
pub fn faq(school_id: i64, category: FaqCategory, question: &str, answer: &str) -> FaqEntry {
    FaqEntry::new(
        school_id,
        category,
        question.to_string(),
        answer.to_string(),
        campus_faq_engine::keywords::derive_keywords(question, answer),
        Uuid::new_v4(),
    )
}
