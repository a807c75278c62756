//! Multi-tenant FAQ search and keyword-derivation engine.
//!
//! Each tenant (a school, identified by a unique domain) owns a set of
//! categorized FAQ entries. The crate provides the chatbot-facing search
//! path (tokenize → tenant-scoped filter → ranked, capped results plus
//! suggested categories) and the write path that derives searchable
//! keywords from question/answer text.
//!
//! Transport, authentication, and the relational persistence engine are
//! external collaborators: the engine works against the [`state::FaqStore`]
//! abstraction and exposes plain service types for a routing layer to call.

pub mod error;
pub mod faqs;
pub mod keywords;
pub mod models;
pub mod search;
pub mod state;

pub use error::{AppError, Result};
pub use keywords::derive_keywords;
pub use faqs::{CreateFaqRequest, FaqService, UpdateFaqRequest};
pub use models::{FaqCategory, FaqEntry, School, SearchResult};
pub use search::SearchService;
pub use state::{FaqFilter, FaqStore, InMemoryStore};
