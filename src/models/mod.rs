pub mod faq;
pub mod school;

pub use faq::{FaqCategory, FaqEntry, SearchResult};
pub use school::School;
