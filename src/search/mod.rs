pub mod query;
pub mod service;

pub use query::{build_filter, tokenize};
pub use service::SearchService;
