pub mod service;

pub use service::{CreateFaqRequest, FaqService, UpdateFaqRequest};
