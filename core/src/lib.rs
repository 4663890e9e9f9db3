pub mod config;
pub mod document;
pub mod index;
pub mod qa;
pub mod snippet;
pub mod tokenizer;

pub use config::Settings;
pub use document::{load_documents, Document};
pub use index::{RetrievedContext, TfidfIndex};
pub use qa::{Answer, QaBot, NOT_FOUND_RESPONSE};
