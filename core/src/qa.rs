use anyhow::{bail, Result};
use serde::Serialize;
use std::path::Path;

use crate::document::load_documents;
use crate::index::{RetrievedContext, TfidfIndex};
use crate::snippet::extract_snippet;

pub const NOT_FOUND_RESPONSE: &str = "I couldn't find relevant documentation.";

/// Structured answer: the response text plus the full ranked context list
/// that supported it.
#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub question: String,
    pub response: String,
    pub contexts: Vec<RetrievedContext>,
}

/// Retrieval-backed QA over a local Markdown corpus. The index is built once
/// at construction and read-only afterwards.
#[derive(Debug)]
pub struct QaBot {
    index: TfidfIndex,
    top_k: usize,
}

impl QaBot {
    pub fn new(documents_path: &Path, top_k: usize) -> Result<Self> {
        let documents = load_documents(documents_path)?;
        if documents.is_empty() {
            bail!("no markdown documents found in {}", documents_path.display());
        }
        let index = TfidfIndex::build(documents)?;
        Ok(Self { index, top_k })
    }

    /// Top `top_k` document contexts matching the question.
    pub fn retrieve(&self, question: &str) -> Vec<RetrievedContext> {
        self.index.query(question, self.top_k)
    }

    /// Answer with an attributed snippet from the best-matching document.
    pub fn answer(&self, question: &str) -> Answer {
        let contexts = self.retrieve(question);
        if contexts.is_empty() {
            return Answer {
                question: question.to_string(),
                response: NOT_FOUND_RESPONSE.to_string(),
                contexts,
            };
        }

        let best = &contexts[0];
        let snippet = extract_snippet(&best.document, question);
        let response = if snippet.is_empty() {
            best.document.content.clone()
        } else {
            format!("According to {}, {}", best.document.title, snippet)
        };
        Answer {
            question: question.to_string(),
            response,
            contexts,
        }
    }
}
