use anyhow::{bail, Result};
use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

use crate::document::Document;
use crate::tokenizer::tokenize;

pub type TermId = usize;

/// A document paired with its cosine similarity to a query.
/// Invariant: 0.0 < score <= 1.0; zero-score matches are never returned.
#[derive(Debug, Clone, Serialize)]
pub struct RetrievedContext {
    pub document: Arc<Document>,
    pub score: f32,
}

/// TF-IDF vector space over a fixed document collection. Immutable after
/// `build`; queries are read-only and deterministic.
#[derive(Debug)]
pub struct TfidfIndex {
    documents: Vec<Arc<Document>>,
    dictionary: HashMap<String, TermId>,
    idf: Vec<f32>,
    /// One L2-normalized weight vector per document, keyed by term id.
    vectors: Vec<HashMap<TermId, f32>>,
}

impl TfidfIndex {
    pub fn build(documents: Vec<Document>) -> Result<Self> {
        if documents.is_empty() {
            bail!("no documents supplied for indexing");
        }
        let documents: Vec<Arc<Document>> = documents.into_iter().map(Arc::new).collect();

        // First pass: assign term ids in encounter order and count term
        // frequencies per document.
        let mut dictionary: HashMap<String, TermId> = HashMap::new();
        let mut df: Vec<u32> = Vec::new();
        let mut tf_counts: Vec<Vec<(TermId, u32)>> = Vec::with_capacity(documents.len());
        for doc in &documents {
            let mut counts: HashMap<TermId, u32> = HashMap::new();
            for term in tokenize(&doc.content) {
                let next_id = dictionary.len();
                let tid = *dictionary.entry(term).or_insert(next_id);
                if tid == df.len() {
                    df.push(0);
                }
                *counts.entry(tid).or_insert(0) += 1;
            }
            // Sorted by term id so norm accumulation order is stable across
            // rebuilds (query determinism is a contract, down to the bits).
            let mut counts: Vec<(TermId, u32)> = counts.into_iter().collect();
            counts.sort_by_key(|&(tid, _)| tid);
            for &(tid, _) in &counts {
                df[tid] += 1;
            }
            tf_counts.push(counts);
        }

        // Smoothed IDF: ln((1 + n) / (1 + df)) + 1. Never divides by zero
        // and keeps a single-document corpus retrievable.
        let n = documents.len() as f32;
        let idf: Vec<f32> = df
            .iter()
            .map(|&df_t| ((1.0 + n) / (1.0 + df_t as f32)).ln() + 1.0)
            .collect();

        // Second pass: weight by tf * idf and L2-normalize each vector.
        let mut vectors: Vec<HashMap<TermId, f32>> = Vec::with_capacity(documents.len());
        for counts in tf_counts {
            let mut norm = 0.0f32;
            let mut vector: HashMap<TermId, f32> = HashMap::with_capacity(counts.len());
            for (tid, tf) in &counts {
                let weight = *tf as f32 * idf[*tid];
                norm += weight * weight;
            }
            let norm = norm.sqrt();
            if norm > 0.0 {
                for (tid, tf) in counts {
                    vector.insert(tid, tf as f32 * idf[tid] / norm);
                }
            }
            vectors.push(vector);
        }

        tracing::info!(
            num_docs = documents.len(),
            num_terms = dictionary.len(),
            "built tf-idf index"
        );
        Ok(Self { documents, dictionary, idf, vectors })
    }

    /// Rank documents by cosine similarity to `text`, returning at most `k`
    /// contexts with strictly positive scores, sorted descending. Ties keep
    /// corpus load order. Empty or whitespace-only text yields no results.
    pub fn query(&self, text: &str, k: usize) -> Vec<RetrievedContext> {
        if text.trim().is_empty() {
            return Vec::new();
        }

        // Project the query onto the existing vocabulary; out-of-vocabulary
        // terms contribute nothing.
        let mut counts: HashMap<TermId, u32> = HashMap::new();
        for term in tokenize(text) {
            if let Some(&tid) = self.dictionary.get(&term) {
                *counts.entry(tid).or_insert(0) += 1;
            }
        }
        let mut query_vec: Vec<(TermId, f32)> = counts
            .into_iter()
            .map(|(tid, tf)| (tid, tf as f32 * self.idf[tid]))
            .collect();
        query_vec.sort_by_key(|&(tid, _)| tid);

        let norm = query_vec.iter().map(|&(_, w)| w * w).sum::<f32>().sqrt();
        if norm == 0.0 {
            return Vec::new();
        }
        for (_, w) in query_vec.iter_mut() {
            *w /= norm;
        }

        // Document vectors are already normalized, so the dot product is the
        // cosine similarity.
        let mut scored: Vec<(usize, f32)> = Vec::with_capacity(self.documents.len());
        for (doc_idx, vector) in self.vectors.iter().enumerate() {
            let mut score = 0.0f32;
            for &(tid, q_w) in &query_vec {
                if let Some(&d_w) = vector.get(&tid) {
                    score += q_w * d_w;
                }
            }
            scored.push((doc_idx, score.min(1.0)));
        }

        // Stable sort: equal scores keep load order, first-loaded wins.
        scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        scored
            .into_iter()
            .filter(|&(_, score)| score > 0.0)
            .take(k)
            .map(|(doc_idx, score)| RetrievedContext {
                document: Arc::clone(&self.documents[doc_idx]),
                score,
            })
            .collect()
    }

    pub fn num_docs(&self) -> usize {
        self.documents.len()
    }

    pub fn num_terms(&self) -> usize {
        self.dictionary.len()
    }
}
