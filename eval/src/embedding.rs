use serde_json::{json, Map, Value};

use crate::report::{EvalInput, EvalOutcome, EvalReport, Evaluator};

/// Capability probed at construction. Dense embedding models are not part of
/// this repository; a backend has to be wired in by the caller.
pub trait Embedder {
    fn embed(&self, text: &str) -> Vec<f32>;
}

/// Semantic-similarity evaluation: embeds prediction and reference and
/// averages their cosine similarity. When no backend is configured the
/// outcome is `Unavailable` rather than an error.
pub struct EmbeddingEvaluator {
    backend: Option<Box<dyn Embedder>>,
}

impl EmbeddingEvaluator {
    pub fn new(backend: Option<Box<dyn Embedder>>) -> Self {
        Self { backend }
    }
}

fn cosine(a: &[f32], b: &[f32]) -> f64 {
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)) as f64
}

impl Evaluator for EmbeddingEvaluator {
    fn framework(&self) -> &str {
        "embedding"
    }

    fn evaluate(&self, dataset: &[EvalInput]) -> EvalOutcome {
        let Some(backend) = self.backend.as_ref() else {
            tracing::warn!("no embedding backend configured, skipping");
            return EvalOutcome::Unavailable {
                framework: self.framework().to_string(),
                reason: "no embedding backend configured".to_string(),
            };
        };

        let mut per_question = Map::new();
        let mut total = 0.0f64;
        for input in dataset {
            let predicted = backend.embed(&input.prediction);
            let expected = backend.embed(&input.reference);
            let score = cosine(&predicted, &expected);
            total += score;
            per_question.insert(input.question.clone(), json!(score));
        }

        let score = if dataset.is_empty() {
            None
        } else {
            Some(total / dataset.len() as f64)
        };

        let mut details = Map::new();
        details.insert("metric".into(), json!("embedding_cosine"));
        details.insert("num_pairs".into(), json!(dataset.len()));
        details.insert("per_question".into(), Value::Object(per_question));

        EvalOutcome::Scored(EvalReport {
            framework: self.framework().to_string(),
            score,
            details,
        })
    }
}
