use serde_json::{json, Map, Value};
use std::collections::HashSet;

use crate::report::{EvalInput, EvalOutcome, EvalReport, Evaluator};

/// Offline fallback metric: per-pair token overlap F1 between prediction and
/// reference, averaged over the dataset. Always available; needs no external
/// framework.
pub struct TokenOverlapEvaluator;

impl TokenOverlapEvaluator {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TokenOverlapEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

fn word_set(text: &str) -> HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_string())
        .filter(|w| !w.is_empty())
        .collect()
}

/// F1 over the word sets of two texts. 1.0 for identical sets, 0.0 when the
/// sets are disjoint or either text is empty.
pub fn overlap_f1(prediction: &str, reference: &str) -> f64 {
    let predicted = word_set(prediction);
    let expected = word_set(reference);
    if predicted.is_empty() || expected.is_empty() {
        return 0.0;
    }
    let shared = predicted.intersection(&expected).count() as f64;
    if shared == 0.0 {
        return 0.0;
    }
    let precision = shared / predicted.len() as f64;
    let recall = shared / expected.len() as f64;
    2.0 * precision * recall / (precision + recall)
}

impl Evaluator for TokenOverlapEvaluator {
    fn framework(&self) -> &str {
        "token_overlap"
    }

    fn evaluate(&self, dataset: &[EvalInput]) -> EvalOutcome {
        let mut per_question = Map::new();
        let mut total = 0.0f64;
        for input in dataset {
            let score = overlap_f1(&input.prediction, &input.reference);
            total += score;
            per_question.insert(input.question.clone(), json!(score));
        }

        let score = if dataset.is_empty() {
            None
        } else {
            Some(total / dataset.len() as f64)
        };

        let mut details = Map::new();
        details.insert("metric".into(), json!("token_overlap_f1"));
        details.insert("num_pairs".into(), json!(dataset.len()));
        details.insert("per_question".into(), Value::Object(per_question));

        EvalOutcome::Scored(EvalReport {
            framework: self.framework().to_string(),
            score,
            details,
        })
    }
}
