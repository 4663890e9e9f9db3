use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// One question/answer pair presented to an evaluator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalInput {
    pub question: String,
    pub prediction: String,
    pub reference: String,
}

/// Aggregated evaluation output from one framework.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalReport {
    pub framework: String,
    pub score: Option<f64>,
    pub details: Map<String, Value>,
}

/// Outcome of running an evaluator. An absent external framework is a typed
/// result, not an error; callers always get something they can report on.
#[derive(Debug, Clone)]
pub enum EvalOutcome {
    Scored(EvalReport),
    Unavailable { framework: String, reason: String },
}

/// Shared contract for evaluation adapters. Each adapter either wraps an
/// external framework or computes a built-in offline metric.
pub trait Evaluator {
    fn framework(&self) -> &str;
    fn evaluate(&self, dataset: &[EvalInput]) -> EvalOutcome;
}

/// Persist a report as `<results_dir>/<framework>_result.json` with keys
/// `framework`, `score`, `details`. Returns the written path.
pub fn save_report(results_dir: &Path, report: &EvalReport) -> Result<PathBuf> {
    fs::create_dir_all(results_dir)
        .with_context(|| format!("failed to create {}", results_dir.display()))?;
    let path = results_dir.join(format!("{}_result.json", report.framework));
    let json = serde_json::to_string_pretty(report)?;
    fs::write(&path, json).with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(framework = %report.framework, path = %path.display(), "saved evaluation result");
    Ok(path)
}
