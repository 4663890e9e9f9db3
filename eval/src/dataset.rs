use anyhow::{Context, Result};
use core::QaBot;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::report::EvalInput;

#[derive(Debug, Deserialize)]
struct QuestionEntry {
    id: String,
    question: String,
}

/// Build evaluation inputs from a questions file (JSON array of
/// `{id, question}`), a ground-truth file (JSON object keyed by id), and a
/// prediction map. Missing predictions or references become empty strings.
pub fn load_dataset(
    questions_path: &Path,
    ground_truth_path: &Path,
    predictions: &HashMap<String, String>,
) -> Result<Vec<EvalInput>> {
    let questions: Vec<QuestionEntry> = read_json(questions_path)?;
    let ground_truth: HashMap<String, String> = read_json(ground_truth_path)?;

    Ok(questions
        .into_iter()
        .map(|entry| EvalInput {
            prediction: predictions.get(&entry.id).cloned().unwrap_or_default(),
            reference: ground_truth.get(&entry.id).cloned().unwrap_or_default(),
            question: entry.question,
        })
        .collect())
}

/// Run the bot over a questions file and collect its responses keyed by
/// question id. This is how retrieval answers feed the evaluation pipeline.
pub fn collect_predictions(bot: &QaBot, questions_path: &Path) -> Result<HashMap<String, String>> {
    let questions: Vec<QuestionEntry> = read_json(questions_path)?;
    Ok(questions
        .into_iter()
        .map(|entry| {
            let answer = bot.answer(&entry.question);
            (entry.id, answer.response)
        })
        .collect())
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("failed to parse {}", path.display()))
}
