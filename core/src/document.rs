use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A Markdown document loaded from the corpus. Immutable once loaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub content: String,
}

/// Load every `*.md` file directly under `root`, in lexicographic filename
/// order. Load order is relied on downstream as the ranking tie-break, so
/// it must be stable across runs.
pub fn load_documents(root: &Path) -> Result<Vec<Document>> {
    if !root.exists() {
        bail!("documentation directory not found: {}", root.display());
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(root)
        .with_context(|| format!("failed to read {}", root.display()))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|p| p.is_file() && p.extension().and_then(|e| e.to_str()) == Some("md"))
        .collect();
    paths.sort();

    let mut documents = Vec::with_capacity(paths.len());
    for path in paths {
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        documents.push(Document {
            id: stem.to_string(),
            title: title_from_id(stem),
            content,
        });
    }
    Ok(documents)
}

/// Derive a display title from a document id: separators become spaces and
/// each word is capitalized, e.g. "python_requests" -> "Python Requests".
fn title_from_id(id: &str) -> String {
    id.split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
