use anyhow::{bail, Context, Result};
use std::env;
use std::path::PathBuf;

/// Runtime configuration, resolved once at process start and passed down
/// explicitly. Environment variables: DOCUMENTS_PATH, TOP_K, RESULTS_DIR.
#[derive(Debug, Clone)]
pub struct Settings {
    pub documents_path: PathBuf,
    pub top_k: usize,
    pub results_dir: PathBuf,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let documents_path = env::var("DOCUMENTS_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("data/documents"));
        let top_k = match env::var("TOP_K") {
            Ok(raw) => raw
                .parse::<usize>()
                .with_context(|| format!("TOP_K must be a positive integer, got {raw:?}"))?,
            Err(_) => 3,
        };
        if top_k == 0 {
            bail!("TOP_K must be at least 1");
        }
        let results_dir = env::var("RESULTS_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("results"));
        Ok(Self { documents_path, top_k, results_dir })
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            documents_path: PathBuf::from("data/documents"),
            top_k: 3,
            results_dir: PathBuf::from("results"),
        }
    }
}
