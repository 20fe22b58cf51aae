//! One-shot startup load of the three JSON collections.
//!
//! The loader issues all three reads together and awaits them together:
//! either every collection arrives or the whole load fails as a unit.
//! A read failure and a decode failure are distinct outcomes kept apart by
//! `LoadError`: the first leaves the graph surface empty, the second puts a
//! visible banner on the page.

use crate::models::{Paper, SelectedPaper};
use serde_json::Value;
use std::path::Path;
use thiserror::Error;
use url::Url;

/// File names looked up inside the data directory.
pub const PAPERS_FILE: &str = "data.json";
pub const EDGES_FILE: &str = "edges.json";
pub const SELECTED_FILE: &str = "selected_papers.json";

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read {file}: {source}")]
    Fetch {
        file: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode {file}: {source}")]
    Decode {
        file: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl LoadError {
    /// True for the read-failure path (missing file, I/O error), which stays
    /// silent on the page; decode failures take the visible banner path.
    pub fn is_fetch(&self) -> bool {
        matches!(self, LoadError::Fetch { .. })
    }
}

/// The three collections as loaded, before any derivation.
#[derive(Debug, Clone)]
pub struct PaperData {
    pub papers: Vec<Paper>,
    /// Edge records passed to the renderer verbatim.
    pub edges: Vec<Value>,
    pub selected: Vec<SelectedPaper>,
}

/// Reads and decodes `data.json`, `edges.json` and `selected_papers.json`
/// from `data_dir`. No retries, no timeouts: one shot at startup.
pub async fn load_paper_data(data_dir: &Path) -> Result<PaperData, LoadError> {
    let (papers_raw, edges_raw, selected_raw) = tokio::try_join!(
        read_collection(data_dir, PAPERS_FILE),
        read_collection(data_dir, EDGES_FILE),
        read_collection(data_dir, SELECTED_FILE),
    )?;

    let papers: Vec<Paper> = decode(PAPERS_FILE, &papers_raw)?;
    let edges: Vec<Value> = decode(EDGES_FILE, &edges_raw)?;
    let selected: Vec<SelectedPaper> = decode(SELECTED_FILE, &selected_raw)?;

    let malformed = count_malformed_links(&papers, &selected);
    if malformed > 0 {
        tracing::warn!(count = malformed, "paper links that are not well-formed URLs");
    }

    Ok(PaperData {
        papers,
        edges,
        selected,
    })
}

async fn read_collection(dir: &Path, file: &'static str) -> Result<String, LoadError> {
    tokio::fs::read_to_string(dir.join(file))
        .await
        .map_err(|source| LoadError::Fetch { file, source })
}

fn decode<T: serde::de::DeserializeOwned>(file: &'static str, raw: &str) -> Result<T, LoadError> {
    serde_json::from_str(raw).map_err(|source| LoadError::Decode { file, source })
}

/// Malformed links are carried verbatim into the model; this only surfaces
/// their count as a data-quality signal.
fn count_malformed_links(papers: &[Paper], selected: &[SelectedPaper]) -> usize {
    papers
        .iter()
        .map(|p| p.link.as_str())
        .chain(selected.iter().map(|s| s.link.as_str()))
        .filter(|link| Url::parse(link).is_err())
        .count()
}

// ============================================================================
// Tests
// ============================================================================
