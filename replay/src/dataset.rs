//! Recorded benchmark script output.

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ReplayError, ReplayResult};

/// One recorded project: its output for every benchmarked revision.
///
/// On disk the dataset is a JSON array; only its first element is used.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dataset {
    /// Revision hash to recorded output.
    pub commits: Map<String, Value>,
    /// Project name.
    #[serde(default)]
    pub name: Option<String>,
    /// Where the project can be downloaded.
    #[serde(default)]
    pub url: Option<String>,
}

impl Dataset {
    /// Returns the recorded output for `revision`.
    pub fn entry(&self, revision: &str) -> ReplayResult<&Value> {
        self.commits
            .get(revision)
            .ok_or_else(|| ReplayError::RevisionNotFound {
                revision: revision.to_string(),
            })
    }
}

/// Parses dataset text, keeping the first project.
pub fn parse_dataset(text: &str) -> ReplayResult<Dataset> {
    let projects: Vec<Dataset> = serde_json::from_str(text)?;
    projects.into_iter().next().ok_or(ReplayError::EmptyDataset)
}

/// Reads and parses a dataset file.
pub fn load_dataset(path: &Path) -> ReplayResult<Dataset> {
    let text = fs::read_to_string(path).map_err(|source| ReplayError::ReadDataset {
        path: path.to_path_buf(),
        source,
    })?;
    let dataset = parse_dataset(&text)?;
    tracing::debug!(
        path = %path.display(),
        name = dataset.name.as_deref().unwrap_or("-"),
        revisions = dataset.commits.len(),
        "loaded dataset"
    );
    Ok(dataset)
}
