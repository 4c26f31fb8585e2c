//! Replay of recorded benchmark script output for pseubench.
//!
//! Instead of generating a document, the recorded output of a real benchmark
//! run is looked up by the git revision a repository is checked out at.
//!
//! # Design Principles
//!
//! - **Single shot** - One git query, one file read, one lookup. No retries.
//! - **Fail loudly** - An unknown revision is an error, never an empty document.

mod dataset;
mod error;
mod git;

use std::path::Path;

pub use dataset::{load_dataset, parse_dataset, Dataset};
pub use error::{ReplayError, ReplayResult};
pub use git::current_revision;

/// Returns the recorded output for the revision `repo` is at, as compact JSON.
pub fn fetch_correct_data(dataset: &Path, repo: &Path) -> ReplayResult<String> {
    let revision = current_revision(repo)?;
    let dataset = load_dataset(dataset)?;
    let entry = dataset.entry(&revision)?;
    Ok(serde_json::to_string(entry)?)
}
