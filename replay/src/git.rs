//! Revision lookup through the git command-line client.

use std::path::Path;
use std::process::Command;

use crate::error::{ReplayError, ReplayResult};

/// Returns the full hash of `HEAD` in `repo`.
///
/// Blocks until git exits; there is no timeout.
pub fn current_revision(repo: &Path) -> ReplayResult<String> {
    let output = Command::new("git")
        .arg("-C")
        .arg(repo)
        .args(["rev-parse", "HEAD"])
        .output()
        .map_err(|source| ReplayError::GitSpawn {
            repo: repo.to_path_buf(),
            source,
        })?;

    if !output.status.success() {
        return Err(ReplayError::GitFailed {
            repo: repo.to_path_buf(),
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    let revision = String::from_utf8_lossy(&output.stdout).trim().to_string();
    tracing::debug!(repo = %repo.display(), %revision, "resolved revision");
    Ok(revision)
}
