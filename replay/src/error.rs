//! Error types for replay lookups.

use std::fmt;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Result type for replay operations.
pub type ReplayResult<T> = Result<T, ReplayError>;

/// Errors that can occur while replaying recorded output.
#[derive(Debug)]
pub enum ReplayError {
    /// The git process could not be started.
    GitSpawn {
        /// Repository the revision was requested for.
        repo: PathBuf,
        /// Error returned when spawning git.
        source: io::Error,
    },

    /// `git rev-parse HEAD` exited unsuccessfully (e.g. not a repository).
    GitFailed {
        /// Repository the revision was requested for.
        repo: PathBuf,
        /// Exit status of the git process.
        status: ExitStatus,
        /// Trimmed stderr of the git process.
        stderr: String,
    },

    /// The dataset file could not be read.
    ReadDataset {
        /// Path of the dataset file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The dataset is not valid JSON or does not have the expected shape.
    ParseDataset(serde_json::Error),

    /// The dataset array has no elements.
    EmptyDataset,

    /// The dataset has no entry for the repository's current revision.
    RevisionNotFound {
        /// Full hash of the repository's `HEAD`.
        revision: String,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GitSpawn { repo, source } => {
                write!(f, "failed to run git in {}: {source}", repo.display())
            }
            Self::GitFailed {
                repo,
                status,
                stderr,
            } => {
                write!(
                    f,
                    "git rev-parse HEAD in {} failed ({status})",
                    repo.display()
                )?;
                if !stderr.is_empty() {
                    write!(f, ": {stderr}")?;
                }
                Ok(())
            }
            Self::ReadDataset { path, source } => {
                write!(f, "failed to read dataset {}: {source}", path.display())
            }
            Self::ParseDataset(err) => write!(f, "invalid dataset: {err}"),
            Self::EmptyDataset => write!(f, "dataset contains no entries"),
            Self::RevisionNotFound { revision } => {
                write!(f, "no recorded output for revision {revision}")
            }
        }
    }
}

impl std::error::Error for ReplayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::GitSpawn { source, .. } | Self::ReadDataset { source, .. } => Some(source),
            Self::ParseDataset(err) => Some(err),
            Self::GitFailed { .. } | Self::EmptyDataset | Self::RevisionNotFound { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ReplayError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseDataset(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_revision_not_found() {
        let err = ReplayError::RevisionNotFound {
            revision: "abc123".to_string(),
        };
        assert_eq!(err.to_string(), "no recorded output for revision abc123");
    }

    #[test]
    fn error_display_read_dataset() {
        let err = ReplayError::ReadDataset {
            path: PathBuf::from("data.json"),
            source: io::Error::new(io::ErrorKind::NotFound, "gone"),
        };
        let msg = err.to_string();
        assert!(msg.contains("data.json"), "{msg}");
        assert!(msg.contains("gone"), "{msg}");
    }

    #[test]
    fn error_display_git_spawn_names_repo() {
        let err = ReplayError::GitSpawn {
            repo: PathBuf::from("/srv/bench"),
            source: io::Error::new(io::ErrorKind::NotFound, "no git"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/srv/bench"), "{msg}");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn parse_error_converts() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = ReplayError::from(json_err);
        assert!(matches!(err, ReplayError::ParseDataset(_)));
        assert!(std::error::Error::source(&err).is_some());
    }
}
