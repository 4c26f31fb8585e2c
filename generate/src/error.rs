//! Error types for dictionary loading.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type for dictionary operations.
pub type DictionaryResult<T> = Result<T, DictionaryError>;

/// Errors that can occur when loading a word list.
#[derive(Debug)]
pub enum DictionaryError {
    /// The word list could not be read.
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The word list contains no words.
    Empty {
        /// Path of the word list, if it came from disk.
        path: Option<PathBuf>,
    },
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => {
                write!(f, "failed to read dictionary {}: {source}", path.display())
            }
            Self::Empty { path: Some(path) } => {
                write!(f, "dictionary {} contains no words", path.display())
            }
            Self::Empty { path: None } => write!(f, "dictionary contains no words"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::Empty { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn error_display_read() {
        let err = DictionaryError::Read {
            path: PathBuf::from("/missing/words.dict"),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };
        let msg = err.to_string();
        assert!(msg.contains("/missing/words.dict"), "{msg}");
        assert!(msg.contains("not found"), "{msg}");
        assert!(err.source().is_some());
    }

    #[test]
    fn error_display_empty() {
        let err = DictionaryError::Empty {
            path: Some(PathBuf::from("blank.dict")),
        };
        assert_eq!(err.to_string(), "dictionary blank.dict contains no words");
        assert_eq!(
            DictionaryError::Empty { path: None }.to_string(),
            "dictionary contains no words"
        );
        assert!(err.source().is_none());
    }
}
