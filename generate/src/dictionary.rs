//! Word lists used to build names, units and error messages.

use std::fs;
use std::path::Path;
use std::sync::OnceLock;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{DictionaryError, DictionaryResult};

const EMBEDDED_WORDS: &str = include_str!("../resources/british.dict");

/// A non-empty list of words, one per line in its source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Returns the built-in British English word list, parsed on first use.
    pub fn embedded() -> &'static Self {
        static EMBEDDED: OnceLock<Dictionary> = OnceLock::new();
        EMBEDDED.get_or_init(|| Self {
            words: parse_words(EMBEDDED_WORDS),
        })
    }

    /// Parses a word list. Blank lines are skipped and words are trimmed.
    pub fn parse(text: &str) -> DictionaryResult<Self> {
        let words = parse_words(text);
        if words.is_empty() {
            return Err(DictionaryError::Empty { path: None });
        }
        Ok(Self { words })
    }

    /// Loads a word list from disk.
    pub fn load(path: &Path) -> DictionaryResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| DictionaryError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let words = parse_words(&text);
        if words.is_empty() {
            return Err(DictionaryError::Empty {
                path: Some(path.to_path_buf()),
            });
        }
        tracing::debug!(path = %path.display(), words = words.len(), "loaded dictionary");
        Ok(Self { words })
    }

    /// Number of words in the list.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false; a dictionary holds at least one word.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns the words in source order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Picks one word uniformly at random.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        self.words.choose(rng).map_or("", String::as_str)
    }
}

fn parse_words(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
