//! Word membership oracle.

use derive_more::{Display, Error};
use std::collections::HashSet;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Exact-match word membership test.
///
/// The word finder only ever asks this one question, so any word source
/// (a loaded list, a fixed test set, a shared handle) can stand in.
pub trait WordOracle {
    /// Returns true if `word` is a valid word.
    fn is_match(&self, word: &str) -> bool;
}

impl<T: WordOracle + ?Sized> WordOracle for &T {
    fn is_match(&self, word: &str) -> bool {
        (**self).is_match(word)
    }
}

impl<T: WordOracle + ?Sized> WordOracle for Arc<T> {
    fn is_match(&self, word: &str) -> bool {
        (**self).is_match(word)
    }
}

/// A fixed set of valid words.
///
/// Words are stored exactly as given; lookups are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Creates an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a dictionary from newline-delimited text.
    ///
    /// Each line is trimmed and blank lines are skipped.
    #[instrument(skip(text), fields(bytes = text.len()))]
    pub fn from_word_list(text: &str) -> Self {
        let dictionary: Self = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        debug!(words = dictionary.len(), "Parsed word list");
        dictionary
    }

    /// Loads a newline-delimited word list from disk.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let text = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            DictionaryError::new(format!(
                "Failed to read word list {}: {}",
                path.as_ref().display(),
                e
            ))
        })?;
        let dictionary = Self::from_word_list(&text);
        info!(words = dictionary.len(), "Dictionary loaded");
        Ok(dictionary)
    }

    /// Adds a word.
    pub fn insert(&mut self, word: impl Into<String>) -> bool {
        self.words.insert(word.into())
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if the dictionary holds no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordOracle for Dictionary {
    fn is_match(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<String>> Extend<S> for Dictionary {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.words.extend(iter.into_iter().map(Into::into));
    }
}

/// Dictionary loading error.
#[derive(Debug, Clone, Display, Error)]
#[display("Dictionary error: {} at {}:{}", message, file, line)]
pub struct DictionaryError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl DictionaryError {
    /// Creates a new dictionary error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
