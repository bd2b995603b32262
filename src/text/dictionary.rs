//! Word list used to suggest cover words.
//!
//! Any plain text file with whitespace separated words works. Words are
//! lower-cased and de-duplicated, and kept in alphabetical order so that
//! search results come out sorted.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{ParityError, Result};
use crate::text::filter::{is_filtered_word, FilterOptions};

/// Word lists tried when no dictionary is configured.
pub const DEFAULT_DICTIONARY_PATHS: &[&str] = &["/usr/share/dict/web2", "/usr/share/dict/words"];

/// A sorted, de-duplicated word list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Builds a dictionary from any word iterator.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: BTreeSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            words: words.into_iter().collect(),
        }
    }

    /// Reads a word list file.
    ///
    /// # Errors
    /// I/O errors, or [`ParityError::EmptyDictionary`] if the file has no words.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let dictionary = Self::from_words(content.split_whitespace());
        if dictionary.is_empty() {
            return Err(ParityError::EmptyDictionary(path.to_path_buf()));
        }
        debug!(path = %path.display(), words = dictionary.len(), "loaded dictionary");
        Ok(dictionary)
    }

    /// Loads `path` if given, otherwise the first system word list found.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        let found = DEFAULT_DICTIONARY_PATHS
            .iter()
            .map(PathBuf::from)
            .find(|p| p.is_file());

        match found {
            Some(path) => Self::from_file(path),
            None => Err(ParityError::EmptyDictionary(PathBuf::from(
                DEFAULT_DICTIONARY_PATHS[DEFAULT_DICTIONARY_PATHS.len() - 1],
            ))),
        }
    }

    /// Words that remain visible under `filters`, in alphabetical order.
    pub fn filtered<'a>(&'a self, filters: &'a FilterOptions) -> impl Iterator<Item = &'a str> + 'a {
        self.words
            .iter()
            .map(String::as_str)
            .filter(move |w| !is_filtered_word(w, filters))
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
