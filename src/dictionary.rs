//! Dictionary membership.
//!
//! The search only ever asks one question of a dictionary: is this string a
//! word? [`Lexicon`] captures that, so the search can run against the
//! bundled list, a file loaded at runtime, or a plain set in tests.

use crate::error::{LadderError, Result};
use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;
use std::path::Path;
use tracing::{debug, info};

/// A membership oracle over lowercase words.
pub trait Lexicon {
    fn contains(&self, word: &str) -> bool;
}

impl<S: BuildHasher> Lexicon for HashSet<String, S> {
    fn contains(&self, word: &str) -> bool {
        HashSet::contains(self, word)
    }
}

impl Lexicon for BTreeSet<String> {
    fn contains(&self, word: &str) -> bool {
        BTreeSet::contains(self, word)
    }
}

impl<L: Lexicon + ?Sized> Lexicon for &L {
    fn contains(&self, word: &str) -> bool {
        (**self).contains(word)
    }
}

/// An immutable set of lowercase a-z words.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from arbitrary strings.
    ///
    /// Entries are trimmed and lowercased. Blank entries and entries with
    /// anything other than ASCII letters are dropped.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty() && w.bytes().all(|b| b.is_ascii_lowercase()))
            .collect();
        Self { words }
    }

    /// Parse a word list with one word per line.
    pub fn parse(text: &str) -> Self {
        Self::from_words(text.lines())
    }

    /// Load a word list from disk.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| LadderError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dictionary = Self::parse(&text);
        if dictionary.is_empty() {
            return Err(LadderError::EmptyDictionary {
                path: path.to_path_buf(),
            });
        }
        info!(path = %path.display(), words = dictionary.len(), "loaded dictionary");
        Ok(dictionary)
    }

    /// The word list compiled into the crate.
    pub fn embedded() -> Self {
        let dictionary = Self::parse(include_str!("../dictionary/dictionary.txt"));
        debug!(words = dictionary.len(), "loaded embedded dictionary");
        dictionary
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// All words of the given length, sorted.
    pub fn words_of_length(&self, len: usize) -> Vec<&str> {
        let mut words: Vec<&str> = self
            .words
            .iter()
            .filter(|w| w.len() == len)
            .map(String::as_str)
            .collect();
        words.sort_unstable();
        words
    }
}

impl Lexicon for Dictionary {
    fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
