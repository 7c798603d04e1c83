//! Dictionary capability: "is this a natural-language word".

use crate::error::{EngineError, Result};
use std::collections::{HashMap, HashSet};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

const EMBEDDED_WORDS: &str = include_str!("../data/en_core.txt");

/// Boolean membership over lowercase, letters-only words.
///
/// A lookup error is treated by the engine as "not a word".
pub trait Lexicon: Send + Sync {
    fn contains(&self, word: &str) -> Result<bool>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// In-memory word set.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Bundled English core vocabulary.
    pub fn embedded() -> Result<Self> {
        Self::from_lines(EMBEDDED_WORDS.as_bytes())
    }

    /// One word per line; blank lines and `#` comments are skipped.
    pub fn from_lines<R: Read>(reader: R) -> Result<Self> {
        let mut words = HashSet::new();
        for line in BufReader::new(reader).lines() {
            let line = line.map_err(|source| EngineError::LexiconLoad {
                path: "<reader>".into(),
                source,
            })?;
            let word = line.trim();
            if word.is_empty() || word.starts_with('#') {
                continue;
            }
            words.insert(word.to_lowercase());
        }
        Self { words }.non_empty()
    }

    /// Word → frequency JSON object, the spell-checker distribution format.
    pub fn from_frequency_json<R: Read>(reader: R) -> Result<Self> {
        let freq: HashMap<String, u64> = serde_json::from_reader(reader)?;
        Self::from_words(freq.into_keys()).non_empty()
    }

    /// Load from disk. `.json` is read as a frequency object, anything else
    /// as a plain word list.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)
            .map_err(|source| EngineError::LexiconLoad { path: path.to_path_buf(), source })?;
        let is_json = path.extension().is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let list = if is_json { Self::from_frequency_json(file) } else { Self::from_lines(file) };
        match list {
            Err(EngineError::LexiconLoad { source, .. }) => {
                Err(EngineError::LexiconLoad { path: path.to_path_buf(), source })
            }
            other => other,
        }
    }

    fn non_empty(self) -> Result<Self> {
        if self.words.is_empty() {
            Err(EngineError::EmptyLexicon)
        } else {
            Ok(self)
        }
    }
}

impl Lexicon for WordList {
    fn contains(&self, word: &str) -> Result<bool> {
        Ok(self.words.contains(word))
    }

    fn len(&self) -> usize {
        self.words.len()
    }
}
