//! Analysis reporter: what changed and what was preserved.

use crate::normalizer::Normalizer;
use crate::text::{segment, Segment};
use serde::{Deserialize, Serialize};

/// One word whose spelling changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangedWord {
    pub original: String,
    pub normalized: String,
    /// Index among the words of the label.
    pub position: usize,
}

/// Normalization of one label with its diff.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NormalizationResult {
    pub original: String,
    pub normalized: String,
    pub changed: bool,
    pub preserved_terms: Vec<String>,
    pub changed_words: Vec<ChangedWord>,
}

impl NormalizationResult {
    /// Record for input that is left as-is.
    pub fn unchanged(text: &str) -> Self {
        Self {
            original: text.to_string(),
            normalized: text.to_string(),
            changed: false,
            preserved_terms: Vec::new(),
            changed_words: Vec::new(),
        }
    }
}

fn word_segments(text: &str) -> Vec<&str> {
    segment(text)
        .into_iter()
        .filter_map(|s| match s {
            Segment::Word(w) => Some(w),
            Segment::Other(_) => None,
        })
        .collect()
}

impl Normalizer {
    /// Normalize `text` and report the difference. `changed_words[].position`
    /// counts compound words (`e-mail`, `John's` are one each), not raw
    /// tokenizer word tokens.
    pub fn analyze_text(&self, text: &str) -> NormalizationResult {
        if text.is_empty() {
            return NormalizationResult::unchanged(text);
        }

        let normalized = self.normalize_text(text);
        let original_words = word_segments(text);

        let preserved_terms = original_words
            .iter()
            .filter(|w| self.should_preserve_case(w))
            .map(|w| w.to_string())
            .collect();

        // Normalization rewrites case only, so both sides have the same words.
        let changed_words = original_words
            .iter()
            .zip(word_segments(&normalized))
            .enumerate()
            .filter(|(_, (orig, norm))| *orig != norm)
            .map(|(position, (orig, norm))| ChangedWord {
                original: orig.to_string(),
                normalized: norm.to_string(),
                position,
            })
            .collect();

        NormalizationResult {
            changed: normalized != text,
            original: text.to_string(),
            normalized,
            preserved_terms,
            changed_words,
        }
    }
}
