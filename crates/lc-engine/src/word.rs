//! Single-word normalization, including hyphen and apostrophe compounds.

use crate::casing;
use crate::normalizer::Normalizer;

const CONTRACTIONS: &[&str] = &["don't", "can't", "won't", "shouldn't", "couldn't", "wouldn't"];

fn is_short(word: &str) -> bool {
    word.chars().nth(1).is_none()
}

impl Normalizer {
    /// Final spelling of one word.
    pub fn normalize_word(&self, word: &str) -> String {
        if is_short(word) {
            return word.to_string();
        }
        if self.is_known_term(word) {
            return casing::to_upper(word);
        }
        if self.should_preserve_case(word) {
            return word.to_string();
        }

        if word.contains('-') {
            return word
                .split('-')
                .map(|part| self.normalize_part(part))
                .collect::<Vec<_>>()
                .join("-");
        }

        if word.contains('\'') {
            let lower = casing::to_lower(word);
            if CONTRACTIONS.contains(&lower.as_str()) {
                return lower;
            }
            if let Some(stem) = word.strip_suffix("'s").or_else(|| word.strip_suffix("'S")) {
                return self.normalize_word(stem) + "'s";
            }
        }

        casing::to_proper(word)
    }

    /// Hyphen part: no further splitting.
    fn normalize_part(&self, part: &str) -> String {
        if is_short(part) {
            part.to_string()
        } else if self.is_known_term(part) {
            casing::to_upper(part)
        } else if self.should_preserve_case(part) {
            part.to_string()
        } else {
            casing::to_proper(part)
        }
    }
}
