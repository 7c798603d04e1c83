//! Case-preservation decision with fixed precedence, first match wins.

use crate::casing;
use crate::normalizer::Normalizer;

/// Which rule settled a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseDecision {
    /// Matched a preserve pattern, named.
    PreservePattern(&'static str),
    /// All caps with a technical shape or registry entry.
    UppercaseTechnical,
    /// All caps and not a dictionary word: presumed acronym.
    UppercaseUnknown,
    /// Registry entry under some other casing.
    KnownTerm,
    Normalize,
}

impl CaseDecision {
    pub fn preserves(self) -> bool {
        !matches!(self, CaseDecision::Normalize)
    }

    pub fn rule(self) -> &'static str {
        match self {
            CaseDecision::PreservePattern(_) => "preserve_pattern",
            CaseDecision::UppercaseTechnical => "uppercase_technical",
            CaseDecision::UppercaseUnknown => "uppercase_unknown",
            CaseDecision::KnownTerm => "known_term",
            CaseDecision::Normalize => "normalize",
        }
    }
}

impl Normalizer {
    /// Letters-only, lowercased `word` is in the lexicon. Words shorter than
    /// two letters and lexicon faults count as unknown.
    pub fn is_real_word(&self, word: &str) -> bool {
        let clean: String = word
            .chars()
            .filter(|c| c.is_alphabetic())
            .flat_map(char::to_lowercase)
            .collect();
        if clean.chars().count() < 2 {
            return false;
        }
        match self.lexicon.contains(&clean) {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!(
                    word = %clean,
                    error = %e,
                    "Lexicon lookup failed, treating as unknown"
                );
                false
            }
        }
    }

    pub fn is_known_term(&self, word: &str) -> bool {
        self.registry.is_known_term(word)
    }

    pub fn is_technical_term(&self, word: &str) -> bool {
        self.registry.is_technical_term(word)
    }

    pub fn decide(&self, word: &str) -> CaseDecision {
        let decision = if let Some(name) = self.preserve.first_match(word) {
            CaseDecision::PreservePattern(name)
        } else if casing::is_all_upper(word) && self.is_technical_term(word) {
            CaseDecision::UppercaseTechnical
        } else if casing::is_all_upper(word) && !self.is_real_word(word) {
            CaseDecision::UppercaseUnknown
        } else if self.is_known_term(word) {
            CaseDecision::KnownTerm
        } else {
            CaseDecision::Normalize
        };
        tracing::trace!(word, rule = decision.rule(), "case decision");
        decision
    }

    pub fn should_preserve_case(&self, word: &str) -> bool {
        self.decide(word).preserves()
    }
}
