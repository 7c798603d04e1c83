//! Shape matchers evaluated case-sensitively against the raw word.

use crate::error::{EngineError, Result};
use regex::Regex;

/// Abbreviation shapes that are technical without being listed.
pub const STRUCTURAL_PATTERNS: &[(&str, &str)] = &[
    ("short_acronym", r"^[A-Z]{2,6}$"),
    ("letters_digits", r"^[A-Z]+\d+$"),
    ("digits_letters", r"^\d+[A-Z]+$"),
    ("letter_and_letter", r"^[A-Z]&[A-Z]$"),
    ("letters_slash_letters", r"^[A-Z]+/[A-Z]+$"),
];

/// Shapes whose spelling is kept exactly as typed.
pub const PRESERVE_PATTERNS: &[(&str, &str)] = &[
    ("all_caps_run", r"^[A-Z]{2,6}$"),
    ("letters_digits", r"^[A-Z]+\d+$"),
    ("e_mail", r"e-mail"),
    ("i_prefixed", r"^i-[\w-]+$"),
    ("e_prefixed", r"^e-[\w-]+$"),
];

#[derive(Debug, Clone)]
pub struct NamedPattern {
    pub name: &'static str,
    regex: Regex,
}

impl NamedPattern {
    pub fn new(name: &'static str, pattern: &str) -> Result<Self> {
        let regex =
            Regex::new(pattern).map_err(|source| EngineError::InvalidPattern { name, source })?;
        Ok(Self { name, regex })
    }

    pub fn is_match(&self, word: &str) -> bool {
        self.regex.is_match(word)
    }
}

/// Fixed ordered list of matchers; any single match is sufficient.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<NamedPattern>,
}

impl PatternSet {
    pub fn compile(table: &[(&'static str, &str)]) -> Result<Self> {
        let patterns = table
            .iter()
            .map(|&(name, pattern)| NamedPattern::new(name, pattern))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { patterns })
    }

    pub fn structural() -> Result<Self> {
        Self::compile(STRUCTURAL_PATTERNS)
    }

    pub fn preserve() -> Result<Self> {
        Self::compile(PRESERVE_PATTERNS)
    }

    /// Name of the first pattern matching `word`.
    pub fn first_match(&self, word: &str) -> Option<&'static str> {
        self.patterns.iter().find(|p| p.is_match(word)).map(|p| p.name)
    }

    pub fn is_match(&self, word: &str) -> bool {
        self.first_match(word).is_some()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
