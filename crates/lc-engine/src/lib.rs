//! Label case normalization engine.
//!
//! Decides, per token of a short label, whether it is a technical acronym
//! whose casing must be kept, or an ordinary word to rewrite in proper case.
//!
//! Stages:
//! 1. Tokenizer: lossless split into word / whitespace / punctuation
//! 2. Term registry: known abbreviations + structural shapes
//! 3. Lexicon: injectable dictionary membership
//! 4. Decider: fixed-precedence preserve/normalize verdict
//! 5. Word normalizer: verdict plus hyphen / apostrophe compounds
//! 6. Text normalizer: re-threads words with untouched separators
//! 7. Analysis: per-label diff of changed and preserved words

pub mod analysis;
pub mod casing;
pub mod decider;
pub mod error;
pub mod lexicon;
pub mod normalizer;
pub mod patterns;
pub mod registry;
pub mod text;
pub mod tokenizer;
pub mod word;

pub use analysis::{ChangedWord, NormalizationResult};
pub use decider::CaseDecision;
pub use error::{EngineError, Result};
pub use lexicon::{Lexicon, WordList};
pub use normalizer::{Normalizer, NormalizerBuilder};
pub use registry::TermRegistry;
pub use tokenizer::{tokenize, Token, TokenKind};
