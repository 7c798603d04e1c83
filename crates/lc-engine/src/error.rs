use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Failed to read lexicon {path}: {source}")]
    LexiconLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed lexicon: {0}")]
    LexiconParse(#[from] serde_json::Error),
    #[error("Lexicon contains no words")]
    EmptyLexicon,
    #[error("Lexicon lookup failed: {0}")]
    LexiconLookup(String),
    #[error("Invalid pattern {name}: {source}")]
    InvalidPattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
