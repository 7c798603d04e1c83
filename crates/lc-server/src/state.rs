//! Application state shared across all handlers.

use crate::config::LexiconConfig;
use lc_engine::{Normalizer, WordList};
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub normalizer: Arc<Normalizer>,
}

impl AppState {
    pub fn new(normalizer: Normalizer) -> Self {
        Self { normalizer: Arc::new(normalizer) }
    }

    /// Load the lexicon and build the engine. Any failure here must stop
    /// the process before it serves.
    pub fn from_config(config: &LexiconConfig) -> lc_engine::Result<Self> {
        let words = match &config.path {
            Some(path) => {
                tracing::info!(path = %path.display(), "Loading lexicon");
                WordList::from_path(path)?
            }
            None => {
                tracing::info!("Using bundled lexicon");
                WordList::embedded()?
            }
        };
        let normalizer = Normalizer::builder(Arc::new(words)).build()?;
        Ok(Self::new(normalizer))
    }
}
