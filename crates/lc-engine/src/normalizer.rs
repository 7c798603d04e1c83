//! The normalization engine and its one-time construction.

use crate::error::{EngineError, Result};
use crate::lexicon::{Lexicon, WordList};
use crate::patterns::PatternSet;
use crate::registry::TermRegistry;
use std::sync::Arc;

/// Label case normalizer.
///
/// Immutable after [`NormalizerBuilder::build`]; share it behind an `Arc`
/// and call it from any number of threads.
#[derive(Clone)]
pub struct Normalizer {
    pub(crate) registry: Arc<TermRegistry>,
    pub(crate) lexicon: Arc<dyn Lexicon>,
    pub(crate) preserve: PatternSet,
}

impl Normalizer {
    pub fn builder(lexicon: Arc<dyn Lexicon>) -> NormalizerBuilder {
        NormalizerBuilder::new(lexicon)
    }

    /// Built-in registry over the bundled English lexicon.
    pub fn with_embedded_lexicon() -> Result<Self> {
        Self::builder(Arc::new(WordList::embedded()?)).build()
    }

    pub fn registry(&self) -> &TermRegistry {
        &self.registry
    }
}

impl std::fmt::Debug for Normalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Normalizer")
            .field("terms", &self.registry.len())
            .field("lexicon_words", &self.lexicon.len())
            .field("preserve_patterns", &self.preserve.len())
            .finish()
    }
}

/// Builder for [`Normalizer`].
pub struct NormalizerBuilder {
    lexicon: Arc<dyn Lexicon>,
    registry: Option<Arc<TermRegistry>>,
}

impl NormalizerBuilder {
    pub fn new(lexicon: Arc<dyn Lexicon>) -> Self {
        Self { lexicon, registry: None }
    }

    /// Replace the built-in term registry.
    pub fn registry(mut self, registry: Arc<TermRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Compile pattern tables and validate the lexicon.
    pub fn build(self) -> Result<Normalizer> {
        if self.lexicon.is_empty() {
            return Err(EngineError::EmptyLexicon);
        }
        let registry = match self.registry {
            Some(r) => r,
            None => Arc::new(TermRegistry::builtin()?),
        };
        let preserve = PatternSet::preserve()?;
        tracing::info!(
            terms = registry.len(),
            lexicon_words = self.lexicon.len(),
            "Label normalizer ready"
        );
        Ok(Normalizer { registry, lexicon: self.lexicon, preserve })
    }
}
