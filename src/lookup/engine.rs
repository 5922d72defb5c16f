use super::normalizer::normalize;
use crate::hits::recorder::HitRecorder;
use crate::lexicon::store::LexiconStore;

use std::sync::Arc;

/// Resolves raw user input against the lexicon and records hits.
#[derive(Clone)]
pub struct Lookup {
    store: Arc<LexiconStore>,
    hits: Arc<HitRecorder>,
}

impl Lookup {
    pub fn new(store: Arc<LexiconStore>, hits: Arc<HitRecorder>) -> Self {
        Self { store, hits }
    }

    /// Returns the message to show for `raw_query`.
    ///
    /// - Empty after normalization: `""`, the caller decides how to render it.
    /// - Unknown word: a "not found" message echoing `raw_query` as given.
    /// - Known word: the precomputed entry message. A hit is queued but never
    ///   awaited.
    pub async fn lookup(&self, raw_query: &str) -> String {
        let clean = normalize(raw_query);

        if clean.is_empty() {
            return String::new();
        }

        match self.store.read(&clean).await {
            Some(entry) => {
                self.hits.record(&clean);
                entry.message
            }
            None => {
                tracing::debug!("No entry for '{}'", clean);
                format!("Kunde inte hitta substantivet '{}'\n", raw_query)
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn store(&self) -> &Arc<LexiconStore> {
        &self.store
    }
}
