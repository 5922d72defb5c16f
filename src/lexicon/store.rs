//! Lexicon Store
//!
//! Holds the word table behind one mutex covering the whole map. The set of
//! keys is fixed once the store is built; the only mutation afterwards is the
//! per-entry hit counter.

use super::types::*;

use std::collections::HashMap;
use tokio::sync::Mutex;

pub struct LexiconStore {
    /// Canonical word -> classification.
    entries: Mutex<HashMap<String, LexiconEntry>>,
}

impl LexiconStore {
    /// Wraps an already built table. Use [`super::loader`] to build one from
    /// word lists.
    pub fn new(entries: HashMap<String, LexiconEntry>) -> Self {
        Self {
            entries: Mutex::new(entries),
        }
    }

    /// Returns a copy of the entry for `key`, if present.
    ///
    /// The copy is detached from the store, so later increments never change
    /// what the caller is holding.
    pub async fn read(&self, key: &str) -> Option<LexiconEntry> {
        let entries = self.entries.lock().await;
        entries.get(key).cloned()
    }

    /// Adds one hit to `key` and returns the new count.
    ///
    /// # Errors
    /// * `LexiconError::KeyNotFound` if `key` is not in the table. Callers only
    ///   increment keys they have just read successfully, so this signals a bug.
    pub async fn increment_hits(&self, key: &str) -> Result<u64> {
        let mut entries = self.entries.lock().await;
        let entry = entries
            .get_mut(key)
            .ok_or_else(|| LexiconError::KeyNotFound(key.to_string()))?;

        entry.hit_count += 1;
        Ok(entry.hit_count)
    }

    /// Snapshot of every key, in arbitrary order.
    pub async fn keys(&self) -> Vec<String> {
        let entries = self.entries.lock().await;
        entries.keys().cloned().collect()
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    /// Sum of all hit counters.
    pub async fn total_hits(&self) -> u64 {
        let entries = self.entries.lock().await;
        entries.values().map(|entry| entry.hit_count).sum()
    }

    /// The `limit` most looked-up words with at least one hit, highest first.
    /// Ties are broken alphabetically so the output is stable.
    pub async fn top_hits(&self, limit: usize) -> Vec<(String, u64)> {
        let mut hits: Vec<(String, u64)> = {
            let entries = self.entries.lock().await;
            entries
                .iter()
                .filter(|(_, entry)| entry.hit_count > 0)
                .map(|(word, entry)| (word.clone(), entry.hit_count))
                .collect()
        };

        hits.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        hits.truncate(limit);
        hits
    }
}
