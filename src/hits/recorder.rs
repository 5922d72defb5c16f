//! Hit Recorder
//!
//! Lookups report successful hits here instead of touching the store
//! themselves. Hits travel over a bounded channel to a single writer task that
//! applies them to the store one at a time.
//!
//! ## Guarantees
//! - `record` never awaits, so a response is never held up by counting.
//! - At most `capacity` hits are in flight. Anything beyond that is dropped
//!   and logged; counts are telemetry, not a ledger.
//! - A failed increment is logged and skipped; the writer keeps draining.

use crate::lexicon::store::LexiconStore;

use std::sync::Arc;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio::task::JoinHandle;

pub struct HitRecorder {
    sender: mpsc::Sender<String>,
}

impl HitRecorder {
    /// Spawns the writer task and returns the handle used to feed it.
    ///
    /// The writer stops once every `HitRecorder` clone holding the sender has
    /// been dropped and the queue is empty.
    pub fn start(store: Arc<LexiconStore>, capacity: usize) -> (Arc<Self>, JoinHandle<()>) {
        let (sender, receiver) = mpsc::channel(capacity.max(1));

        let writer = tokio::spawn(async move {
            writer_loop(store, receiver).await;
        });

        tracing::info!("Hit writer started (queue capacity {})", capacity.max(1));

        (Arc::new(Self { sender }), writer)
    }

    /// Queues one hit for `key`. Returns whether the hit was accepted.
    pub fn record(&self, key: &str) -> bool {
        match self.sender.try_send(key.to_string()) {
            Ok(()) => true,
            Err(TrySendError::Full(key)) => {
                tracing::warn!("Hit queue full, dropping hit for '{}'", key);
                false
            }
            Err(TrySendError::Closed(key)) => {
                tracing::debug!("Hit writer stopped, dropping hit for '{}'", key);
                false
            }
        }
    }
}

async fn writer_loop(store: Arc<LexiconStore>, mut receiver: mpsc::Receiver<String>) {
    while let Some(key) = receiver.recv().await {
        match store.increment_hits(&key).await {
            Ok(count) => {
                tracing::trace!("'{}' now has {} hits", key, count);
            }
            Err(e) => {
                tracing::error!("Failed to record hit: {}", e);
            }
        }
    }

    tracing::info!("Hit writer stopped");
}
