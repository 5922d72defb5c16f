use crate::lexicon::store::LexiconStore;

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

const TOP_WORDS: usize = 5;

/// Periodically logs lexicon size, total hits and the most looked-up words.
pub fn spawn_stats_reporter(store: Arc<LexiconStore>, every: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        // The first tick fires immediately; skip it so the first report has data.
        interval.tick().await;

        loop {
            interval.tick().await;
            report(&store).await;
        }
    })
}

async fn report(store: &LexiconStore) {
    let words = store.len().await;
    let total = store.total_hits().await;
    tracing::info!("Lexicon stats: {} words, {} hits", words, total);

    for (word, hits) in store.top_hits(TOP_WORDS).await {
        tracing::info!("  - {} ({} hits)", word, hits);
    }
}
