//! Hit Counting Tests
//!
//! ## Test Scopes
//! - **Recorder**: Hits reach the store, overflow is dropped, bad keys do not stop the writer.

#[cfg(test)]
mod tests {
    use crate::hits::recorder::HitRecorder;
    use crate::lexicon::loader::build_store;
    use crate::lexicon::store::LexiconStore;
    use std::sync::Arc;

    fn store() -> Arc<LexiconStore> {
        Arc::new(build_store(vec!["stol".to_string()], vec!["bord".to_string()]).unwrap())
    }

    #[tokio::test]
    async fn test_recorded_hits_are_applied_once_drained() {
        let store = store();
        let (recorder, writer) = HitRecorder::start(store.clone(), 16);

        for _ in 0..5 {
            assert!(recorder.record("stol"));
        }
        assert!(recorder.record("bord"));

        // Dropping the last sender lets the writer drain and exit.
        drop(recorder);
        writer.await.unwrap();

        assert_eq!(store.read("stol").await.unwrap().hit_count, 5);
        assert_eq!(store.read("bord").await.unwrap().hit_count, 1);
    }

    #[tokio::test]
    async fn test_full_queue_drops_hits() {
        let store = store();
        // Current-thread runtime: the writer cannot run until this task yields.
        let (recorder, writer) = HitRecorder::start(store.clone(), 1);

        assert!(recorder.record("stol"));
        assert!(!recorder.record("stol"), "second hit should not fit");

        drop(recorder);
        writer.await.unwrap();

        assert_eq!(store.read("stol").await.unwrap().hit_count, 1);
    }

    #[tokio::test]
    async fn test_unknown_key_does_not_stop_writer() {
        let store = store();
        let (recorder, writer) = HitRecorder::start(store.clone(), 16);

        assert!(recorder.record("okänd"));
        assert!(recorder.record("bord"));

        drop(recorder);
        writer.await.unwrap();

        assert_eq!(store.read("bord").await.unwrap().hit_count, 1);
        assert!(store.read("okänd").await.is_none());
    }

    #[tokio::test]
    async fn test_record_after_writer_stopped() {
        let store = store();
        let (recorder, writer) = HitRecorder::start(store.clone(), 4);

        writer.abort();
        let _ = writer.await;

        assert!(!recorder.record("stol"));
        assert_eq!(store.total_hits().await, 0);
    }
}
