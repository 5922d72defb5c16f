//! Lookup Module Tests
//!
//! ## Test Scopes
//! - **Normalizer**: Whitespace removal and lowercasing, including Swedish letters.
//! - **HTML**: Escaping of echoed input.
//! - **Lookup**: Message selection for en/ett/ambiguous/unknown words and hit counting.

#[cfg(test)]
mod tests {
    use crate::hits::recorder::HitRecorder;
    use crate::lexicon::loader::build_store;
    use crate::lexicon::store::LexiconStore;
    use crate::lookup::engine::Lookup;
    use crate::lookup::html::escape_html;
    use crate::lookup::normalizer::normalize;
    use std::sync::Arc;
    use std::time::Duration;

    fn lookup() -> Lookup {
        let en = ["stol", "bok", "penna", "öl"].map(String::from);
        let ett = ["bord", "äpple", "öl"].map(String::from);
        let store = Arc::new(build_store(en, ett).unwrap());
        let (hits, _writer) = HitRecorder::start(store.clone(), 1024);
        Lookup::new(store, hits)
    }

    /// Polls until `word` reaches `expected` hits or the deadline passes.
    async fn wait_for_hits(store: &LexiconStore, word: &str, expected: u64) -> u64 {
        let mut count = 0;
        for _ in 0..200 {
            count = store.read(word).await.map(|e| e.hit_count).unwrap_or(0);
            if count >= expected {
                break;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        count
    }

    // ============================================================
    // NORMALIZER TESTS
    // ============================================================

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("STOL"), "stol");
        assert_eq!(normalize("Stol"), "stol");
    }

    #[test]
    fn test_normalize_removes_all_whitespace() {
        assert_eq!(normalize(" stol "), "stol");
        assert_eq!(normalize("st ol"), "stol");
        assert_eq!(normalize("\tstol\r\n"), "stol");
    }

    #[test]
    fn test_normalize_swedish_letters() {
        assert_eq!(normalize("ÄPPLE"), "äpple");
        assert_eq!(normalize("Öl"), "öl");
    }

    #[test]
    fn test_normalize_blank() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("   \t "), "");
    }

    // ============================================================
    // HTML TESTS
    // ============================================================

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("stol"), "stol");
        assert_eq!(
            escape_html(r#"<a href="x">'&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&#39;&amp;&#39;&lt;/a&gt;"
        );
    }

    // ============================================================
    // LOOKUP TESTS
    // ============================================================

    #[tokio::test]
    async fn test_lookup_end_to_end_examples() {
        let lookup = lookup();

        assert_eq!(lookup.lookup("stol").await, "En stol\n");
        assert_eq!(lookup.lookup("bord").await, "Ett bord\n");
        assert!(lookup.lookup("öl").await.contains("beroende på kontext"));
        assert_eq!(lookup.lookup("äpple").await, "Ett äpple\n");
    }

    #[tokio::test]
    async fn test_lookup_ambiguous_mentions_word_without_single_gender() {
        let lookup = lookup();
        let message = lookup.lookup("öl").await;

        assert!(message.contains("öl"));
        assert!(message.starts_with("En eller ett"));
    }

    #[tokio::test]
    async fn test_lookup_is_case_and_whitespace_insensitive() {
        let lookup = lookup();
        let expected = lookup.lookup("stol").await;

        for query in ["Stol", " stol ", "STOL", "s t o l", "stoL\n"] {
            assert_eq!(lookup.lookup(query).await, expected, "query {:?}", query);
        }
    }

    #[tokio::test]
    async fn test_lookup_empty_input() {
        let lookup = lookup();

        assert_eq!(lookup.lookup("").await, "");
        assert_eq!(lookup.lookup("   ").await, "");
    }

    #[tokio::test]
    async fn test_lookup_miss_echoes_original_input() {
        let lookup = lookup();
        let message = lookup.lookup(" Okänd ").await;

        assert!(message.contains("Kunde inte hitta"));
        assert!(message.contains("' Okänd '"), "got {:?}", message);
    }

    #[tokio::test]
    async fn test_lookup_miss_does_not_touch_store() {
        let lookup = lookup();
        let keys_before = lookup.store().len().await;

        lookup.lookup("okänd").await;
        tokio::time::sleep(Duration::from_millis(20)).await;

        assert_eq!(lookup.store().len().await, keys_before);
        assert_eq!(lookup.store().total_hits().await, 0);
        assert!(lookup.store().read("okänd").await.is_none());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_lookup_counts_hits() {
        let lookup = lookup();

        for _ in 0..10 {
            lookup.lookup("Bok").await;
        }

        assert_eq!(wait_for_hits(lookup.store(), "bok", 10).await, 10);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_lookups_keep_counts_per_word() {
        let lookup = lookup();
        let words = ["stol", "bord", "öl", "penna"];

        let mut handles = Vec::new();
        for i in 0..200 {
            let lookup = lookup.clone();
            let word = words[i % words.len()];
            handles.push(tokio::spawn(async move { lookup.lookup(word).await }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        for word in words {
            assert_eq!(wait_for_hits(lookup.store(), word, 50).await, 50, "{}", word);
        }
    }
}
