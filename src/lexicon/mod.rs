//! Lexicon Module
//!
//! The word-classification table at the heart of the service.
//!
//! ## Overview
//! The lexicon maps every known noun to the article(s) it takes. It is built
//! exactly once from two word lists and then shared by every request handler
//! for the rest of the process lifetime. The key set never changes after
//! construction; only the per-word hit counters move.
//!
//! ## Submodules
//! - **`loader`**: Reads the "en" and "ett" lists and merges them into a table.
//! - **`store`**: The shared, mutex-guarded table with read and hit-count operations.
//! - **`types`**: `LexiconEntry`, `Gender` and `LexiconError`.

pub mod loader;
pub mod store;
pub mod types;
