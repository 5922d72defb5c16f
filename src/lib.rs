//! En eller ett
//!
//! Tells you whether a Swedish noun takes "en" or "ett", over HTTP.
//! This library crate holds everything the binary (`main.rs`) wires together.
//!
//! ## Architecture Modules
//! - **`lexicon`**: The word table. Loaded once from two word lists, then shared
//!   behind a single lock; only hit counters change afterwards.
//! - **`lookup`**: Normalizes raw queries, resolves them against the lexicon and
//!   formats the answer.
//! - **`hits`**: Best-effort hit counting through a bounded single-writer queue,
//!   plus a periodic statistics log.
//! - **`quiz`**: Random word selection and guess checking.
//! - **`web`**: Axum routes, user-agent sniffing and static assets.
//! - **`config`**: Command-line and environment configuration.

pub mod config;
pub mod hits;
pub mod lexicon;
pub mod lookup;
pub mod quiz;
pub mod web;
