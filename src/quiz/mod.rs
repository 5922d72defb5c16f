//! Quiz Module
//!
//! A small game: the client fetches a random noun, guesses its article, and
//! gets back a checkmark or a cross. The quiz reads the lexicon directly and
//! does not count hits.

pub mod engine;
