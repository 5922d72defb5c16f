//! Lookup Module
//!
//! Turns a raw query (a URL path segment or a form field) into the message shown
//! to the client.
//!
//! ## Pipeline
//! 1. **Normalize**: strip all whitespace and lowercase.
//! 2. **Resolve**: read the canonical word from the lexicon.
//! 3. **Count**: on a hit, hand the word to the hit recorder without waiting.
//!
//! ## Submodules
//! - **`normalizer`**: The canonicalization shared with the word list loader.
//! - **`engine`**: The `Lookup` service used by the HTTP handlers.
//! - **`html`**: Escaping for words and messages that end up in HTML fragments.

pub mod engine;
pub mod html;
pub mod normalizer;

#[cfg(test)]
mod tests;
