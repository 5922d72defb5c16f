//! Hit Counting Module
//!
//! Best-effort telemetry on how often each word is looked up.
//!
//! ## Submodules
//! - **`recorder`**: Bounded queue plus single writer task that applies hits to the store.
//! - **`reporter`**: Background task that periodically logs hit statistics.

pub mod recorder;
pub mod reporter;

#[cfg(test)]
mod tests;
