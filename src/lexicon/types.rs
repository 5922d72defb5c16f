//! Lexicon Data Types
//!
//! The classification record stored per word, the two article genders, and the
//! error kinds raised while building or mutating the lexicon.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// One of the two Swedish indefinite articles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    En,
    Ett,
}

impl Gender {
    /// The article as written in lowercase running text.
    pub fn article(self) -> &'static str {
        match self {
            Gender::En => "en",
            Gender::Ett => "ett",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.article())
    }
}

/// Classification of a single noun.
///
/// At least one of `has_en` / `has_ett` is always set. `message` is rendered
/// once when the entry is built and is what lookups hand back to clients.
/// `hit_count` only ever grows, and only through
/// [`LexiconStore::increment_hits`](super::store::LexiconStore::increment_hits).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexiconEntry {
    pub has_en: bool,
    pub has_ett: bool,
    pub message: String,
    pub hit_count: u64,
}

impl LexiconEntry {
    /// Entry for a word found only in the "en" list.
    pub fn en(word: &str) -> Self {
        Self {
            has_en: true,
            has_ett: false,
            message: format!("En {}\n", word),
            hit_count: 0,
        }
    }

    /// Entry for a word found only in the "ett" list.
    pub fn ett(word: &str) -> Self {
        Self {
            has_en: false,
            has_ett: true,
            message: format!("Ett {}\n", word),
            hit_count: 0,
        }
    }

    /// Entry for a word found in both lists.
    pub fn ambiguous(word: &str) -> Self {
        Self {
            has_en: true,
            has_ett: true,
            message: format!("En eller ett {} beroende på kontext\n", word),
            hit_count: 0,
        }
    }

    pub fn is_ambiguous(&self) -> bool {
        self.has_en && self.has_ett
    }
}

#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("failed to open word list {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to scan word list {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("word lists contain no words")]
    Empty,

    /// A key that a caller had already confirmed present was missing.
    /// This is a bug in the caller, never a user-facing miss.
    #[error("key not found in lexicon: {0}")]
    KeyNotFound(String),
}

pub type Result<T> = std::result::Result<T, LexiconError>;
