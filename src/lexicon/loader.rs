//! Word List Loader
//!
//! Builds the initial lexicon from two newline-delimited word lists, one per
//! article. Runs once at startup; any failure aborts startup and no partial
//! store is ever returned.
//!
//! ## Merge rules
//! 1. Every word of the "en" list becomes an `en` entry. Duplicates overwrite
//!    with an identical value.
//! 2. Every word of the "ett" list becomes an `ett` entry, unless the word is
//!    already present, in which case the entry is replaced by an ambiguous one.
//!
//! Words go through the same normalizer as queries before they become keys, so
//! a capitalised or padded line is still reachable. Lines that normalize to
//! nothing are skipped.

use super::store::LexiconStore;
use super::types::*;
use crate::lookup::normalizer::normalize;

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Opens and scans both lists and returns the finished store.
///
/// # Errors
/// * `LexiconError::Open` / `LexiconError::Read` if either file is unusable.
/// * `LexiconError::Empty` if neither list yields a single word.
pub fn load(en_path: &Path, ett_path: &Path) -> Result<LexiconStore> {
    let en_file = open(en_path)?;
    let ett_file = open(ett_path)?;

    let en_words = read_words(BufReader::new(en_file), en_path)?;
    let ett_words = read_words(BufReader::new(ett_file), ett_path)?;

    tracing::debug!(
        "Read {} en words from {} and {} ett words from {}",
        en_words.len(),
        en_path.display(),
        ett_words.len(),
        ett_path.display()
    );

    build_store(en_words, ett_words)
}

/// Reads one word per line, normalizing each and dropping blank lines.
/// `path` is only used to label errors.
pub fn read_words<R: BufRead>(reader: R, path: &Path) -> Result<Vec<String>> {
    let mut words = Vec::new();

    for line in reader.lines() {
        let line = line.map_err(|source| LexiconError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let word = normalize(&line);
        if !word.is_empty() {
            words.push(word);
        }
    }

    Ok(words)
}

/// Applies the merge rules to two already normalized word sequences.
pub fn build_store<I, J>(en_words: I, ett_words: J) -> Result<LexiconStore>
where
    I: IntoIterator<Item = String>,
    J: IntoIterator<Item = String>,
{
    let mut table: HashMap<String, LexiconEntry> = HashMap::new();

    for word in en_words {
        let entry = LexiconEntry::en(&word);
        table.insert(word, entry);
    }

    for word in ett_words {
        // Only a word already classified as "en" becomes ambiguous; a repeated
        // "ett" line stays "ett".
        let entry = if table.get(&word).is_some_and(|entry| entry.has_en) {
            LexiconEntry::ambiguous(&word)
        } else {
            LexiconEntry::ett(&word)
        };
        table.insert(word, entry);
    }

    if table.is_empty() {
        return Err(LexiconError::Empty);
    }

    Ok(LexiconStore::new(table))
}

fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| LexiconError::Open {
        path: path.to_path_buf(),
        source,
    })
}
