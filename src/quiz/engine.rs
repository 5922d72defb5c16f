use crate::lexicon::store::LexiconStore;
use crate::lexicon::types::{Gender, LexiconError, Result};
use crate::lookup::html::escape_html;

use rand::seq::SliceRandom;
use std::sync::Arc;

const CORRECT: &str = "&#9989;";
const WRONG: &str = "&#10060;";

/// The "en or ett?" guessing game.
#[derive(Clone)]
pub struct Quiz {
    store: Arc<LexiconStore>,
}

impl Quiz {
    pub fn new(store: Arc<LexiconStore>) -> Self {
        Self { store }
    }

    /// Picks one word uniformly at random from the whole lexicon.
    pub async fn random_word(&self) -> Result<String> {
        let words = self.store.keys().await;
        let word = {
            let mut rng = rand::thread_rng();
            words.choose(&mut rng).cloned()
        };
        word.ok_or(LexiconError::Empty)
    }

    /// Whether `guess` is right for `noun`.
    ///
    /// Only the `en` flag is consulted, so guessing "ett" for a word that
    /// takes either article counts as wrong.
    ///
    /// # Errors
    /// * `LexiconError::KeyNotFound` if `noun` is not a lexicon key. Nouns come
    ///   from [`Quiz::random_word`], so this is a fault, not a user mistake.
    pub async fn is_correct(&self, guess: Gender, noun: &str) -> Result<bool> {
        let entry = self
            .store
            .read(noun)
            .await
            .ok_or_else(|| LexiconError::KeyNotFound(noun.to_string()))?;

        Ok((guess == Gender::En) == entry.has_en)
    }

    /// Scores `guess` and renders the HTML fragment shown in the quiz log,
    /// e.g. `&#9989; en stol<br>`.
    pub async fn check_guess(&self, guess: Gender, noun: &str) -> Result<String> {
        let glyph = if self.is_correct(guess, noun).await? {
            CORRECT
        } else {
            WRONG
        };

        Ok(format!("{} {} {}<br>", glyph, guess, escape_html(noun)))
    }
}
