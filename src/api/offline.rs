//! Network-free word service backed by the built-in word list

use super::{ApiError, WordService, FALLBACK_WORDS};
use crate::game::evaluate::{evaluate, Evaluation};
use rand::seq::SliceRandom;

/// Picks targets from a fixed list and accepts any 5-letter guess
#[derive(Clone, Debug)]
pub struct OfflineWordService {
    words: Vec<String>,
}

impl OfflineWordService {
    pub fn new() -> Self {
        Self::with_words(FALLBACK_WORDS.iter().map(|w| w.to_string()).collect())
    }

    /// Use a custom word list (words are uppercased)
    pub fn with_words(words: Vec<String>) -> Self {
        OfflineWordService {
            words: words.into_iter().map(|w| w.to_uppercase()).collect(),
        }
    }

    /// Random pick from the list
    pub fn random_word(&self) -> Option<String> {
        self.words.choose(&mut rand::thread_rng()).cloned()
    }
}

impl Default for OfflineWordService {
    fn default() -> Self {
        Self::new()
    }
}

impl WordService for OfflineWordService {
    fn fetch_word(&self) -> Result<String, ApiError> {
        self.random_word()
            .ok_or_else(|| ApiError::Malformed("offline word list is empty".to_string()))
    }

    fn validate(&self, _word: &str) -> Result<bool, ApiError> {
        Ok(true)
    }

    fn check(&self, guess: &str, target: &str) -> Result<Evaluation, ApiError> {
        Ok(evaluate(guess, target)?)
    }
}
