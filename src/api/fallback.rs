//! Degrading wrapper around a word service
//!
//! Every call succeeds:
//! - no target word → the configured fallback word
//! - validation failure → the guess is assumed valid
//! - scoring failure → local evaluation

use super::WordService;
use crate::game::evaluate::{evaluate, normalize_word, Evaluation, LetterStatus, WORD_LEN};

/// Wraps a [`WordService`] so the game never stalls on service errors
pub struct FallbackWordService<S> {
    inner: S,
    fallback_word: String,
}

impl<S: WordService> FallbackWordService<S> {
    pub fn new(inner: S, fallback_word: impl Into<String>) -> Self {
        FallbackWordService {
            inner,
            fallback_word: fallback_word.into().to_uppercase(),
        }
    }

    #[cfg(test)]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// New target word, uppercase
    pub fn word(&self) -> String {
        match self.inner.fetch_word() {
            Ok(word) if normalize_word(&word).is_ok() => {
                let word = word.to_uppercase();
                tracing::info!(target_word = %word, "Fetched target word");
                word
            }
            Ok(word) => {
                tracing::warn!(word = %word, fallback = %self.fallback_word, "Unusable target word, using fallback");
                self.fallback_word.clone()
            }
            Err(e) => {
                tracing::warn!(error = %e, fallback = %self.fallback_word, "Error fetching word, using fallback");
                self.fallback_word.clone()
            }
        }
    }

    /// Dictionary check; unreachable service means valid
    pub fn is_valid(&self, word: &str) -> bool {
        match self.inner.validate(word) {
            Ok(valid) => {
                tracing::debug!(word, valid, "Validated word");
                valid
            }
            Err(e) => {
                tracing::warn!(error = %e, word, "Error validating word, assuming valid");
                true
            }
        }
    }

    /// Score a guess, falling back to local evaluation
    pub fn score(&self, guess: &str, target: &str) -> Evaluation {
        match self.inner.check(guess, target) {
            Ok(evaluation) => evaluation,
            Err(e) => {
                tracing::warn!(error = %e, guess, "Error checking guess, evaluating locally");
                // Game only submits 5-letter words against a normalized target
                evaluate(guess, target).unwrap_or([LetterStatus::Absent; WORD_LEN])
            }
        }
    }
}
