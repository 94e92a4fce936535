//! Word service: remote word selection, validation and scoring
//!
//! # Components
//! - `client.rs`: HTTP client for the word service endpoints
//! - `fallback.rs`: wrapper that never fails, degrading to local behavior
//! - `offline.rs`: network-free service backed by a built-in word list
//! - `error.rs`: error type shared by the services

pub mod client;
pub mod error;
pub mod fallback;
pub mod offline;

pub use client::HttpWordService;
pub use error::ApiError;
pub use fallback::FallbackWordService;
pub use offline::OfflineWordService;

use crate::game::evaluate::Evaluation;

/// Words used when no service can provide one
pub const FALLBACK_WORDS: [&str; 20] = [
    "APPLE", "BEACH", "CHILD", "DANCE", "EARTH", "FLAME", "GHOST", "HEART", "ISSUE", "JUICE",
    "TABLE", "HAPPY", "QUICK", "ROBOT", "WATER", "MOVIE", "SMART", "TRAIN", "MUSIC", "POWER",
];

/// A source of target words, dictionary checks and guess scoring
pub trait WordService {
    /// Pick a new target word
    fn fetch_word(&self) -> Result<String, ApiError>;

    /// Whether `word` is an accepted guess
    fn validate(&self, word: &str) -> Result<bool, ApiError>;

    /// Score `guess` against `target`
    fn check(&self, guess: &str, target: &str) -> Result<Evaluation, ApiError>;
}

impl<S: WordService + ?Sized> WordService for Box<S> {
    fn fetch_word(&self) -> Result<String, ApiError> {
        (**self).fetch_word()
    }

    fn validate(&self, word: &str) -> Result<bool, ApiError> {
        (**self).validate(word)
    }

    fn check(&self, guess: &str, target: &str) -> Result<Evaluation, ApiError> {
        (**self).check(guess, target)
    }
}
