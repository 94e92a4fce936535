//! Virtual keyboard: layout and per-letter color feedback

use super::evaluate::{Evaluation, LetterStatus};
use rustc_hash::FxHashMap;

/// A key on the on-screen keyboard
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    Letter(char),
    Enter,
    Backspace,
}

impl Key {
    pub fn label(&self) -> String {
        match self {
            Key::Letter(c) => c.to_string(),
            Key::Enter => "ENTER".to_string(),
            Key::Backspace => "←".to_string(),
        }
    }

    pub fn is_wide(&self) -> bool {
        !matches!(self, Key::Letter(_))
    }
}

const ROW_1: &str = "QWERTYUIOP";
const ROW_2: &str = "ASDFGHJKL";
const ROW_3: &str = "ZXCVBNM";

/// QWERTY rows with ENTER and BACKSPACE flanking the bottom row
pub fn layout() -> Vec<Vec<Key>> {
    let letters = |row: &str| row.chars().map(Key::Letter).collect::<Vec<_>>();

    let mut bottom = vec![Key::Enter];
    bottom.extend(letters(ROW_3));
    bottom.push(Key::Backspace);

    vec![letters(ROW_1), letters(ROW_2), bottom]
}

/// Best status seen for each letter across submitted guesses
#[derive(Clone, Debug, Default)]
pub struct KeyboardState {
    statuses: FxHashMap<char, LetterStatus>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold every submitted row; rows without an evaluation are skipped
    pub fn from_rows(guesses: &[String], evaluations: &[Option<Evaluation>]) -> Self {
        let mut state = Self::new();
        for (guess, evaluation) in guesses.iter().zip(evaluations) {
            if let Some(evaluation) = evaluation {
                state.record(guess, evaluation);
            }
        }
        state
    }

    /// Merge one guess; a letter's status never downgrades
    pub fn record(&mut self, guess: &str, evaluation: &Evaluation) {
        for (letter, &status) in guess.chars().zip(evaluation.iter()) {
            let letter = letter.to_ascii_uppercase();
            self.statuses
                .entry(letter)
                .and_modify(|current| {
                    if status.rank() > current.rank() {
                        *current = status;
                    }
                })
                .or_insert(status);
        }
    }

    pub fn status(&self, key: &Key) -> Option<LetterStatus> {
        match key {
            Key::Letter(c) => self.statuses.get(&c.to_ascii_uppercase()).copied(),
            _ => None,
        }
    }
}
