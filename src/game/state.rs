//! Game state tracking
//!
//! Maintains:
//! - Target word and the six guess rows
//! - The guess being typed on the current row
//! - Win/loss status
//! - Transient status message and instructions toggle

use super::evaluate::{Evaluation, WORD_LEN};
use crate::api::{FallbackWordService, WordService};
use std::time::{Duration, Instant};

/// Number of guesses allowed
pub const MAX_ATTEMPTS: usize = 6;

/// How long a status message stays on screen
pub const MESSAGE_TTL: Duration = Duration::from_secs(2);

pub const MSG_INCOMPLETE: &str = "Please enter a 5-letter word";
pub const MSG_NOT_A_WORD: &str = "Word not found";

/// Game outcome
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

/// Keys the game understands
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameKey {
    Letter(char),
    Enter,
    Backspace,
}

/// What a keystroke asks the caller to do next
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Nothing changed (game over, full row, non-letter)
    Ignored,
    /// Current guess edited
    Edited,
    /// Enter pressed; caller should run [`Game::submit`]
    Submit,
}

/// Result of submitting the current guess
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Fewer than five letters typed
    Incomplete,
    /// Word rejected by the dictionary
    NotAWord,
    /// Guess recorded in the given row
    Scored { row: usize, evaluation: Evaluation },
    /// Submission while the game is over
    Ignored,
}

/// Complete game state
#[derive(Clone, Debug)]
pub struct Game {
    target: String,
    guesses: [String; MAX_ATTEMPTS],
    evaluations: [Option<Evaluation>; MAX_ATTEMPTS],
    current_guess: String,
    current_row: usize,
    status: GameStatus,
    message: Option<(String, Instant)>,
    show_instructions: bool,
}

impl Game {
    /// Start a game for `target` (stored uppercase)
    pub fn new(target: &str) -> Self {
        Game {
            target: target.to_uppercase(),
            guesses: Default::default(),
            evaluations: [None; MAX_ATTEMPTS],
            current_guess: String::new(),
            current_row: 0,
            status: GameStatus::Playing,
            message: None,
            show_instructions: false,
        }
    }

    /// Play again with a new target
    pub fn reset(&mut self, target: &str) {
        let show_instructions = self.show_instructions;
        *self = Game::new(target);
        self.show_instructions = show_instructions;
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn guesses(&self) -> &[String; MAX_ATTEMPTS] {
        &self.guesses
    }

    pub fn evaluations(&self) -> &[Option<Evaluation>; MAX_ATTEMPTS] {
        &self.evaluations
    }

    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    pub fn current_row(&self) -> usize {
        self.current_row
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    /// Rows submitted so far
    pub fn attempts(&self) -> usize {
        self.evaluations.iter().filter(|e| e.is_some()).count()
    }

    /// Apply a keystroke
    pub fn handle_key(&mut self, key: GameKey) -> KeyOutcome {
        if self.is_over() {
            return KeyOutcome::Ignored;
        }

        match key {
            GameKey::Enter => KeyOutcome::Submit,
            GameKey::Backspace => {
                if self.current_guess.pop().is_some() {
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Ignored
                }
            }
            GameKey::Letter(c) => {
                if c.is_ascii_alphabetic() && self.current_guess.len() < WORD_LEN {
                    self.current_guess.push(c.to_ascii_uppercase());
                    KeyOutcome::Edited
                } else {
                    KeyOutcome::Ignored
                }
            }
        }
    }

    /// Validate, score and record the current guess
    pub fn submit<S: WordService>(&mut self, service: &FallbackWordService<S>) -> SubmitOutcome {
        if self.is_over() {
            return SubmitOutcome::Ignored;
        }

        if self.current_guess.len() != WORD_LEN {
            self.display_message(MSG_INCOMPLETE);
            return SubmitOutcome::Incomplete;
        }

        if !service.is_valid(&self.current_guess) {
            self.display_message(MSG_NOT_A_WORD);
            return SubmitOutcome::NotAWord;
        }

        let guess = std::mem::take(&mut self.current_guess);
        let evaluation = service.score(&guess, &self.target);
        let row = self.current_row;

        let won = guess == self.target;
        self.guesses[row] = guess;
        self.evaluations[row] = Some(evaluation);

        if won {
            self.status = GameStatus::Won;
        } else if row == MAX_ATTEMPTS - 1 {
            self.status = GameStatus::Lost;
        } else {
            self.current_row += 1;
        }

        if self.is_over() {
            tracing::info!(status = ?self.status, attempts = self.attempts(), "Game over");
        }

        SubmitOutcome::Scored { row, evaluation }
    }

    /// Show `msg` for [`MESSAGE_TTL`]
    pub fn display_message(&mut self, msg: &str) {
        self.message = Some((msg.to_string(), Instant::now() + MESSAGE_TTL));
    }

    /// Current message, if it has not expired
    pub fn message(&self) -> Option<&str> {
        self.message_at(Instant::now())
    }

    fn message_at(&self, now: Instant) -> Option<&str> {
        match &self.message {
            Some((msg, expires)) if now < *expires => Some(msg.as_str()),
            _ => None,
        }
    }

    /// Drop an expired message; true if something was cleared
    pub fn expire_message(&mut self) -> bool {
        let expired = matches!(&self.message, Some((_, expires)) if Instant::now() >= *expires);
        if expired {
            self.message = None;
        }
        expired
    }

    pub fn show_instructions(&self) -> bool {
        self.show_instructions
    }

    pub fn toggle_instructions(&mut self) {
        self.show_instructions = !self.show_instructions;
    }
}
