//! Game logic: evaluation, state, and the grid/keyboard views of it
//!
//! # Components
//! - `evaluate.rs`: Guess scoring with duplicate-letter handling
//! - `state.rs`: Game struct driving rows, input and win/loss
//! - `grid.rs`: Tile projection of the six guess rows
//! - `keyboard.rs`: Keyboard layout and per-letter feedback

pub mod evaluate;
pub mod grid;
pub mod keyboard;
pub mod state;

pub use evaluate::LetterStatus;
pub use grid::{Grid, TileState};
pub use state::{Game, GameKey, GameStatus, KeyOutcome, SubmitOutcome};
