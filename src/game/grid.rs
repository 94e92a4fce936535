//! Letter grid projection of the game state

use super::evaluate::{LetterStatus, WORD_LEN};
use super::state::{Game, MAX_ATTEMPTS};

/// How a single tile should be drawn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileState {
    /// Nothing typed
    Empty,
    /// Typed on the current row, not yet submitted
    Tbd,
    /// Part of a submitted guess
    Evaluated(LetterStatus),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub letter: Option<char>,
    pub state: TileState,
}

impl Tile {
    const EMPTY: Tile = Tile {
        letter: None,
        state: TileState::Empty,
    };
}

/// Six rows of five tiles
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    pub rows: [[Tile; WORD_LEN]; MAX_ATTEMPTS],
}

impl Grid {
    pub fn from_game(game: &Game) -> Self {
        let mut rows = [[Tile::EMPTY; WORD_LEN]; MAX_ATTEMPTS];

        for (row, (guess, evaluation)) in game
            .guesses()
            .iter()
            .zip(game.evaluations().iter())
            .enumerate()
        {
            if let Some(evaluation) = evaluation {
                for (col, (letter, status)) in guess.chars().zip(evaluation.iter()).enumerate() {
                    rows[row][col] = Tile {
                        letter: Some(letter),
                        state: TileState::Evaluated(*status),
                    };
                }
            }
        }

        // The winning row stays evaluated; only a live row shows typing
        if !game.is_over() {
            let row = game.current_row();
            for (col, letter) in game.current_guess().chars().take(WORD_LEN).enumerate() {
                rows[row][col] = Tile {
                    letter: Some(letter),
                    state: TileState::Tbd,
                };
            }
        }

        Grid { rows }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{FallbackWordService, OfflineWordService};
    use crate::game::state::GameKey;
    use pretty_assertions::assert_eq;

    fn play(game: &mut Game, word: &str) {
        let service = FallbackWordService::new(OfflineWordService::new(), "REACT");
        for c in word.chars() {
            game.handle_key(GameKey::Letter(c));
        }
        game.submit(&service);
    }

    #[test]
    fn test_empty_grid() {
        let grid = Grid::from_game(&Game::new("REACT"));
        assert!(grid.rows.iter().flatten().all(|t| *t == Tile::EMPTY));
    }

    #[test]
    fn test_current_row_shows_typed_letters() {
        let mut game = Game::new("REACT");
        play(&mut game, "TRACE");
        game.handle_key(GameKey::Letter('R'));
        game.handle_key(GameKey::Letter('E'));

        let grid = Grid::from_game(&game);
        assert_eq!(
            grid.rows[0][0],
            Tile {
                letter: Some('T'),
                state: TileState::Evaluated(LetterStatus::Present)
            }
        );
        assert_eq!(
            grid.rows[1][1],
            Tile {
                letter: Some('E'),
                state: TileState::Tbd
            }
        );
        assert_eq!(grid.rows[1][2], Tile::EMPTY);
        assert_eq!(grid.rows[2][0], Tile::EMPTY);
    }

    #[test]
    fn test_winning_row_stays_evaluated() {
        let mut game = Game::new("REACT");
        play(&mut game, "REACT");

        let grid = Grid::from_game(&game);
        let expected = Tile {
            letter: Some('R'),
            state: TileState::Evaluated(LetterStatus::Correct),
        };
        assert_eq!(grid.rows[0][0], expected);
    }
}
