//! Terminal display and UI rendering
//!
//! Features:
//! - Six-row letter grid with colored tiles
//! - On-screen keyboard colored by best known letter status
//! - Transient message line
//! - Instructions panel and game-over modal

use crate::game::keyboard::{self, KeyboardState};
use crate::game::{Game, GameStatus, Grid, LetterStatus, TileState};
use anyhow::Result;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{
    cursor, execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, ClearType},
};
use std::io::{stdout, Stdout, Write};

const GRID_TOP: u16 = 3;
const GRID_LEFT: u16 = 4;
const MESSAGE_ROW: u16 = 10;
const KEYBOARD_TOP: u16 = 12;
const PANEL_TOP: u16 = 16;
const RULE_WIDTH: usize = 44;

/// Tile/key color for a letter status
pub fn status_color(status: LetterStatus) -> Color {
    match status {
        LetterStatus::Correct => Color::DarkGreen,
        LetterStatus::Present => Color::DarkYellow,
        LetterStatus::Absent => Color::DarkGrey,
    }
}

/// Heading and body of the game-over modal
pub fn game_over_text(status: GameStatus, target: &str, attempts: usize) -> (String, String) {
    match status {
        GameStatus::Won => {
            let noun = if attempts == 1 { "attempt" } else { "attempts" };
            (
                "You Won!".to_string(),
                format!("You guessed the word in {} {}!", attempts, noun),
            )
        }
        _ => ("Game Over".to_string(), format!("The word was {}.", target)),
    }
}

/// Terminal display manager
pub struct Display {
    /// Whether we're using alternate screen
    use_alternate_screen: bool,
}

impl Display {
    /// Create display without alternate screen (simpler mode)
    pub fn simple() -> Self {
        Display {
            use_alternate_screen: false,
        }
    }

    /// Take over the terminal with an alternate screen and hidden cursor
    pub fn alternate() -> Result<Self> {
        execute!(stdout(), EnterAlternateScreen, cursor::Hide)?;
        Ok(Display {
            use_alternate_screen: true,
        })
    }

    /// Loading line shown while a target word is fetched
    pub fn show_loading(&self) -> Result<()> {
        let mut out = stdout();
        queue!(
            out,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(GRID_LEFT, GRID_TOP),
            Print("Loading...")
        )?;
        out.flush()?;
        Ok(())
    }

    /// Redraw the whole screen from game state
    pub fn render(&self, game: &Game) -> Result<()> {
        let mut out = stdout();
        queue!(out, terminal::Clear(ClearType::All))?;

        self.draw_header(&mut out)?;
        self.draw_grid(&mut out, &Grid::from_game(game))?;
        self.draw_message(&mut out, game.message())?;

        let keys = KeyboardState::from_rows(game.guesses(), game.evaluations());
        self.draw_keyboard(&mut out, &keys)?;

        if game.is_over() {
            self.draw_game_over(&mut out, game)?;
        } else if game.show_instructions() {
            self.draw_instructions(&mut out)?;
        } else {
            self.draw_help(&mut out)?;
        }

        out.flush()?;
        Ok(())
    }

    fn draw_header(&self, out: &mut Stdout) -> Result<()> {
        queue!(
            out,
            cursor::MoveTo(GRID_LEFT, 0),
            SetAttribute(Attribute::Bold),
            Print("W O R D L E"),
            SetAttribute(Attribute::Reset),
            cursor::MoveTo(0, 1),
            SetForegroundColor(Color::Blue),
            Print("─".repeat(RULE_WIDTH)),
            ResetColor
        )?;
        Ok(())
    }

    fn draw_grid(&self, out: &mut Stdout, grid: &Grid) -> Result<()> {
        for (row_idx, row) in grid.rows.iter().enumerate() {
            queue!(out, cursor::MoveTo(GRID_LEFT, GRID_TOP + row_idx as u16))?;
            for tile in row {
                let letter = tile.letter.unwrap_or(' ');
                match tile.state {
                    TileState::Empty => {
                        queue!(
                            out,
                            SetForegroundColor(Color::DarkGrey),
                            Print("[ ]"),
                            ResetColor
                        )?;
                    }
                    TileState::Tbd => {
                        queue!(
                            out,
                            SetForegroundColor(Color::White),
                            SetAttribute(Attribute::Bold),
                            Print(format!("[{}]", letter)),
                            SetAttribute(Attribute::Reset),
                            ResetColor
                        )?;
                    }
                    TileState::Evaluated(status) => {
                        queue!(
                            out,
                            SetBackgroundColor(status_color(status)),
                            SetForegroundColor(Color::White),
                            SetAttribute(Attribute::Bold),
                            Print(format!(" {} ", letter)),
                            SetAttribute(Attribute::Reset),
                            ResetColor
                        )?;
                    }
                }
                queue!(out, Print(" "))?;
            }
        }
        Ok(())
    }

    fn draw_message(&self, out: &mut Stdout, message: Option<&str>) -> Result<()> {
        if let Some(message) = message {
            queue!(
                out,
                cursor::MoveTo(GRID_LEFT, MESSAGE_ROW),
                SetBackgroundColor(Color::White),
                SetForegroundColor(Color::Black),
                Print(format!(" {} ", message)),
                ResetColor
            )?;
        }
        Ok(())
    }

    fn draw_keyboard(&self, out: &mut Stdout, keys: &KeyboardState) -> Result<()> {
        for (row_idx, row) in keyboard::layout().iter().enumerate() {
            // stagger rows like a physical keyboard
            queue!(
                out,
                cursor::MoveTo(row_idx as u16, KEYBOARD_TOP + row_idx as u16)
            )?;
            for key in row {
                let label = if key.is_wide() {
                    format!(" {} ", key.label())
                } else {
                    key.label()
                };
                match keys.status(key) {
                    Some(status) => queue!(
                        out,
                        SetBackgroundColor(status_color(status)),
                        SetForegroundColor(Color::White),
                        Print(format!(" {} ", label)),
                        ResetColor
                    )?,
                    None => queue!(out, Print(format!(" {} ", label)))?,
                }
                queue!(out, Print(" "))?;
            }
        }
        Ok(())
    }

    fn draw_instructions(&self, out: &mut Stdout) -> Result<()> {
        queue!(
            out,
            cursor::MoveTo(0, PANEL_TOP),
            Print("You have 6 tries to guess the hidden 5-letter word."),
            cursor::MoveTo(0, PANEL_TOP + 1),
            Print("After each guess, the color of the tiles will change:")
        )?;

        let examples = [
            ('E', LetterStatus::Correct, "Letter is in the word and in the correct spot (green)"),
            ('A', LetterStatus::Present, "Letter is in the word but in the wrong spot (yellow)"),
            ('T', LetterStatus::Absent, "Letter is not in the word (grey)"),
        ];
        for (i, (letter, status, text)) in examples.iter().enumerate() {
            queue!(
                out,
                cursor::MoveTo(2, PANEL_TOP + 3 + i as u16),
                SetBackgroundColor(status_color(*status)),
                SetForegroundColor(Color::White),
                Print(format!(" {} ", letter)),
                ResetColor,
                Print(format!("  {}", text))
            )?;
        }
        Ok(())
    }

    fn draw_game_over(&self, out: &mut Stdout, game: &Game) -> Result<()> {
        let (heading, body) = game_over_text(game.status(), game.target(), game.attempts());
        let heading_color = if game.status() == GameStatus::Won {
            Color::Green
        } else {
            Color::Red
        };

        queue!(
            out,
            cursor::MoveTo(0, PANEL_TOP),
            SetForegroundColor(Color::Blue),
            Print("─".repeat(RULE_WIDTH)),
            ResetColor,
            cursor::MoveTo(2, PANEL_TOP + 1),
            SetForegroundColor(heading_color),
            SetAttribute(Attribute::Bold),
            Print(heading),
            SetAttribute(Attribute::Reset),
            ResetColor,
            cursor::MoveTo(2, PANEL_TOP + 2),
            Print(body),
            cursor::MoveTo(2, PANEL_TOP + 4),
            SetForegroundColor(Color::DarkGrey),
            Print("Press ENTER to play again  |  ESC to quit"),
            ResetColor,
            cursor::MoveTo(0, PANEL_TOP + 5),
            SetForegroundColor(Color::Blue),
            Print("─".repeat(RULE_WIDTH)),
            ResetColor
        )?;
        Ok(())
    }

    /// Show help text
    fn draw_help(&self, out: &mut Stdout) -> Result<()> {
        queue!(
            out,
            cursor::MoveTo(0, PANEL_TOP),
            SetForegroundColor(Color::DarkGrey),
            Print("ENTER submit  |  ? instructions  |  ESC quit"),
            ResetColor
        )?;
        Ok(())
    }

    /// Reset terminal state and cleanup
    pub fn shutdown(&self) -> Result<()> {
        let mut out = stdout();

        if self.use_alternate_screen {
            execute!(out, LeaveAlternateScreen, cursor::Show)?;
        }

        terminal::disable_raw_mode()?;
        Ok(())
    }
}

impl Default for Display {
    fn default() -> Self {
        Self::simple()
    }
}

impl Drop for Display {
    fn drop(&mut self) {
        // Best effort cleanup
        let _ = self.shutdown();
    }
}
