//! CLI Interface: User input and terminal rendering
//!
//! # Components
//! - `input.rs`: Keystroke capture and mapping using crossterm
//! - `display.rs`: Grid, keyboard and modal rendering

pub mod display;
pub mod input;
