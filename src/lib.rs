//! A depth-limited minimax agent for playing the board game 'Connect 4'
//! against a human
//!
//! The agent searches a fixed number of plies ahead with alpha-beta pruning
//! and falls back to a positional weight table once the depth runs out.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_minimax::{config::SearchConfig, game::Game, board::Side};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let mut game = Game::new(SearchConfig::default(), Side::Computer);
//! let (column, _state) = game.play_computer()?;
//!
//! assert_eq!(column, 3);
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod config;

pub mod board;

pub mod terminal;

pub mod heuristic;

pub mod search;

pub mod game;


/// The width of the game board in tiles
pub const WIDTH: usize = 7;

/// The height of the game board in tiles
pub const HEIGHT: usize = 6;

/// The number of tiles on a full board
pub const CAPACITY: usize = WIDTH * HEIGHT;

/// The number of identical marks in a line needed to win
pub const CONNECT: usize = 4;

// a line of four has to fit both across and up the board
const_assert!(CONNECT <= WIDTH && CONNECT <= HEIGHT);
