//! Core game logic: board representation, player types, and the
//! caller-owned game state machine with immutable transitions.

mod board;
mod player;
mod state;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState, ScoreReport};
