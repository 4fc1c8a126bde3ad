//! # Fourline
//!
//! A connect-four style game engine with a heuristic AI opponent.
//! The engine is pure and stateless: given a board and a column it produces
//! a new board and a verdict; given a board it recommends a move. Turn
//! order, rendering, and score persistence belong to the caller.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, player, session state machine
//! - [`ai`] — Agent trait, heuristic move advisor, random baseline
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
