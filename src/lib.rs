//! Tic-tac-toe bot built on depth-limited minimax with alpha-beta pruning
//!
//! This crate provides:
//! - Board representation with line-based win detection
//! - A weighted-line heuristic for static evaluation
//! - Depth-limited alpha-beta search plus random and manual move sources
//! - A CLI driver for bot-vs-bot, bot-vs-random, and bot-vs-human play

pub mod board;
pub mod cli;
pub mod error;
pub mod game;
pub mod heuristic;
pub mod lines;
pub mod search;

pub use board::{Board, Cell, Outcome, Player};
pub use error::{Error, Result};
pub use game::{GameRecord, MatchStats, Move};
pub use search::{
    DEFAULT_DEPTH, SCORE_WINDOW, SearchOutcome, best_move, manual_move, random_move, search,
};
