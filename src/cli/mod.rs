//! Command-line interface for the tic-tac-toe bot

pub mod commands;
pub mod output;
