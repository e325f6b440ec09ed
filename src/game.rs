//! Game transcripts and aggregate match statistics

use serde::{Deserialize, Serialize};

use crate::board::{Board, Outcome, Player};

/// A single placement in a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub position: usize,
    pub player: Player,
}

/// A complete game transcript, suitable for JSON export
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<Move>,
    pub final_board: String,
    pub outcome: Outcome,
}

impl GameRecord {
    pub fn new() -> Self {
        GameRecord {
            moves: Vec::new(),
            final_board: Board::new().encode(),
            outcome: Outcome::InProgress,
        }
    }

    /// Record a transition produced by any move source.
    ///
    /// The played position is inferred by diffing the two boards, so the
    /// record works for the bot paths that return whole states rather than
    /// cell indices.
    pub fn record(&mut self, before: &Board, after: &Board, player: Player) {
        if let Some(position) = before.changed_cell(after) {
            self.moves.push(Move { position, player });
        }
        self.final_board = after.encode();
        self.outcome = after.winner();
    }
}

impl Default for GameRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Aggregate results of repeated play, from the bot's point of view
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct MatchStats {
    pub total_games: usize,
    pub wins: usize,
    pub draws: usize,
    pub losses: usize,
}

impl MatchStats {
    /// Tally one finished game for the side `bot` played
    pub fn record(&mut self, outcome: Outcome, bot: Player) {
        match outcome {
            Outcome::Win(player) if player == bot => self.wins += 1,
            Outcome::Win(_) => self.losses += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => return,
        }
        self.total_games += 1;
    }

    pub fn win_rate(&self) -> f64 {
        self.rate(self.wins)
    }

    pub fn draw_rate(&self) -> f64 {
        self.rate(self.draws)
    }

    pub fn loss_rate(&self) -> f64 {
        self.rate(self.losses)
    }

    fn rate(&self, count: usize) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            count as f64 / self.total_games as f64
        }
    }
}
