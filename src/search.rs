//! Depth-limited minimax search with alpha-beta pruning
//!
//! Also provides the random and manual move sources used by the non-bot
//! game modes.

use std::cmp::Ordering;

use rand::{Rng, prelude::IndexedRandom};

use crate::{
    board::{Board, Player},
    error::{Error, Result},
};

/// Search depth in plies used by the CLI driver
pub const DEFAULT_DEPTH: u32 = 3;

/// Half-width of the initial alpha-beta window; sized to exceed any
/// attainable cumulative heuristic sum
pub const SCORE_WINDOW: i32 = 1000;

/// Result of a search: the chosen successor and its cumulative score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub state: Board,
    pub score: i32,
}

/// Run [`search`] with the default depth and the full window
pub fn best_move(state: &Board, turn: Player) -> SearchOutcome {
    search(state, turn, DEFAULT_DEPTH, -SCORE_WINDOW, SCORE_WINDOW)
}

/// Depth-limited minimax with alpha-beta pruning.
///
/// X maximizes, O minimizes. A node's value is its own static score plus
/// the value of the best reply, accumulated along the search path. This
/// additive scheme (rather than propagating leaf evaluations alone) is the
/// bot's defining behavior and is kept as-is; "fixing" it to canonical
/// minimax would change how the bot plays.
///
/// On a full board or at depth 0 the current state is scored from the
/// mover's perspective and returned unchanged. A cutoff (checked before
/// the bound update) returns the offending successor immediately, carrying
/// its accumulated score. Ties between surviving successors are broken
/// toward the lowest cell index.
pub fn search(
    state: &Board,
    turn: Player,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
) -> SearchOutcome {
    let children = state.successors(turn);
    if children.is_empty() || depth == 0 {
        return SearchOutcome {
            state: *state,
            score: state.score(turn),
        };
    }

    let mut scores = Vec::with_capacity(children.len());
    for child in &children {
        let reply = search(child, turn.opponent(), depth - 1, alpha, beta);
        let cs = child.score(turn) + reply.score;

        let cutoff = match turn {
            Player::X => cs >= beta,
            Player::O => cs <= alpha,
        };
        if cutoff {
            return SearchOutcome {
                state: *child,
                score: cs,
            };
        }

        scores.push(cs);
        match turn {
            Player::X => alpha = alpha.max(cs),
            Player::O => beta = beta.min(cs),
        }
    }

    let best = match turn {
        Player::X => first_extreme(&scores, Ordering::Greater),
        Player::O => first_extreme(&scores, Ordering::Less),
    };
    SearchOutcome {
        state: children[best],
        score: scores[best],
    }
}

/// Index of the extreme score, first match winning ties
fn first_extreme(scores: &[i32], preference: Ordering) -> usize {
    let mut best = 0;
    for (idx, score) in scores.iter().enumerate().skip(1) {
        if score.cmp(&scores[best]) == preference {
            best = idx;
        }
    }
    best
}

/// Successor with a uniformly random free cell filled for `turn`.
///
/// A full board is returned unchanged.
pub fn random_move<R: Rng + ?Sized>(state: &Board, turn: Player, rng: &mut R) -> Board {
    match state.free_cells().choose(rng) {
        Some(&pos) => state.place(pos, turn),
        None => *state,
    }
}

/// Parse a human move and apply it.
///
/// Malformed text and occupied or out-of-range tiles are advisory errors:
/// the caller keeps its current state and re-prompts.
///
/// # Errors
///
/// [`Error::NotAnInteger`] when `raw` does not parse as an integer,
/// [`Error::InvalidTile`] when the integer does not name a free cell.
pub fn manual_move(state: &Board, turn: Player, raw: &str) -> Result<Board> {
    let trimmed = raw.trim();
    let tile: i64 = trimmed.parse().map_err(|_| Error::NotAnInteger {
        input: trimmed.to_string(),
    })?;

    match usize::try_from(tile).ok().filter(|&pos| pos < 9) {
        Some(pos) if state.is_free(pos) => Ok(state.place(pos, turn)),
        _ => Err(Error::InvalidTile { tile }),
    }
}
