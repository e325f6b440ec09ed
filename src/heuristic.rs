//! Heuristic static evaluation of board positions
//!
//! Each of the eight winning lines is scored from the counts of the
//! perspective player's marks (`own`) and the opponent's marks (`opp`) in
//! that line. Diagonals count double. Blocking an opponent line outweighs
//! completing an own line, which biases the search toward defense.

use crate::{
    board::{Board, Cell, Player},
    lines,
};

/// Value of a completed line; the same magnitude is used as a penalty
const LINE_WIN: i32 = 100;

/// Evaluate `board` from `perspective`'s point of view.
///
/// Higher is always better for the perspective player. The unsigned line
/// sum is computed from that player's own/opp counts and then negated when
/// the perspective is O, the second mover. Note the resulting function is
/// not antisymmetric between the two perspectives: the (2,0) and (0,2)
/// line weights deliberately differ.
pub fn evaluate(board: &Board, perspective: Player) -> i32 {
    let own_mark = perspective.to_cell();

    let mut total = 0;
    for (line, weight) in lines::weighted_lines() {
        let mut own = 0;
        let mut opp = 0;
        for &idx in line {
            match board.cells[idx] {
                Cell::Empty => {}
                mark if mark == own_mark => own += 1,
                _ => opp += 1,
            }
        }
        total += line_score(own, opp, weight);
    }

    match perspective {
        Player::X => total,
        Player::O => -total,
    }
}

/// Score a single line from the perspective player's counts
fn line_score(own: u32, opp: u32, weight: i32) -> i32 {
    match (own, opp) {
        (3, _) => LINE_WIN,
        (_, 3) => -LINE_WIN,
        (2, 0) => 2 * weight,
        (0, 2) => -3 * weight,
        (1, 2) => 3 * weight,
        (1, 0) => weight,
        _ => 0,
    }
}
