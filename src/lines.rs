//! Winning line layout and heuristic weights

/// Row and column lines, scanned before the diagonals
pub const AXIS_LINES: [[usize; 3]; 6] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
];

/// Diagonal lines, weighted double in the heuristic
pub const DIAGONAL_LINES: [[usize; 3]; 2] = [[0, 4, 8], [2, 4, 6]];

/// Heuristic multiplier for rows and columns
pub const AXIS_WEIGHT: i32 = 1;

/// Heuristic multiplier for diagonals
pub const DIAGONAL_WEIGHT: i32 = 2;

/// All eight lines in winner-scan order: axis lines first, then diagonals
pub fn all_lines() -> impl Iterator<Item = &'static [usize; 3]> {
    AXIS_LINES.iter().chain(DIAGONAL_LINES.iter())
}

/// All eight lines paired with their heuristic weight
pub fn weighted_lines() -> impl Iterator<Item = (&'static [usize; 3], i32)> {
    AXIS_LINES
        .iter()
        .map(|line| (line, AXIS_WEIGHT))
        .chain(DIAGONAL_LINES.iter().map(|line| (line, DIAGONAL_WEIGHT)))
}
