//! Board state representation and basic operations

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines;

/// A cell on the tic-tac-toe board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game
///
/// X always moves first and is the maximizing side of the search; O is the
/// minimizing side. The player to move is not part of [`Board`] itself; it
/// is threaded through every operation that needs it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// Result of scanning the board for a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
    InProgress,
}

impl Outcome {
    /// Whether the game loop should stop
    pub fn is_over(self) -> bool {
        self != Outcome::InProgress
    }

    /// Human-readable result line
    pub fn message(self) -> &'static str {
        match self {
            Outcome::Win(Player::X) => "X wins!",
            Outcome::Win(Player::O) => "O wins!",
            Outcome::Draw => "It's a draw!",
            Outcome::InProgress => "Game isn't over yet!",
        }
    }
}

/// The 3x3 grid in row-major order
///
/// Boards are immutable value objects: every transition allocates a fresh
/// copy with one more mark. The type is `Copy` since it is only 9 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 9 cell characters; whitespace is filtered
    /// out. `.` and `_` are empty, `x`/`X` and `o`/`O`/`0` are marks.
    ///
    /// # Errors
    ///
    /// Returns error if anything other than exactly 9 non-whitespace
    /// characters remain or any character is not a valid cell
    /// representation.
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        Ok(Board { cells })
    }

    /// Get cell at position (0-8)
    pub fn get(&self, pos: usize) -> Cell {
        self.cells[pos]
    }

    /// Check if a position is empty
    pub fn is_free(&self, pos: usize) -> bool {
        self.cells[pos] == Cell::Empty
    }

    /// Indices of all empty cells, in ascending order
    pub fn free_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| i)
            .collect()
    }

    /// Count the number of occupied cells on the board
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c != Cell::Empty).count()
    }

    /// Copy of this board with `turn`'s mark placed at `pos`.
    ///
    /// Callers must pass a free cell; the bot paths only consult
    /// [`free_cells`](Self::free_cells), and the human path validates first.
    #[must_use = "place returns a new board; the original is unchanged"]
    pub fn place(&self, pos: usize, turn: Player) -> Board {
        debug_assert!(self.is_free(pos), "cell {pos} is already occupied");
        let mut next = *self;
        next.cells[pos] = turn.to_cell();
        next
    }

    /// One successor per free cell, in ascending index order.
    ///
    /// The ordering is a deterministic tie-break for move selection: when
    /// several successors share the best search score, the lowest cell
    /// index wins.
    pub fn successors(&self, turn: Player) -> Vec<Board> {
        self.free_cells()
            .into_iter()
            .map(|pos| self.place(pos, turn))
            .collect()
    }

    /// Scan for a finished game.
    ///
    /// The six axis lines are checked in declaration order, then the two
    /// diagonals; the first fully-uniform non-empty line decides the
    /// winner. With no won line and no free cells the game is a draw.
    pub fn winner(&self) -> Outcome {
        for line in lines::all_lines() {
            let mark = self.cells[line[0]];
            if mark != Cell::Empty && self.cells[line[1]] == mark && self.cells[line[2]] == mark {
                if let Some(player) = mark.to_player() {
                    return Outcome::Win(player);
                }
            }
        }

        if self.free_cells().is_empty() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }

    /// Heuristic static evaluation from `perspective`'s point of view
    pub fn score(&self, perspective: Player) -> i32 {
        crate::heuristic::evaluate(self, perspective)
    }

    /// Find the position where two board states differ (for inferring moves)
    ///
    /// Returns the first position where the cells differ, or None if identical.
    pub fn changed_cell(&self, other: &Board) -> Option<usize> {
        self.cells
            .iter()
            .zip(other.cells.iter())
            .position(|(a, b)| a != b)
    }

    /// Compact 9-character string representation, `.` for empty cells
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            let glyph = match cell {
                Cell::Empty => ' ',
                mark => mark.to_char(),
            };
            write!(f, "{glyph}")?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board() {
        let board = Board::new();
        for i in 0..9 {
            assert_eq!(board.cells[i], Cell::Empty);
        }
        assert_eq!(board.free_cells().len(), 9);
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_free_cells_plus_occupied_is_nine() {
        let mut board = Board::new();
        let mut turn = Player::X;
        for pos in [4, 0, 8, 2, 6] {
            board = board.place(pos, turn);
            turn = turn.opponent();
            assert_eq!(board.free_cells().len() + board.occupied_count(), 9);
        }
    }

    #[test]
    fn test_place_is_copy_on_write() {
        let board = Board::new();
        let next = board.place(4, Player::X);

        assert_eq!(board.cells[4], Cell::Empty);
        assert_eq!(next.cells[4], Cell::X);
        assert_eq!(next.occupied_count(), 1);
    }

    #[test]
    fn test_successors_ascending_one_mark_each() {
        let board = Board::from_string("X...O....").unwrap();
        let children = board.successors(Player::X);

        assert_eq!(children.len(), board.free_cells().len());
        for (child, pos) in children.iter().zip(board.free_cells()) {
            assert_eq!(child.get(pos), Cell::X);
            assert_eq!(child.occupied_count(), board.occupied_count() + 1);
            // all other cells identical to the parent
            for i in 0..9 {
                if i != pos {
                    assert_eq!(child.get(i), board.get(i));
                }
            }
        }
    }

    #[test]
    fn test_winner_rows_columns_diagonals() {
        assert_eq!(
            Board::from_string("XXX......").unwrap().winner(),
            Outcome::Win(Player::X)
        );
        assert_eq!(
            Board::from_string("O..O..O..").unwrap().winner(),
            Outcome::Win(Player::O)
        );
        assert_eq!(
            Board::from_string("X...X...X").unwrap().winner(),
            Outcome::Win(Player::X)
        );
        assert_eq!(
            Board::from_string("..O.O.O..").unwrap().winner(),
            Outcome::Win(Player::O)
        );
    }

    #[test]
    fn test_winner_draw_and_in_progress() {
        // full board, no line
        assert_eq!(
            Board::from_string("XXOOOXXXO").unwrap().winner(),
            Outcome::Draw
        );
        assert_eq!(
            Board::from_string("XX.OO....").unwrap().winner(),
            Outcome::InProgress
        );
        assert_eq!(Board::new().winner(), Outcome::InProgress);
    }

    #[test]
    fn test_outcome_messages() {
        assert_eq!(Outcome::Win(Player::X).message(), "X wins!");
        assert_eq!(Outcome::Win(Player::O).message(), "O wins!");
        assert_eq!(Outcome::Draw.message(), "It's a draw!");
        assert_eq!(Outcome::InProgress.message(), "Game isn't over yet!");
    }

    #[test]
    fn test_from_string() {
        let board = Board::from_string("XOX......").unwrap();
        assert_eq!(board.cells[0], Cell::X);
        assert_eq!(board.cells[1], Cell::O);
        assert_eq!(board.cells[2], Cell::X);

        assert!(Board::from_string("XO").is_err());
        assert!(Board::from_string("XOZ......").is_err());
    }

    #[test]
    fn test_from_string_rejects_trailing_characters() {
        // a tenth cell character is an error, not silently dropped
        let err = Board::from_string("XXOOOXXXOgarbage").unwrap_err();
        assert!(matches!(
            err,
            crate::Error::InvalidBoardLength {
                expected: 9,
                got: 16,
                ..
            }
        ));
        assert!(Board::from_string("X........X").is_err());

        // trailing whitespace is still fine
        assert!(Board::from_string("XXOOOXXXO\n").is_ok());
    }

    #[test]
    fn test_from_string_accepts_lowercase_and_whitespace() {
        let board = Board::from_string("xo.\n.x.\n..o").unwrap();
        assert_eq!(board.cells[0], Cell::X);
        assert_eq!(board.cells[1], Cell::O);
        assert_eq!(board.cells[4], Cell::X);
        assert_eq!(board.cells[8], Cell::O);
    }

    #[test]
    fn test_encode_roundtrip() {
        let board = Board::from_string("XO..X...O").unwrap();
        assert_eq!(board.encode(), "XO..X...O");
        assert_eq!(Board::from_string(&board.encode()).unwrap(), board);
    }

    #[test]
    fn test_changed_cell() {
        let board = Board::new();
        let next = board.place(7, Player::O);
        assert_eq!(board.changed_cell(&next), Some(7));
        assert_eq!(board.changed_cell(&board), None);
    }

    #[test]
    fn test_display_blank_glyph_for_empty() {
        let board = Board::from_string("XOX.O.X..").unwrap();
        let display = format!("{board}");
        assert_eq!(display, "XOX\n O \nX  ");
    }
}
