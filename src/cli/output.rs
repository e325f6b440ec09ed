//! Output formatting and progress bars for the CLI

use indicatif::{ProgressBar, ProgressStyle};

use crate::board::Board;

/// Render the board as a 3x3 grid, blank cells shown as spaces
pub fn render_board(board: &Board) -> String {
    format!("{board}")
}

/// Create a progress bar for repeated simulations
pub fn simulation_progress(total_games: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_games);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} games ({msg})")
            .expect("Invalid progress bar template")
            .progress_chars("=>-"),
    );
    pb
}

/// Print a section header
pub fn print_section(title: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{title}");
    println!("{}", "=".repeat(40));
}

/// Print a key-value pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:14} {}", format!("{key}:"), value);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_board_grid_shape() {
        let board = Board::from_string("XX.OO....").unwrap();
        assert_eq!(render_board(&board), "XX \nOO \n   ");
    }

    #[test]
    fn test_render_empty_board_is_blank() {
        let rendered = render_board(&Board::new());
        assert_eq!(rendered, "   \n   \n   ");
    }
}
