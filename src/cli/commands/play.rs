//! Play command - a human against the minimax bot

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use crate::{
    board::{Board, Player},
    cli::output,
    search,
};

#[derive(Parser, Debug)]
#[command(about = "Play against the minimax bot (bot is X and moves first)")]
pub struct PlayArgs {
    /// Search depth in plies (at least 1; depth 0 would never move)
    #[arg(
        long,
        short = 'd',
        default_value_t = search::DEFAULT_DEPTH,
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    pub depth: u32,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Note: Minimax bot is X");

    let mut state = Board::new();
    let mut turn = Player::X;

    while !state.winner().is_over() {
        let next = match turn {
            Player::X => {
                search::search(
                    &state,
                    turn,
                    args.depth,
                    -search::SCORE_WINDOW,
                    search::SCORE_WINDOW,
                )
                .state
            }
            Player::O => prompt_move(&state, turn, &mut lines)?,
        };
        state = next;
        println!("{}\n", output::render_board(&state));
        turn = turn.opponent();
    }

    println!("Result: {}", state.winner().message());
    Ok(())
}

/// Re-prompt until the human names a free tile.
///
/// Malformed input and occupied tiles are advisory: the error is printed
/// and the current state is kept for the next attempt.
fn prompt_move<B: BufRead>(
    state: &Board,
    turn: Player,
    lines: &mut io::Lines<B>,
) -> Result<Board> {
    loop {
        print!("Enter tile to place on (0-8): ");
        io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => anyhow::bail!("stdin closed before the game finished"),
        };

        match search::manual_move(state, turn, &line) {
            Ok(next) => return Ok(next),
            Err(err) => println!("{err}"),
        }
    }
}
