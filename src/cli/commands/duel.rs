//! Duel command - two minimax bots play each other

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    board::{Board, Player},
    cli::output,
    game::GameRecord,
    search,
};

#[derive(Parser, Debug)]
#[command(about = "Watch two minimax bots play each other")]
pub struct DuelArgs {
    /// Search depth in plies (at least 1; depth 0 would never move)
    #[arg(
        long,
        short = 'd',
        default_value_t = search::DEFAULT_DEPTH,
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    pub depth: u32,

    /// Export the game transcript as JSON
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: DuelArgs) -> Result<()> {
    let mut state = Board::new();
    let mut turn = Player::X;
    let mut record = GameRecord::new();

    while !state.winner().is_over() {
        let next = search::search(
            &state,
            turn,
            args.depth,
            -search::SCORE_WINDOW,
            search::SCORE_WINDOW,
        )
        .state;
        record.record(&state, &next, turn);
        state = next;
        println!("{}\n", output::render_board(&state));
        turn = turn.opponent();
    }

    println!("Result: {}", state.winner().message());

    if let Some(path) = &args.export {
        super::export_json(&record, path)?;
        println!("Transcript exported to: {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_zero_is_rejected() {
        // a depth-0 search returns the state unchanged, so the duel loop
        // would spin on the empty board forever
        assert!(DuelArgs::try_parse_from(["duel", "--depth", "0"]).is_err());

        let args = DuelArgs::try_parse_from(["duel", "--depth", "1"]).unwrap();
        assert_eq!(args.depth, 1);

        let args = DuelArgs::try_parse_from(["duel"]).unwrap();
        assert_eq!(args.depth, search::DEFAULT_DEPTH);
    }
}
