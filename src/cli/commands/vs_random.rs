//! VsRandom command - the minimax bot against a uniformly random opponent

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};

use crate::{
    board::{Board, Outcome, Player},
    cli::output,
    game::{GameRecord, MatchStats},
    search,
};

#[derive(Parser, Debug)]
#[command(about = "Pit the minimax bot against a random mover")]
pub struct VsRandomArgs {
    /// Search depth in plies (at least 1; depth 0 would never move)
    #[arg(
        long,
        short = 'd',
        default_value_t = search::DEFAULT_DEPTH,
        value_parser = clap::value_parser!(u32).range(1..),
    )]
    pub depth: u32,

    /// Number of games to play
    #[arg(long, short = 'g', default_value_t = 1)]
    pub games: usize,

    /// Random seed for reproducibility
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export results as JSON (a transcript for one game, stats otherwise)
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: VsRandomArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    if args.games == 1 {
        single_game(&args, &mut rng)
    } else {
        simulation(&args, &mut rng)
    }
}

/// One rendered game, bot as X against the random mover as O
fn single_game(args: &VsRandomArgs, rng: &mut StdRng) -> Result<()> {
    println!("Note: Minimax bot is X");

    let mut state = Board::new();
    let mut turn = Player::X;
    let mut record = GameRecord::new();

    while !state.winner().is_over() {
        let next = step(&state, turn, args.depth, rng);
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

/// Many unrendered games with a progress bar and a summary table
fn simulation(args: &VsRandomArgs, rng: &mut StdRng) -> Result<()> {
    let pb = output::simulation_progress(args.games as u64);
    let mut stats = MatchStats::default();

    for _ in 0..args.games {
        let outcome = play_one(args.depth, rng);
        stats.record(outcome, Player::X);
        pb.set_message(format!("{} wins", stats.wins));
        pb.inc(1);
    }
    pb.finish_with_message("done");

    output::print_section("Results (bot is X)");
    output::print_kv("Total games", &stats.total_games.to_string());
    output::print_kv(
        "Wins",
        &format!("{} ({:.1}%)", stats.wins, stats.win_rate() * 100.0),
    );
    output::print_kv(
        "Draws",
        &format!("{} ({:.1}%)", stats.draws, stats.draw_rate() * 100.0),
    );
    output::print_kv(
        "Losses",
        &format!("{} ({:.1}%)", stats.losses, stats.loss_rate() * 100.0),
    );

    if let Some(path) = &args.export {
        super::export_json(&stats, path)?;
        println!("\nStats exported to: {}", path.display());
    }

    Ok(())
}

fn play_one(depth: u32, rng: &mut StdRng) -> Outcome {
    let mut state = Board::new();
    let mut turn = Player::X;

    while !state.winner().is_over() {
        state = step(&state, turn, depth, rng);
        turn = turn.opponent();
    }

    state.winner()
}

fn step(state: &Board, turn: Player, depth: u32, rng: &mut StdRng) -> Board {
    match turn {
        Player::X => {
            search::search(state, turn, depth, -search::SCORE_WINDOW, search::SCORE_WINDOW).state
        }
        Player::O => search::random_move(state, turn, rng),
    }
}
