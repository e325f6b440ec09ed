//! ttt CLI - play and simulate tic-tac-toe against a minimax bot
//!
//! Three modes, matching the classic menu:
//! - `duel`: minimax vs minimax
//! - `vs-random`: minimax vs a uniformly random mover
//! - `play`: minimax vs you

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "ttt")]
#[command(version, about = "Tic-tac-toe bot using minimax with alpha-beta pruning", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Watch two minimax bots play each other
    Duel(ttt_bot::cli::commands::duel::DuelArgs),

    /// Pit the minimax bot against a random mover
    VsRandom(ttt_bot::cli::commands::vs_random::VsRandomArgs),

    /// Play against the minimax bot
    Play(ttt_bot::cli::commands::play::PlayArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Duel(args) => ttt_bot::cli::commands::duel::execute(args),
        Commands::VsRandom(args) => ttt_bot::cli::commands::vs_random::execute(args),
        Commands::Play(args) => ttt_bot::cli::commands::play::execute(args),
    }
}
