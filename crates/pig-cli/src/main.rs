//! Terminal frontend for Pig, the jeopardy dice game.

mod play;

use std::process;

use clap::Parser;

#[derive(Parser)]
#[command(name = "pig", about = "Pig, the jeopardy dice game, at your terminal", version)]
struct Cli {
    /// Number of players (at least 2)
    #[arg(short, long, default_value = "2")]
    players: usize,

    /// Score a player must reach to win
    #[arg(short, long, default_value = "100")]
    target: u32,

    /// RNG seed for a reproducible game
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = play::run(cli.players, cli.target, cli.seed) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
