//! hexmarch CLI
//!
//! Commands:
//! - generate: create a random map and write it as JSON
//! - path: find the cheapest route between two tiles
//! - play: interactive two-pick selection loop on stdin

use clap::{Parser, Subcommand};

mod generate;
mod path_cmd;
mod play;

#[derive(Parser)]
#[command(name = "hexmarch")]
#[command(about = "hexmarch hex map pathfinding")]
struct Cli {
    /// RNG seed for commands that generate a map
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a random map
    Generate(generate::GenerateArgs),
    /// Find a path between two tiles
    Path(path_cmd::PathArgs),
    /// Interactive selection loop
    Play(play::PlayArgs),
}

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => generate::run(args, cli.seed),
        Commands::Path(args) => path_cmd::run(args, cli.seed),
        Commands::Play(args) => play::run(args, cli.seed),
    }
}
