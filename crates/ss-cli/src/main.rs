//! Terminal front end for Subterranean Script.

mod commands;
mod render;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use ss_game::GameConfig;

#[derive(Parser)]
#[command(
    name = "subterranean",
    about = "Subterranean Script: a text-based, choice-driven dungeon crawl",
    version
)]
struct Cli {
    /// Seed the dice for a reproducible run (random by default)
    #[arg(short, long)]
    seed: Option<u64>,

    /// End a fight in a stalemate after this many turns
    #[arg(long)]
    max_turns: Option<u32>,

    /// Load the dungeon from a JSON file instead of the built-in one
    #[arg(short, long)]
    dungeon: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    plain: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.plain {
        colored::control::set_override(false);
    }

    let mut config = GameConfig::default();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(max_turns) = cli.max_turns {
        config = config.with_max_turns(max_turns);
    }

    let result = commands::load_dungeon(cli.dungeon.as_deref())
        .and_then(|dungeon| commands::play::run(dungeon, config));

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
