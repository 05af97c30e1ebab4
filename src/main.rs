//! Kalah-Rust: an iterative-deepening Kalah engine.
//!
//! ## Usage
//!
//! - `kalah-rust` - Read one position from stdin and print the move
//! - `kalah-rust play` - Same, spelled out
//! - `kalah-rust demo` - Watch the engine play itself from the opening

use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Parser, Subcommand};

use kalah_rust::constants::MOVE_BUDGET_MS;
use kalah_rust::position::{apply_move, is_terminal, Position};
use kalah_rust::protocol;
use kalah_rust::search::Searcher;

/// Kalah-Rust: a time-boxed minimax engine for Kalah
#[derive(Parser)]
#[command(name = "kalah-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Wall-clock budget per decision, in milliseconds
    #[arg(long, default_value_t = MOVE_BUDGET_MS)]
    budget: u64,

    /// Seed for the tie-break randomness (fresh entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer one referee state line from stdin (the default)
    Play,
    /// Run a self-play game from the opening position
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let budget = Duration::from_millis(cli.budget);

    match cli.command {
        Some(Commands::Demo) => {
            run_demo(budget, cli.seed);
            Ok(())
        }
        Some(Commands::Play) | None => protocol::run(budget, cli.seed),
    }
}

fn run_demo(budget: Duration, seed: Option<u64>) {
    println!("Kalah-Rust: iterative-deepening Kalah engine\n");

    let mut rng = match seed {
        Some(s) => fastrand::Rng::with_seed(s),
        None => fastrand::Rng::new(),
    };
    let mut pos = Position::new();
    println!("{pos}\n");

    while !is_terminal(&pos) {
        let mut searcher = Searcher::with_rng(Instant::now() + budget, rng.fork());
        let result = searcher.search(&pos);
        let Some(pit) = result.best_move else { break };

        let side = pos.to_move;
        let (next, retained) = apply_move(&pos, pit);
        println!(
            "{side} sows pit {pit}  (depth {}, {} nodes, value {:+.1}){}",
            result.depth,
            result.nodes,
            result.value,
            if retained { "  extra turn" } else { "" },
        );
        pos = next;
        println!("{pos}\n");
    }

    println!(
        "final score: south {}, north {}",
        pos.stores[0], pos.stores[1]
    );
}
