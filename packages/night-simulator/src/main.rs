//! Night Simulator CLI - runs all-automated games in memory.
//!
//! Every seat is played by one registered stand-in profile. Results go out
//! as JSON lines, one per game, to stdout or `--output`.

mod metrics;
mod simulator;
mod types;

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::time::Instant;

use clap::Parser;
use metrics::{build_game_metrics, MetricsInput};
use simulator::{GameResult, Simulator};
use tracing::{info, warn};
use types::{Profile, Winner};

#[derive(Parser)]
#[command(name = "night-simulator")]
#[command(about = "In-memory night simulator for stand-in profiles")]
struct Args {
    /// Number of games to simulate
    #[arg(short, long, default_value = "1")]
    games: u32,

    /// Seats per game
    #[arg(short, long, default_value = "8", value_parser = clap::value_parser!(u16).range(3..=40))]
    players: u16,

    /// Nights before a game is called without a winner
    #[arg(long, default_value = "10")]
    max_nights: u32,

    /// Stand-in profile for every seat
    #[arg(long, default_value = "random")]
    profile: Profile,

    /// Base seed; game N uses `seed + N`
    #[arg(long)]
    seed: Option<u64>,

    /// Write JSON lines here instead of stdout
    #[arg(long)]
    output: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print a summary when done
    #[arg(long)]
    show_output: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose {
        "debug"
    } else if args.show_output {
        "info"
    } else {
        "warn"
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout().lock())),
    };

    let base_seed = args.seed.unwrap_or_else(rand::random);
    info!(games = args.games, base_seed, profile = ?args.profile, "Starting night simulator");

    let start = Instant::now();
    let mut results = Vec::new();
    let mut errors = 0u32;

    for game_num in 1..=args.games {
        let game_start = Instant::now();
        let seed = base_seed.wrapping_add(u64::from(game_num));
        let simulator = Simulator::new(i64::from(game_num), seed, args.players, args.max_nights);

        match simulator.simulate_game(args.profile) {
            Ok(result) => {
                let metrics = build_game_metrics(MetricsInput {
                    game: game_num,
                    seed,
                    profile: args.profile.name(),
                    players: args.players,
                    result: &result,
                    duration_ms: game_start.elapsed().as_secs_f64() * 1000.0,
                });
                serde_json::to_writer(&mut out, &metrics)?;
                writeln!(out)?;
                results.push(result);
            }
            Err(e) => {
                errors += 1;
                warn!(game = game_num, code = %e.code(), "Game failed: {}", e);
            }
        }
    }
    out.flush()?;

    if args.show_output {
        print_summary(&results, errors, start.elapsed(), args.games);
    }
    Ok(())
}

fn print_summary(results: &[GameResult], errors: u32, elapsed: std::time::Duration, total: u32) {
    eprintln!("\n=== Simulation Summary ===");
    eprintln!("Games completed: {}/{}", results.len(), total);
    if errors > 0 {
        eprintln!("Errors: {}", errors);
    }
    eprintln!("Total time: {:?}", elapsed);
    if results.is_empty() {
        return;
    }

    let count = |w: Option<Winner>| results.iter().filter(|r| r.winner == w).count();
    let n = results.len() as f64;
    let avg = |f: fn(&GameResult) -> usize| results.iter().map(f).sum::<usize>() as f64 / n;
    eprintln!(
        "Town wins: {}, Mafia wins: {}, Undecided: {}",
        count(Some(Winner::Town)),
        count(Some(Winner::Mafia)),
        count(None)
    );
    eprintln!(
        "Per game: nights={:.1}, actions={:.1}, skipped={:.1}, deaths={:.1}",
        avg(|r| r.nights as usize),
        avg(|r| r.actions),
        avg(|r| r.skipped),
        avg(|r| r.deaths)
    );
}
