//! Headless utilities: verify a recorded journal, or autoplay a seeded run
//! to sample difficulty and scoring without a window.

use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use gridfall_core::{
    Command, CommandOutcome, Direction, Game, load_journal_from_file, replay_to_end,
};
use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::{Rng, SeedableRng};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: ToolCommand,
}

#[derive(Subcommand)]
enum ToolCommand {
    /// Replay a recorded JSONL journal and print the final state digest.
    Replay {
        /// Path to the journal file
        #[arg(short, long)]
        journal: String,
    },
    /// Autoplay a run with a random walker and print the outcome.
    Simulate {
        #[arg(short, long)]
        seed: u64,
        /// Stop after this many resolved turns even if the run survives
        #[arg(short, long, default_value_t = 2000)]
        turns: u32,
    },
}

fn main() -> Result<()> {
    match Cli::parse().command {
        ToolCommand::Replay { journal } => run_replay(&journal),
        ToolCommand::Simulate { seed, turns } => run_simulate(seed, turns),
    }
}

fn run_replay(journal: &str) -> Result<()> {
    let loaded = load_journal_from_file(Path::new(&journal))
        .map_err(|e| anyhow::anyhow!("{e}"))
        .with_context(|| format!("failed to load journal file: {journal}"))?;
    let result = replay_to_end(&loaded.journal)
        .map_err(|e| anyhow::anyhow!("replay failed: {e}"))?;

    println!("Replay complete.");
    println!("Seed: {}", loaded.journal.seed);
    println!("Turns: {}", result.total_turns);
    println!("Score: {}", result.final_score);
    println!("Run over: {}", result.dead);
    println!("Snapshot hash: 0x{:016x}", result.final_snapshot_hash);
    Ok(())
}

const WALKER_COMMANDS: [Command; 5] = [
    Command::Move(Direction::Up),
    Command::Move(Direction::Down),
    Command::Move(Direction::Left),
    Command::Move(Direction::Right),
    Command::Skip,
];

fn run_simulate(seed: u64, turns: u32) -> Result<()> {
    let mut game = Game::new(seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let mut attempts: u64 = 0;
    while game.state().total_turns < turns && !game.is_over() {
        attempts += 1;
        if attempts > u64::from(turns) * 16 {
            bail!("walker made no progress after {attempts} attempted commands");
        }
        let command = WALKER_COMMANDS[(rng.next_u64() % WALKER_COMMANDS.len() as u64) as usize];
        if game.resolve_command(command) == CommandOutcome::Rejected {
            break;
        }
    }

    let state = game.state();
    println!("Seed: {seed}");
    println!("Turns: {}", state.total_turns);
    println!("Floor: {}", state.floor);
    println!("Level: {}", state.player.level);
    println!("Experience: {}", state.player.experience);
    println!("Score: {}", game.score());
    match game.final_summary() {
        Some(summary) => println!("Run ended with score {}", summary.score),
        None => println!("Run still alive at the turn limit"),
    }
    println!("Snapshot hash: 0x{:016x}", game.snapshot_hash());
    Ok(())
}
