//! Quiz over an exercise file: show each hand and auction, ask for the call.

use anyhow::{Context, Result};
use clap::Parser;
use drill_cli::quiz::{Flow, Quiz};
use drill_cli::{init_logging, resolve_seed};
use drill_core::io::load_exercises;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Exercise file to drill
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Only ask exercises tagged with this key
    #[arg(short, long)]
    key: Option<String>,

    /// Seed for filling in `x` cards
    #[arg(long, env = "DRILL_SEED")]
    seed: Option<u64>,

    /// Print the final score as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Enable verbose logging (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut rng = StdRng::seed_from_u64(resolve_seed(args.seed));
    let mut exercises = load_exercises(&args.file, &mut rng)
        .with_context(|| format!("reading exercises from {}", args.file.display()))?;
    if let Some(key) = &args.key {
        exercises.retain(|e| e.has_key(key));
    }
    info!("{} exercises to ask", exercises.len());

    let stdin = io::stdin();
    let mut quiz = Quiz::new(stdin.lock(), io::stdout());
    for exercise in &exercises {
        if quiz.ask_exercise(exercise)? == Flow::Quit {
            break;
        }
    }
    let (score, _) = quiz.finish()?;
    if args.json {
        println!("{}", serde_json::to_string(&score)?);
    }
    Ok(())
}
