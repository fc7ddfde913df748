//! Quiz over a question file, one bidding round at a time.

use anyhow::{Context, Result};
use clap::Parser;
use drill_cli::quiz::{Flow, Quiz};
use drill_cli::{init_logging, resolve_seed};
use drill_core::io::{LineReader, Questions};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Question file to drill
    #[arg(value_name = "FILE")]
    file: PathBuf,

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

    let rng = StdRng::seed_from_u64(resolve_seed(args.seed));
    let reader = LineReader::open(&args.file)
        .with_context(|| format!("opening {}", args.file.display()))?;

    let stdin = io::stdin();
    let mut quiz = Quiz::new(stdin.lock(), io::stdout());
    for question in Questions::new(reader, rng) {
        let question = question?;
        if quiz.ask_question(&question)? == Flow::Quit {
            break;
        }
    }
    let (score, _) = quiz.finish()?;
    if args.json {
        println!("{}", serde_json::to_string(&score)?);
    }
    Ok(())
}
