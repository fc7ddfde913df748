//! Parses drill files and reports the first problem in each.

use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use drill_cli::{init_logging, resolve_seed};
use drill_core::io::{load_exercises, load_questions};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::{Path, PathBuf};

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    /// Pick by extension: `.qu` files are questions, anything else exercises
    Auto,
    Exercise,
    Question,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Drill files to check
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,

    #[arg(short, long, value_enum, default_value_t = Format::Auto)]
    format: Format,

    /// Print the parsed records as JSON
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Seed for filling in `x` cards
    #[arg(long, env = "DRILL_SEED")]
    seed: Option<u64>,

    /// Enable verbose logging (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn format_of(path: &Path, format: Format) -> Format {
    match format {
        Format::Auto if path.extension().is_some_and(|ext| ext == "qu") => Format::Question,
        Format::Auto => Format::Exercise,
        other => other,
    }
}

fn check(path: &Path, format: Format, json: bool, rng: &mut StdRng) -> Result<usize> {
    let (count, dump) = match format_of(path, format) {
        Format::Question => {
            let questions = load_questions(path, rng)?;
            (questions.len(), json.then(|| serde_json::to_string_pretty(&questions)))
        }
        _ => {
            let exercises = load_exercises(path, rng)?;
            (exercises.len(), json.then(|| serde_json::to_string_pretty(&exercises)))
        }
    };
    if let Some(dump) = dump {
        println!("{}", dump?);
    }
    Ok(count)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut rng = StdRng::seed_from_u64(resolve_seed(args.seed));
    let mut failed = 0;
    for path in &args.files {
        match check(path, args.format, args.json, &mut rng) {
            Ok(count) => info!("{}: {} records", path.display(), count),
            Err(err) => {
                error!("{:#}", err);
                failed += 1;
            }
        }
    }
    if failed > 0 {
        bail!("{} of {} files failed", failed, args.files.len());
    }
    Ok(())
}
