//! Writes one exercise skeleton per hand by filling a template.

use anyhow::{Context, Result};
use clap::Parser;
use drill_cli::init_logging;
use drill_core::io::{merge_hands, read_hand_blocks, LineReader};
use log::info;
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// File of `Hand` blocks
    #[arg(value_name = "HANDS")]
    hands: PathBuf,

    /// Exercise template with a `HAND GOES HERE` line
    #[arg(short, long, value_name = "FILE", default_value = "template.txt")]
    template: PathBuf,

    /// Output file (default: the hands file with an `.exr` extension)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Enable verbose logging (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let template = fs::read_to_string(&args.template)
        .with_context(|| format!("reading template {}", args.template.display()))?;
    let mut reader = LineReader::open(&args.hands)
        .with_context(|| format!("opening {}", args.hands.display()))?;
    let hands = read_hand_blocks(&mut reader)?;

    let output = args
        .output
        .unwrap_or_else(|| args.hands.with_extension("exr"));
    fs::write(&output, merge_hands(&template, &hands))
        .with_context(|| format!("writing {}", output.display()))?;
    info!("wrote {} exercises to {}", hands.len(), output.display());
    Ok(())
}
