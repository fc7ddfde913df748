//! Prompts for hands in compact form and appends them to a hands file.

use anyhow::{Context, Result};
use clap::Parser;
use drill_cli::init_logging;
use drill_core::io::compact_hand;
use log::{info, warn};
use std::fs::OpenOptions;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Hands file to append to
    #[arg(value_name = "HANDS")]
    output: PathBuf,

    /// Enable verbose logging (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn ask(input: &mut impl BufRead, text: &str) -> io::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&args.output)
        .with_context(|| format!("opening {}", args.output.display()))?;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut written = 0;
    while let Some(suits) = ask(&mut input, "Four suits > ")? {
        let comment = ask(&mut input, "Comment > ")?.unwrap_or_default();
        match compact_hand(&suits, &comment) {
            Some(block) => {
                file.write_all(block.to_text().as_bytes())
                    .with_context(|| format!("writing {}", args.output.display()))?;
                written += 1;
            }
            None => warn!("not a hand, expected four suits such as AKTxx Qxx - KQJxx: {:?}", suits),
        }
    }
    println!();
    info!("appended {} hands to {}", written, args.output.display());
    Ok(())
}
