//! Exercise files.
//!
//! ```text
//! Free text before the first record is ignored.
//! ---
//! Keys: 1NT stayman
//! Dealer N
//! Vulnerable: None
//! Info:
//! Partner opened 1NT.
//!
//! Hand:
//! A K x x
//! Q x x
//! x x x
//! K J x
//!
//! Auction:
//!  N    E    S    W
//! ---- ---- ---- ----
//! 1NT  Pass ?
//!
//! Answers:
//! 1 2C
//! Stayman, looking for a 4-4 spade fit.
//!
//! ===
//! ```

use crate::auction::AuctionSlot;
use crate::call::Call;
use crate::error::Result;
use crate::exercise::{Answer, Exercise, MAX_TEXT_LINES};
use crate::hand::Hand;
use crate::io::hand_parser::read_exercise_hand;
use crate::io::line_reader::LineReader;
use crate::seat::{Seat, Vulnerability};
use rand::Rng;
use regex::Regex;
use std::io::BufRead;
use std::path::Path;
use std::sync::OnceLock;

const RECORD_START: &str = "---";
const ANSWERS_END: &str = "===";
const AUCTION_DIVIDER: &str = "---";

/// Keyword lines that may appear inside an exercise record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Keys,
    Dealer,
    Vulnerable,
    Info,
    Hand,
    Auction,
    Answers,
}

impl Field {
    const ALL: [Field; 7] = [
        Field::Keys,
        Field::Dealer,
        Field::Vulnerable,
        Field::Info,
        Field::Hand,
        Field::Auction,
        Field::Answers,
    ];

    fn prefix(self) -> &'static str {
        match self {
            Field::Keys => "Keys:",
            Field::Dealer => "Dealer",
            Field::Vulnerable => "Vulnerable:",
            Field::Info => "Info:",
            Field::Hand => "Hand:",
            Field::Auction => "Auction:",
            Field::Answers => "Answers:",
        }
    }

    fn classify(line: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|f| line.starts_with(f.prefix()))
    }
}

/// `<label> <call>`; the label (usually `1`, `2`, ...) is not checked.
fn answer_line() -> &'static Regex {
    static ANSWER_LINE: OnceLock<Regex> = OnceLock::new();
    ANSWER_LINE.get_or_init(|| {
        Regex::new(r"^\s*(?P<label>\S+)\s+(?P<call>\S+)").expect("answer line pattern")
    })
}

#[derive(Default)]
struct ExerciseBuilder {
    keys: Option<Vec<String>>,
    dealer: Option<Seat>,
    vulnerability: Option<Vulnerability>,
    info: Vec<String>,
    hand: Option<Hand>,
    auction: Option<Vec<AuctionSlot>>,
    answers: Vec<Answer>,
}

fn set_once<T, B: BufRead>(
    slot: &mut Option<T>,
    value: T,
    reader: &LineReader<B>,
    field: Field,
) -> Result<()> {
    if slot.is_some() {
        return Err(reader.violation(format!("duplicate {:?} field", field)));
    }
    *slot = Some(value);
    Ok(())
}

/// Second whitespace-separated field of a keyword line.
fn value_of<'a, B: BufRead>(line: &'a str, reader: &LineReader<B>) -> Result<&'a str> {
    line.split_whitespace()
        .nth(1)
        .ok_or_else(|| reader.malformed(line))
}

/// Lines up to the next blank line, at most `MAX_TEXT_LINES` of them.
fn read_paragraph<B: BufRead>(reader: &mut LineReader<B>, what: &str) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    loop {
        let line = reader.expect_line()?;
        if line.is_empty() {
            return Ok(lines);
        }
        lines.push(line);
        if lines.len() > MAX_TEXT_LINES {
            return Err(reader.violation(format!(
                "{} has more than {} lines",
                what, MAX_TEXT_LINES
            )));
        }
    }
}

impl ExerciseBuilder {
    /// Consumes the field starting at `line`. Returns true once the record is complete.
    fn apply<B: BufRead, R: Rng + ?Sized>(
        &mut self,
        field: Field,
        line: &str,
        reader: &mut LineReader<B>,
        rng: &mut R,
    ) -> Result<bool> {
        match field {
            Field::Keys => {
                let keys: Vec<String> = line.split_whitespace().skip(1).map(str::to_string).collect();
                set_once(&mut self.keys, keys, reader, field)?;
            }
            Field::Dealer => {
                let value = value_of(line, reader)?;
                let dealer = value
                    .parse::<Seat>()
                    .map_err(|_| reader.violation(format!("unknown dealer {:?}", value)))?;
                set_once(&mut self.dealer, dealer, reader, field)?;
            }
            Field::Vulnerable => {
                let value = value_of(line, reader)?;
                let vulnerability = value
                    .parse::<Vulnerability>()
                    .map_err(|_| reader.violation(format!("unknown vulnerability {:?}", value)))?;
                set_once(&mut self.vulnerability, vulnerability, reader, field)?;
            }
            Field::Info => {
                let lines = read_paragraph(reader, "info block")?;
                self.info.extend(lines);
                if self.info.len() > MAX_TEXT_LINES {
                    return Err(reader.violation(format!(
                        "info has more than {} lines",
                        MAX_TEXT_LINES
                    )));
                }
            }
            Field::Hand => {
                let hand = read_exercise_hand(reader, rng)?;
                let next = reader.expect_line()?;
                if !next.is_empty() {
                    return Err(reader.malformed(&next));
                }
                set_once(&mut self.hand, hand, reader, field)?;
            }
            Field::Auction => {
                let auction = read_auction_block(reader)?;
                set_once(&mut self.auction, auction, reader, field)?;
            }
            Field::Answers => {
                self.read_answers(reader)?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    fn read_answers<B: BufRead>(&mut self, reader: &mut LineReader<B>) -> Result<()> {
        loop {
            let line = reader.expect_line()?;
            if line.starts_with(ANSWERS_END) {
                return Ok(());
            }
            let call = answer_line()
                .captures(&line)
                .and_then(|caps| Call::from_authored(&caps["call"]))
                .ok_or_else(|| reader.malformed(&line))?;
            let explanation = read_paragraph(reader, "explanation")?;
            self.answers.push(Answer { call, explanation });
        }
    }

    fn finish<B: BufRead>(self, reader: &LineReader<B>) -> Result<Exercise> {
        let missing = |name: &str| reader.violation(format!("exercise has no {}", name));
        if self.answers.is_empty() {
            return Err(missing("answers"));
        }
        Ok(Exercise {
            keys: self.keys.unwrap_or_default(),
            dealer: self.dealer.ok_or_else(|| missing("dealer"))?,
            vulnerability: self.vulnerability.ok_or_else(|| missing("vulnerability"))?,
            info: self.info,
            hand: self.hand.ok_or_else(|| missing("hand"))?,
            auction: self.auction.unwrap_or_default(),
            answers: self.answers,
        })
    }
}

/// Seat header row, divider row, then call tokens until a blank line.
fn read_auction_block<B: BufRead>(reader: &mut LineReader<B>) -> Result<Vec<AuctionSlot>> {
    let header = reader.expect_line()?;
    if !header.contains('N') {
        return Err(reader.malformed(&header));
    }
    let divider = reader.expect_line()?;
    if !divider.trim_start().starts_with(AUCTION_DIVIDER) {
        return Err(reader.malformed(&divider));
    }
    let mut slots = Vec::new();
    loop {
        let line = reader.expect_line()?;
        if line.is_empty() {
            return Ok(slots);
        }
        for token in line.split_whitespace() {
            let slot = token.parse::<AuctionSlot>().map_err(|_| reader.malformed(&line))?;
            slots.push(slot);
        }
    }
}

/// Reads the next exercise, or `Ok(None)` if no record start remains.
pub fn read_next_exercise<B, R>(reader: &mut LineReader<B>, rng: &mut R) -> Result<Option<Exercise>>
where
    B: BufRead,
    R: Rng + ?Sized,
{
    loop {
        match reader.next_line()? {
            None => return Ok(None),
            Some(line) if line.starts_with(RECORD_START) => break,
            Some(_) => {}
        }
    }
    log::debug!("{}: exercise starts", reader.location());

    let mut builder = ExerciseBuilder::default();
    loop {
        let line = reader.expect_line()?;
        let field = Field::classify(&line).ok_or_else(|| reader.malformed(&line))?;
        if builder.apply(field, &line, reader, rng)? {
            break;
        }
    }
    let exercise = builder.finish(reader)?;
    log::debug!("{}: exercise complete", reader.location());
    Ok(Some(exercise))
}

/// Iterator over the exercises of one file. Stops after the first error.
pub struct Exercises<B, R> {
    reader: LineReader<B>,
    rng: R,
    done: bool,
}

impl<B: BufRead, R: Rng> Exercises<B, R> {
    pub fn new(reader: LineReader<B>, rng: R) -> Self {
        Self {
            reader,
            rng,
            done: false,
        }
    }
}

impl<B: BufRead, R: Rng> Iterator for Exercises<B, R> {
    type Item = Result<Exercise>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = read_next_exercise(&mut self.reader, &mut self.rng).transpose();
        if !matches!(result, Some(Ok(_))) {
            self.done = true;
        }
        result
    }
}

/// Reads every exercise in `path`.
pub fn load_exercises<R: Rng + ?Sized>(path: impl AsRef<Path>, rng: &mut R) -> Result<Vec<Exercise>> {
    let mut reader = LineReader::open(path)?;
    let mut exercises = Vec::new();
    while let Some(exercise) = read_next_exercise(&mut reader, rng)? {
        exercises.push(exercise);
    }
    Ok(exercises)
}
