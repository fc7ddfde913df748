use crate::error::Result;
use crate::hand::{Hand, Holding};
use crate::io::line_reader::LineReader;
use crate::rank::Rank;
use rand::seq::SliceRandom;
use rand::Rng;
use std::io::BufRead;

/// One authored card in a suit line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldingToken {
    Rank(Rank),
    /// `x`: some low card, chosen at parse time
    Placeholder,
}

/// Splits a suit line such as `A K x x x` or `Q 10 9` into tokens.
///
/// A lone `-` is a void. Returns `None` if any token is not a rank or `x`.
pub fn parse_suit_line(line: &str) -> Option<Vec<HoldingToken>> {
    let line = line.trim();
    if line == "-" {
        return Some(Vec::new());
    }
    line.split_whitespace()
        .map(|token| match token {
            "x" => Some(HoldingToken::Placeholder),
            _ => token.parse().ok().map(HoldingToken::Rank),
        })
        .collect()
}

/// Replaces every placeholder with a distinct random spot card.
///
/// The spot cards are drawn without replacement from 2..9, leaving out any
/// low rank written literally in the same suit. Placeholders are filled
/// left to right from the highest drawn card down, so `A K x x x` stays in
/// descending order. Returns `None` when there are more placeholders than
/// free spot cards.
///
/// So every placeholder is still one of 2..9 and the fill is still
/// descending, but a suit such as `9 x x` never draws a second nine. Literal
/// ranks are kept as written apart from case, except that `T` becomes `10`.
pub fn resolve_holding<R: Rng + ?Sized>(tokens: &[HoldingToken], rng: &mut R) -> Option<Holding> {
    let wanted = tokens
        .iter()
        .filter(|t| **t == HoldingToken::Placeholder)
        .count();
    let literal = |rank: &Rank| tokens.contains(&HoldingToken::Rank(*rank));
    let free: Vec<Rank> = Rank::LOW.iter().copied().filter(|r| !literal(r)).collect();
    if wanted > free.len() {
        return None;
    }

    let mut drawn: Vec<Rank> = free.choose_multiple(rng, wanted).copied().collect();
    drawn.sort();

    let mut ranks = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token {
            HoldingToken::Rank(rank) => ranks.push(*rank),
            HoldingToken::Placeholder => ranks.push(drawn.pop()?),
        }
    }
    Some(Holding::new(ranks))
}

fn has_duplicates(holding: &Holding) -> bool {
    holding
        .ranks
        .iter()
        .enumerate()
        .any(|(i, r)| holding.ranks[..i].contains(r))
}

fn read_holdings<B, R, F>(reader: &mut LineReader<B>, rng: &mut R, is_suit_line: F) -> Result<Hand>
where
    B: BufRead,
    R: Rng + ?Sized,
    F: Fn(&str) -> bool,
{
    let mut holdings: [Holding; 4] = Default::default();
    for holding in holdings.iter_mut() {
        let line = reader.expect_content_line()?;
        if !is_suit_line(&line) {
            return Err(reader.malformed(&line));
        }
        let tokens = parse_suit_line(&line).ok_or_else(|| reader.malformed(&line))?;
        *holding = resolve_holding(&tokens, rng)
            .ok_or_else(|| reader.violation(format!("too many placeholders in {:?}", line.trim())))?;
        if has_duplicates(holding) {
            return Err(reader.violation(format!("repeated rank in {:?}", line.trim())));
        }
    }
    Ok(Hand::new(holdings))
}

/// Reads the four suit lines of an exercise hand.
///
/// Blank lines before a suit line are skipped. The resolved hand must hold
/// exactly 13 cards.
pub fn read_exercise_hand<B, R>(reader: &mut LineReader<B>, rng: &mut R) -> Result<Hand>
where
    B: BufRead,
    R: Rng + ?Sized,
{
    let hand = read_holdings(reader, rng, |_| true)?;
    let cards = hand.card_count();
    if cards != 13 {
        return Err(reader.violation(format!("hand has {} cards, expected 13", cards)));
    }
    Ok(hand)
}

/// Reads the four suit lines of a question hand; each must be indented.
///
/// No card count check is made here.
pub fn read_question_hand<B, R>(reader: &mut LineReader<B>, rng: &mut R) -> Result<Hand>
where
    B: BufRead,
    R: Rng + ?Sized,
{
    read_holdings(reader, rng, |line| {
        line.starts_with(char::is_whitespace)
    })
}
