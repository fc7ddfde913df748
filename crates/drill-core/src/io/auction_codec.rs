//! Compact auction notation used by question files.
//!
//! One call per one or two characters: `p` pass, `x` double, `r` redouble,
//! a level `1`-`7` followed by `c`/`d`/`h`/`s` or `n` for notrump. So
//! `1sp2hx` is `1S Pass 2H Dbl`.

use crate::call::Call;
use crate::error::AuctionError;
use crate::seat::Seat;
use crate::strain::Strain;
use crate::suit::Suit;

/// Expands a compact auction string into canonical calls.
///
/// The error offset is the character position where the bad group starts.
pub fn decode(raw: &str) -> Result<Vec<Call>, AuctionError> {
    let mut calls = Vec::new();
    let mut chars = raw.chars().enumerate();
    while let Some((offset, c)) = chars.next() {
        let bad = || AuctionError {
            raw: raw.to_string(),
            offset,
        };
        let call = match c {
            'p' => Call::Pass,
            'x' => Call::Double,
            'r' => Call::Redouble,
            '1'..='7' => {
                let level = c as u8 - b'0';
                let strain = match chars.next() {
                    Some((_, 'n')) => Strain::NoTrump,
                    Some((_, s @ ('c' | 'd' | 'h' | 's'))) => {
                        Suit::from_char(s).map(Strain::from_suit).ok_or_else(bad)?
                    }
                    _ => return Err(bad()),
                };
                Call::Bid { level, strain }
            }
            _ => return Err(bad()),
        };
        calls.push(call);
    }
    Ok(calls)
}

/// Number of empty cells before the dealer's first call when the auction is
/// laid out with North in the leftmost of four columns.
pub fn seat_padding(dealer: Seat) -> usize {
    dealer.idx()
}
