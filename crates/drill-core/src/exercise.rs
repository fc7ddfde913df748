use crate::auction::AuctionSlot;
use crate::call::Call;
use crate::hand::Hand;
use crate::seat::{Seat, Vulnerability};
use serde::{Deserialize, Serialize};

/// Most lines an info block or an answer explanation may have.
pub const MAX_TEXT_LINES: usize = 4;

/// An expected call and what to show when the guess is wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub call: Call,
    pub explanation: Vec<String>,
}

impl Answer {
    /// Exact comparison against the canonical call text; `1nt` is not `1NT`.
    pub fn accepts(&self, guess: &str) -> bool {
        guess.trim() == self.call.render()
    }
}

/// One quiz unit from an exercise file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    pub keys: Vec<String>,
    pub dealer: Seat,
    pub vulnerability: Vulnerability,
    pub info: Vec<String>,
    pub hand: Hand,
    /// Auction so far as authored, North column first
    pub auction: Vec<AuctionSlot>,
    pub answers: Vec<Answer>,
}

impl Exercise {
    pub fn has_key(&self, key: &str) -> bool {
        self.keys.iter().any(|k| k.eq_ignore_ascii_case(key))
    }
}
