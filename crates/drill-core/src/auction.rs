use crate::call::Call;
use crate::io::auction_codec::seat_padding;
use crate::seat::Seat;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One cell of an auction laid out in North/East/South/West columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuctionSlot {
    /// `-`: a seat before the dealer, which makes no call
    NoCall,
    /// `?`: where the call under test goes
    NextToCall,
    Call(Call),
}

impl AuctionSlot {
    pub fn call(&self) -> Option<Call> {
        match self {
            AuctionSlot::Call(call) => Some(*call),
            _ => None,
        }
    }
}

impl FromStr for AuctionSlot {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "-" => Ok(AuctionSlot::NoCall),
            "?" => Ok(AuctionSlot::NextToCall),
            _ => s.parse().map(AuctionSlot::Call),
        }
    }
}

impl fmt::Display for AuctionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuctionSlot::NoCall => write!(f, "-"),
            AuctionSlot::NextToCall => write!(f, "?"),
            AuctionSlot::Call(call) => write!(f, "{}", call),
        }
    }
}

/// Splits a flat slot list into display rows of four (North first).
pub fn rows(slots: &[AuctionSlot]) -> std::slice::Chunks<'_, AuctionSlot> {
    slots.chunks(4)
}

/// Auction shown while working through a multi-step question.
///
/// Owned by the quiz loop, not by the question: each step's delta is
/// appended and the `?` marker moved to the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunningAuction {
    dealer: Seat,
    slots: Vec<AuctionSlot>,
}

impl RunningAuction {
    pub fn new(dealer: Seat) -> Self {
        Self {
            dealer,
            slots: vec![AuctionSlot::NoCall; seat_padding(dealer)],
        }
    }

    /// Appends the calls made since the previous step and marks the next call.
    pub fn begin_step(&mut self, delta: &[Call]) {
        if self.slots.last() == Some(&AuctionSlot::NextToCall) {
            self.slots.pop();
        }
        self.slots.extend(delta.iter().copied().map(AuctionSlot::Call));
        self.slots.push(AuctionSlot::NextToCall);
    }

    pub fn slots(&self) -> &[AuctionSlot] {
        &self.slots
    }

    pub fn calls(&self) -> impl Iterator<Item = Call> + '_ {
        self.slots.iter().filter_map(AuctionSlot::call)
    }

    /// Seat whose turn it is after the calls made so far.
    pub fn next_seat(&self) -> Seat {
        let mut seat = self.dealer;
        for _ in self.calls() {
            seat = seat.next();
        }
        seat
    }

    pub fn rows(&self) -> std::slice::Chunks<'_, AuctionSlot> {
        rows(&self.slots)
    }
}
