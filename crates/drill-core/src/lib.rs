//! Parsing for bridge bidding drills.
//!
//! Two hand-authored text formats are supported: exercise files (one hand,
//! an auction so far, and one or more expected calls per record) and
//! question files (one hand bid over several steps, with the auction given
//! in compact notation). See [`io`] for the readers.

pub mod auction;
pub mod call;
pub mod error;
pub mod exercise;
pub mod hand;
pub mod io;
pub mod question;
pub mod rank;
pub mod seat;
pub mod strain;
pub mod suit;

pub use auction::{AuctionSlot, RunningAuction};
pub use call::Call;
pub use error::{ErrorKind, Location, ParseError, Result};
pub use exercise::{Answer, Exercise};
pub use hand::{Hand, Holding};
pub use question::{Question, Step};
pub use rank::Rank;
pub use seat::{Seat, Vulnerability};
pub use strain::Strain;
pub use suit::Suit;
