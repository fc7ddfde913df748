use crate::call::Call;
use crate::hand::Hand;
use crate::seat::{Seat, Vulnerability};
use serde::{Deserialize, Serialize};

/// One bidding round of a multi-step question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Calls made since the previous step
    pub delta: Vec<Call>,
    pub answer: Call,
    pub explanation: Vec<String>,
}

impl Step {
    pub fn accepts(&self, guess: &str) -> bool {
        guess.trim() == self.answer.render()
    }
}

/// A hand bid over several rounds.
///
/// The full auction is not stored; the quiz loop rebuilds it from the step
/// deltas with a [`RunningAuction`](crate::auction::RunningAuction).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub dealer: Seat,
    pub vulnerability: Vulnerability,
    pub keywords: Vec<String>,
    pub hand: Hand,
    pub steps: Vec<Step>,
}
