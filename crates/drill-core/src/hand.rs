use crate::rank::Rank;
use crate::suit::Suit;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The cards held in one suit, in the order they were authored
/// (highest first by convention).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Holding {
    pub ranks: Vec<Rank>,
}

impl Holding {
    pub fn new(ranks: Vec<Rank>) -> Self {
        Self { ranks }
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_void(&self) -> bool {
        self.ranks.is_empty()
    }

    pub fn hcp(&self) -> u8 {
        self.ranks
            .iter()
            .map(|r| match r {
                Rank::Ace => 4,
                Rank::King => 3,
                Rank::Queen => 2,
                Rank::Jack => 1,
                _ => 0,
            })
            .sum()
    }
}

/// Drill-file form: space separated ranks, `-` for a void.
impl fmt::Display for Holding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_void() {
            return write!(f, "-");
        }
        let ranks: Vec<&str> = self.ranks.iter().map(|r| r.label()).collect();
        write!(f, "{}", ranks.join(" "))
    }
}

/// One player's hand: a holding per suit, spades first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Hand {
    pub holdings: [Holding; 4],
}

impl Hand {
    pub fn new(holdings: [Holding; 4]) -> Self {
        Self { holdings }
    }

    pub fn holding(&self, suit: Suit) -> &Holding {
        &self.holdings[suit.idx()]
    }

    pub fn card_count(&self) -> usize {
        self.holdings.iter().map(Holding::len).sum()
    }

    pub fn hcp(&self) -> u8 {
        self.holdings.iter().map(Holding::hcp).sum()
    }

    pub fn distribution(&self) -> [usize; 4] {
        [
            self.holding(Suit::Spades).len(),
            self.holding(Suit::Hearts).len(),
            self.holding(Suit::Diamonds).len(),
            self.holding(Suit::Clubs).len(),
        ]
    }

    /// The four suit lines as they appear in a drill file.
    pub fn to_suit_lines(&self) -> Vec<String> {
        self.holdings.iter().map(Holding::to_string).collect()
    }

    /// Suit lines for display: a suit symbol, then ranks padded to two columns.
    pub fn symbol_lines(&self) -> Vec<String> {
        Suit::ALL
            .iter()
            .map(|&suit| {
                let holding = self.holding(suit);
                let cards = if holding.is_void() {
                    "-".to_string()
                } else {
                    holding
                        .ranks
                        .iter()
                        .map(|r| format!("{:<2}", r.label()))
                        .collect::<Vec<_>>()
                        .join(" ")
                };
                format!("{} {}", suit.symbol(), cards.trim_end())
            })
            .collect()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol_lines().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holding(ranks: &[Rank]) -> Holding {
        Holding::new(ranks.to_vec())
    }

    fn sample_hand() -> Hand {
        Hand::new([
            holding(&[Rank::Ace, Rank::King, Rank::Nine, Rank::Five, Rank::Three]),
            holding(&[Rank::Queen, Rank::Ten, Rank::Four]),
            holding(&[Rank::Jack, Rank::Eight, Rank::Seven, Rank::Two]),
            holding(&[Rank::Six]),
        ])
    }

    #[test]
    fn test_card_count_and_hcp() {
        let hand = sample_hand();
        assert_eq!(hand.card_count(), 13);
        assert_eq!(hand.hcp(), 10);
        assert_eq!(hand.distribution(), [5, 3, 4, 1]);
    }

    #[test]
    fn test_suit_lines() {
        let mut hand = sample_hand();
        hand.holdings[3] = Holding::default();
        assert_eq!(
            hand.to_suit_lines(),
            vec!["A K 9 5 3", "Q 10 4", "J 8 7 2", "-"]
        );
    }

    #[test]
    fn test_symbol_lines() {
        let lines = sample_hand().symbol_lines();
        assert_eq!(lines[0], "♠ A  K  9  5  3");
        assert_eq!(lines[1], "♥ Q  10 4");
        assert_eq!(lines[3], "♣ 6");
    }
}
