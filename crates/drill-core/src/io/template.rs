//! Authoring helper: turn a file of hands into exercise skeletons.
//!
//! A hands file holds blocks like
//!
//! ```text
//! Hand: # weak two in spades
//! K Q J x x x
//! x x
//! A x x
//! x x
//! ```
//!
//! and a template is an exercise record with a line starting with
//! `HAND GOES HERE`. Each hand yields one copy of the template with that line
//! replaced by the suit lines and the hand's comment. Placeholders are left
//! as written so they are resolved when the exercise is read.
//!
//! Hands files are written from compact entries such as `AKTxx Qxx - KQJxx`
//! with [`compact_hand`].

use crate::error::Result;
use crate::io::hand_parser::parse_suit_line;
use crate::io::line_reader::LineReader;
use std::io::BufRead;

pub const HAND_MARKER: &str = "HAND GOES HERE";

/// A hand as written in a hands file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandBlock {
    pub label: String,
    pub suits: Vec<String>,
}

impl HandBlock {
    /// The block as it appears in a hands file, ending in a blank line.
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n\n", self.label);
        for suit in &self.suits {
            out.push_str(suit);
            out.push('\n');
        }
        out.push('\n');
        out
    }

    /// The label from its `#` on, or a bare `#`.
    pub fn comment(&self) -> &str {
        match self.label.find('#') {
            Some(i) => &self.label[i..],
            None => "#",
        }
    }
}

/// Builds a hand block from four whitespace-separated suits, one character
/// per card: `AKTxx Qxx - KQJxx`. Ranks are upper-cased with `T` spelled
/// `10`; `x` stays a placeholder and `-` is a void. Returns `None` unless
/// there are exactly four suits and every card is a rank or `x`.
pub fn compact_hand(suits: &str, comment: &str) -> Option<HandBlock> {
    let groups: Vec<&str> = suits.split_whitespace().collect();
    if groups.len() != 4 {
        return None;
    }
    let mut lines = Vec::with_capacity(4);
    for group in groups {
        let line = if group == "-" {
            group.to_string()
        } else {
            let cards: Vec<String> = group
                .chars()
                .map(|c| match c.to_ascii_uppercase() {
                    'X' => "x".to_string(),
                    'T' => "10".to_string(),
                    upper => upper.to_string(),
                })
                .collect();
            cards.join(" ")
        };
        parse_suit_line(&line)?;
        lines.push(line);
    }
    let comment = comment.trim();
    let label = if comment.is_empty() {
        "Hand:".to_string()
    } else {
        format!("Hand: # {}", comment)
    };
    Some(HandBlock {
        label,
        suits: lines,
    })
}

/// Reads every `Hand` block: a label line starting with `Hand`, then four
/// suit lines ended by a blank line or end of input. Blank lines between the
/// label and the first suit line are skipped.
pub fn read_hand_blocks<B: BufRead>(reader: &mut LineReader<B>) -> Result<Vec<HandBlock>> {
    let mut blocks = Vec::new();
    while let Some(line) = reader.next_line()? {
        if !line.starts_with("Hand") {
            continue;
        }
        let mut suits = Vec::new();
        while let Some(suit) = reader.next_line()? {
            if suit.is_empty() {
                if suits.is_empty() {
                    continue;
                }
                break;
            }
            if parse_suit_line(&suit).is_none() {
                return Err(reader.malformed(&suit));
            }
            suits.push(suit.trim().to_string());
        }
        if suits.len() != 4 {
            return Err(reader.violation(format!(
                "hand {:?} has {} suit lines, expected 4",
                line,
                suits.len()
            )));
        }
        blocks.push(HandBlock { label: line, suits });
    }
    Ok(blocks)
}

/// One template copy per hand, with the marker line replaced.
pub fn merge_hands(template: &str, hands: &[HandBlock]) -> String {
    let mut out = String::new();
    for hand in hands {
        for line in template.lines() {
            if line.starts_with(HAND_MARKER) {
                for suit in &hand.suits {
                    out.push_str(suit);
                    out.push('\n');
                }
                out.push_str(hand.comment());
            } else {
                out.push_str(line.trim_end());
            }
            out.push('\n');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::io::exercise::read_next_exercise;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const HANDS: &str = "\
Hand: # weak two
K Q J x x x
x x
A x x
x x

Hand:

A K x x
K Q x
x x x
A x x
";

    const TEMPLATE: &str = "\
---
Keys: practice
Dealer N
Vulnerable: None
Hand:
HAND GOES HERE

Auction:
 N    E    S    W
---- ---- ---- ----
?

Answers:
1 Pass
Fill me in.

===
";

    #[test]
    fn test_reads_blocks() {
        let blocks = read_hand_blocks(&mut LineReader::from_text(HANDS)).unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].comment(), "# weak two");
        assert_eq!(blocks[0].suits[0], "K Q J x x x");
        assert_eq!(blocks[1].comment(), "#");
    }

    #[test]
    fn test_wrong_suit_count() {
        let err = read_hand_blocks(&mut LineReader::from_text("Hand:\nA K\nQ J\n\n")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvariantViolation);
        let err = read_hand_blocks(&mut LineReader::from_text("Hand:\nA K\nQ J!\n")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedLine);
    }

    #[test]
    fn test_compact_hand() {
        let block = compact_hand("AKTxx qxx - kqj9", " opener ").unwrap();
        assert_eq!(block.label, "Hand: # opener");
        assert_eq!(block.suits, ["A K 10 x x", "Q x x", "-", "K Q J 9"]);
    }

    #[test]
    fn test_compact_hand_rejects() {
        assert_eq!(compact_hand("AKx Qxx xxx", "short"), None);
        assert_eq!(compact_hand("AKx Qxx xxx KQJ 2", "long"), None);
        assert_eq!(compact_hand("AKZ Qxx xxx KQJx", "bad card"), None);
        assert_eq!(compact_hand("AK1 Qxx xxx KQJx", "lone 1"), None);
    }

    #[test]
    fn test_compact_hand_text_reads_back() {
        let first = compact_hand("KQJxxx xx Axx xx", "weak two").unwrap();
        let second = compact_hand("AKxx KQx xxx Axx", "").unwrap();
        let text = format!("{}{}", first.to_text(), second.to_text());
        assert!(text.starts_with("Hand: # weak two\n\nK Q J x x x\nx x\n"));

        let blocks = read_hand_blocks(&mut LineReader::from_text(&text)).unwrap();
        assert_eq!(blocks, vec![first, second]);
    }

    #[test]
    fn test_merged_output_parses() {
        let blocks = read_hand_blocks(&mut LineReader::from_text(HANDS)).unwrap();
        let merged = merge_hands(TEMPLATE, &blocks);
        assert!(merged.contains("K Q J x x x\nx x\nA x x\nx x\n# weak two\n"));

        let mut reader = LineReader::from_text(&merged);
        let mut rng = StdRng::seed_from_u64(3);
        let mut count = 0;
        while let Some(exercise) = read_next_exercise(&mut reader, &mut rng).unwrap() {
            assert_eq!(exercise.hand.card_count(), 13);
            count += 1;
        }
        assert_eq!(count, 2);
    }
}
