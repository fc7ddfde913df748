//! Question files: one hand bid over several steps.
//!
//! ```text
//! Question
//! Dealer s
//! Vulnerable: N-S
//! Keywords: jacoby
//! Hand
//!  A K x x x
//!  K x
//!  Q x x
//!  x x x
//! Endh
//! Step
//! Auction 1sp
//! Answer 2NT
//! Explanation
//!  Jacoby 2NT: game forcing raise.
//! Ends
//! Endq
//! End
//! ```
//!
//! Blank lines are ignored everywhere. Suit and explanation lines are
//! recognised by their leading whitespace.

use crate::call::Call;
use crate::error::{ParseError, Result};
use crate::hand::Hand;
use crate::io::auction_codec::decode;
use crate::io::hand_parser::read_question_hand;
use crate::io::line_reader::LineReader;
use crate::question::{Question, Step};
use crate::seat::{Seat, Vulnerability};
use rand::Rng;
use std::io::BufRead;
use std::path::Path;

const RECORD_START: &str = "Question";
const FILE_END: &str = "End";
const END_OF_HAND: &str = "Endh";
const END_OF_STEP: &str = "Ends";
const END_OF_QUESTION: &str = "Endq";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuestionField {
    Dealer,
    Vulnerable,
    Keywords,
    Hand,
    Step,
    End,
}

impl QuestionField {
    fn classify(line: &str) -> Option<Self> {
        [
            (END_OF_QUESTION, QuestionField::End),
            ("Dealer", QuestionField::Dealer),
            ("Vulnerable", QuestionField::Vulnerable),
            ("Keywords", QuestionField::Keywords),
            ("Hand", QuestionField::Hand),
            ("Step", QuestionField::Step),
        ]
        .into_iter()
        .find(|(prefix, _)| line.starts_with(prefix))
        .map(|(_, field)| field)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StepField {
    Auction,
    Answer,
    Explanation,
}

impl StepField {
    fn classify(line: &str) -> Option<Self> {
        [
            ("Auction", StepField::Auction),
            ("Answer", StepField::Answer),
            ("Explanation", StepField::Explanation),
        ]
        .into_iter()
        .find(|(prefix, _)| line.starts_with(prefix))
        .map(|(_, field)| field)
    }
}

fn duplicate<B: BufRead>(reader: &LineReader<B>, what: &str) -> ParseError {
    reader.violation(format!("duplicate {} line", what))
}

/// A step answer: a written call (`2NT`, `pass`) or one call in compact
/// notation (`3n`, `p`).
fn parse_answer(token: &str) -> Option<Call> {
    Call::from_authored(token).or_else(|| match decode(token).ok()?.as_slice() {
        [call] => Some(*call),
        _ => None,
    })
}

fn read_step<B: BufRead>(reader: &mut LineReader<B>) -> Result<Step> {
    let mut delta: Option<Vec<Call>> = None;
    let mut answer: Option<Call> = None;
    loop {
        let line = reader.expect_content_line()?;
        let field = StepField::classify(&line).ok_or_else(|| reader.malformed(&line))?;
        match field {
            StepField::Auction => {
                if delta.is_some() {
                    return Err(duplicate(reader, "Auction"));
                }
                let raw = line.split_whitespace().nth(1).unwrap_or("");
                let calls = decode(raw).map_err(|e| e.at(reader.location()))?;
                delta = Some(calls);
            }
            StepField::Answer => {
                if answer.is_some() {
                    return Err(duplicate(reader, "Answer"));
                }
                let call = line
                    .split_whitespace()
                    .nth(1)
                    .and_then(parse_answer)
                    .ok_or_else(|| reader.malformed(&line))?;
                answer = Some(call);
            }
            StepField::Explanation => {
                let explanation = read_explanation(reader)?;
                let missing = |what: &str| reader.violation(format!("step has no {} line", what));
                return Ok(Step {
                    delta: delta.ok_or_else(|| missing("Auction"))?,
                    answer: answer.ok_or_else(|| missing("Answer"))?,
                    explanation,
                });
            }
        }
    }
}

/// Indented lines up to the end-of-step marker, which is consumed.
fn read_explanation<B: BufRead>(reader: &mut LineReader<B>) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    loop {
        let line = reader.expect_content_line()?;
        if line.starts_with(char::is_whitespace) {
            lines.push(line.trim_start().to_string());
        } else if line.starts_with(END_OF_STEP) {
            return Ok(lines);
        } else {
            return Err(reader.malformed(&line));
        }
    }
}

#[derive(Default)]
struct QuestionBuilder {
    dealer: Option<Seat>,
    vulnerability: Option<Vulnerability>,
    keywords: Option<Vec<String>>,
    hand: Option<Hand>,
    steps: Vec<Step>,
}

impl QuestionBuilder {
    fn apply<B: BufRead, R: Rng + ?Sized>(
        &mut self,
        field: QuestionField,
        line: &str,
        reader: &mut LineReader<B>,
        rng: &mut R,
    ) -> Result<bool> {
        match field {
            QuestionField::Dealer => {
                let value = line
                    .split_whitespace()
                    .nth(1)
                    .ok_or_else(|| reader.malformed(line))?;
                let dealer = value
                    .parse::<Seat>()
                    .map_err(|_| reader.violation(format!("unknown dealer {:?}", value)))?;
                if self.dealer.replace(dealer).is_some() {
                    return Err(duplicate(reader, "Dealer"));
                }
            }
            QuestionField::Vulnerable => {
                let value = line
                    .split_whitespace()
                    .nth(1)
                    .ok_or_else(|| reader.malformed(line))?;
                let vulnerability = value
                    .parse::<Vulnerability>()
                    .map_err(|_| reader.violation(format!("unknown vulnerability {:?}", value)))?;
                if self.vulnerability.replace(vulnerability).is_some() {
                    return Err(duplicate(reader, "Vulnerable"));
                }
            }
            QuestionField::Keywords => {
                let keywords: Vec<String> = line.split_whitespace().skip(1).map(str::to_string).collect();
                if self.keywords.replace(keywords).is_some() {
                    return Err(duplicate(reader, "Keywords"));
                }
            }
            QuestionField::Hand => {
                let hand = read_question_hand(reader, rng)?;
                let end = reader.expect_content_line()?;
                if !end.starts_with(END_OF_HAND) {
                    return Err(reader.malformed(&end));
                }
                if self.hand.replace(hand).is_some() {
                    return Err(duplicate(reader, "Hand"));
                }
            }
            QuestionField::Step => {
                let step = read_step(reader)?;
                self.steps.push(step);
            }
            QuestionField::End => return Ok(true),
        }
        Ok(false)
    }

    fn finish<B: BufRead>(self, reader: &LineReader<B>) -> Result<Question> {
        let missing = |what: &str| reader.violation(format!("question has no {}", what));
        if self.steps.is_empty() {
            return Err(missing("steps"));
        }
        Ok(Question {
            dealer: self.dealer.ok_or_else(|| missing("dealer"))?,
            vulnerability: self.vulnerability.unwrap_or_default(),
            keywords: self.keywords.unwrap_or_default(),
            hand: self.hand.ok_or_else(|| missing("hand"))?,
            steps: self.steps,
        })
    }
}

/// Reads the next question, or `Ok(None)` at an `End` line or end of input.
///
/// Between records only blank lines may appear.
pub fn read_next_question<B, R>(reader: &mut LineReader<B>, rng: &mut R) -> Result<Option<Question>>
where
    B: BufRead,
    R: Rng + ?Sized,
{
    loop {
        let Some(line) = reader.next_line()? else {
            return Ok(None);
        };
        match line.as_str() {
            "" => {}
            FILE_END => return Ok(None),
            RECORD_START => break,
            _ => return Err(reader.malformed(&line)),
        }
    }
    log::debug!("{}: question starts", reader.location());

    let mut builder = QuestionBuilder::default();
    loop {
        let line = reader.expect_content_line()?;
        let field = QuestionField::classify(&line).ok_or_else(|| reader.malformed(&line))?;
        if builder.apply(field, &line, reader, rng)? {
            break;
        }
    }
    let question = builder.finish(reader)?;
    log::debug!(
        "{}: question complete, {} steps",
        reader.location(),
        question.steps.len()
    );
    Ok(Some(question))
}

/// Iterator over the questions of one file. Stops after the first error.
pub struct Questions<B, R> {
    reader: LineReader<B>,
    rng: R,
    done: bool,
}

impl<B: BufRead, R: Rng> Questions<B, R> {
    pub fn new(reader: LineReader<B>, rng: R) -> Self {
        Self {
            reader,
            rng,
            done: false,
        }
    }
}

impl<B: BufRead, R: Rng> Iterator for Questions<B, R> {
    type Item = Result<Question>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let result = read_next_question(&mut self.reader, &mut self.rng).transpose();
        if !matches!(result, Some(Ok(_))) {
            self.done = true;
        }
        result
    }
}

/// Reads every question in `path`.
pub fn load_questions<R: Rng + ?Sized>(path: impl AsRef<Path>, rng: &mut R) -> Result<Vec<Question>> {
    let mut reader = LineReader::open(path)?;
    let mut questions = Vec::new();
    while let Some(question) = read_next_question(&mut reader, rng)? {
        questions.push(question);
    }
    Ok(questions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auction::{AuctionSlot, RunningAuction};
    use crate::error::ErrorKind;
    use crate::strain::Strain;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const QUESTION: &str = "\
Question
Dealer s
Keywords: jacoby

Hand
 A K x x x
 K x
 Q x x
 x x x
Endh
Step
Auction 1sp
Answer 2nt
Explanation
 Jacoby 2NT: a game forcing raise.
 Shows four trumps.
Ends
Step
Auction 3cp
Answer 4S
Explanation
 Nothing more to say.
Ends
Endq
";

    fn parse(text: &str) -> Result<Option<Question>> {
        let mut reader = LineReader::from_text(text);
        read_next_question(&mut reader, &mut StdRng::seed_from_u64(11))
    }

    fn with(find: &str, replace: &str) -> String {
        assert!(QUESTION.contains(find), "fixture lacks {:?}", find);
        QUESTION.replacen(find, replace, 1)
    }

    #[test]
    fn test_parses_question() {
        let question = parse(QUESTION).unwrap().unwrap();
        assert_eq!(question.dealer, Seat::South);
        assert_eq!(question.vulnerability, Vulnerability::None);
        assert_eq!(question.keywords, vec!["jacoby"]);
        assert_eq!(question.hand.distribution(), [5, 2, 3, 3]);
        assert_eq!(question.steps.len(), 2);

        let first = &question.steps[0];
        assert_eq!(
            first.delta,
            vec![
                Call::Bid {
                    level: 1,
                    strain: Strain::Spades
                },
                Call::Pass
            ]
        );
        assert!(first.accepts("2NT"));
        assert_eq!(
            first.explanation,
            vec!["Jacoby 2NT: a game forcing raise.", "Shows four trumps."]
        );
    }

    #[test]
    fn test_running_auction_across_steps() {
        let question = parse(QUESTION).unwrap().unwrap();
        let mut auction = RunningAuction::new(question.dealer);
        for step in &question.steps {
            auction.begin_step(&step.delta);
        }
        let tokens: Vec<String> = auction.slots().iter().map(AuctionSlot::to_string).collect();
        assert_eq!(tokens, ["-", "-", "1S", "Pass", "3C", "Pass", "?"]);
    }

    #[test]
    fn test_end_marker_and_eof_end_records() {
        assert!(parse("").unwrap().is_none());
        assert!(parse("\n\nEnd\nQuestion\n").unwrap().is_none());
    }

    #[test]
    fn test_reads_consecutive_questions() {
        let text = format!("{}\n{}End\n", QUESTION, QUESTION);
        let questions: Vec<_> = Questions::new(LineReader::from_text(&text), StdRng::seed_from_u64(2))
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(questions.len(), 2);
    }

    #[test]
    fn test_bad_compact_auction() {
        let err = parse(&with("Auction 3cp", "Auction 3cq")).unwrap_err();
        match err {
            ParseError::InvalidAuctionToken { raw, offset, location } => {
                assert_eq!(raw, "3cq");
                assert_eq!(offset, 2);
                assert_eq!(location.line, 19);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn test_unindented_suit_line() {
        let err = parse(&with(" K x\n", "K x\n")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedLine);
    }

    #[test]
    fn test_hand_needs_end_marker() {
        let err = parse(&with("Endh\n", "")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedLine);
    }

    #[test]
    fn test_explanation_needs_end_of_step() {
        let err = parse(&with(" Nothing more to say.\nEnds\n", " Nothing more to say.\nEndq\n")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedLine);
    }

    #[test]
    fn test_step_without_answer() {
        let err = parse(&with("Answer 2nt\n", "")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvariantViolation);
    }

    #[test]
    fn test_empty_auction_delta() {
        let question = parse(&with("Auction 1sp", "Auction")).unwrap().unwrap();
        assert!(question.steps[0].delta.is_empty());
    }

    #[test]
    fn test_unknown_line() {
        let err = parse(&with("Keywords: jacoby", "Tags: jacoby")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedLine);
    }

    #[test]
    fn test_compact_answers() {
        let question = parse(&with("Answer 4S", "Answer 4s")).unwrap().unwrap();
        assert_eq!(question.steps[1].answer.to_string(), "4S");
        let question = parse(&with("Answer 2nt", "Answer 3n")).unwrap().unwrap();
        assert_eq!(question.steps[0].answer.to_string(), "3NT");
        let question = parse(&with("Answer 2nt", "Answer p")).unwrap().unwrap();
        assert_eq!(question.steps[0].answer, Call::Pass);

        let err = parse(&with("Answer 2nt", "Answer 3n4s")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedLine);
    }

    #[test]
    fn test_stray_line_between_questions() {
        let err = parse(&with("Question\n", "Questoin\n")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MalformedLine);
        assert_eq!(err.location().line, 1);

        let text = format!("{}\nquestion\n", QUESTION);
        let results: Vec<_> = Questions::new(LineReader::from_text(&text), StdRng::seed_from_u64(2)).collect();
        assert_eq!(results.len(), 2);
        assert!(results[0].is_ok());
        assert_eq!(results[1].as_ref().unwrap_err().kind(), ErrorKind::MalformedLine);
    }

    #[test]
    fn test_bad_dealer_and_vulnerability() {
        let err = parse(&with("Dealer s", "Dealer q")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvariantViolation);
        assert_eq!(err.location().line, 2);

        let err = parse(&with("Keywords: jacoby", "Vulnerable: sometimes")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvariantViolation);
        assert_eq!(err.location().line, 3);

        let question = parse(&with("Keywords: jacoby", "Vulnerable: e-w")).unwrap().unwrap();
        assert_eq!(question.vulnerability, Vulnerability::EW);
    }

    #[test]
    fn test_truncated_question() {
        let err = parse(&with("Endq\n", "")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEndOfStream);
    }
}
