//! The interactive drill loop, generic over its input and output so it can be
//! driven from a script in tests.

use crate::render::{format_auction, format_deal_info, format_hand, format_seat_line};
use drill_core::{Call, Exercise, Question, RunningAuction};
use log::debug;
use serde::Serialize;
use std::io::{self, BufRead, Write};

const QUIT: &str = "q";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Scorecard {
    pub asked: usize,
    pub correct: usize,
}

impl Scorecard {
    pub fn record(&mut self, correct: bool) {
        self.asked += 1;
        if correct {
            self.correct += 1;
        }
    }
}

impl std::fmt::Display for Scorecard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Score: {} of {}", self.correct, self.asked)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Quiz<I, O> {
    input: I,
    output: O,
    score: Scorecard,
}

impl<I: BufRead, O: Write> Quiz<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            score: Scorecard::default(),
        }
    }

    pub fn score(&self) -> Scorecard {
        self.score
    }

    /// Prints the score and hands back the output.
    pub fn finish(mut self) -> io::Result<(Scorecard, O)> {
        writeln!(self.output, "\n{}", self.score)?;
        Ok((self.score, self.output))
    }

    /// `None` when the player quits or input runs out.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let guess = line.trim();
        if guess == QUIT {
            return Ok(None);
        }
        Ok(Some(guess.to_string()))
    }

    fn verdict(&mut self, correct: bool, expected: Call, explanation: &[String]) -> io::Result<()> {
        self.score.record(correct);
        if correct {
            writeln!(self.output, "Correct")?;
        } else {
            writeln!(self.output, "No, the answer is {}", expected)?;
            for line in explanation {
                writeln!(self.output, "{}", line)?;
            }
        }
        writeln!(self.output)
    }

    pub fn ask_exercise(&mut self, exercise: &Exercise) -> io::Result<Flow> {
        debug!("exercise with keys {:?}", exercise.keys);
        let out = &mut self.output;
        writeln!(out)?;
        write!(out, "{}", format_deal_info(exercise.dealer, exercise.vulnerability))?;
        for line in &exercise.info {
            writeln!(out, "{}", line)?;
        }
        writeln!(out)?;
        write!(out, "{}", format_hand(&exercise.hand))?;
        writeln!(out)?;
        write!(out, "{}", format_auction(&exercise.auction))?;
        writeln!(out)?;

        let total = exercise.answers.len();
        for (i, answer) in exercise.answers.iter().enumerate() {
            let text = if total > 1 {
                format!("Your call ({} of {})? ", i + 1, total)
            } else {
                "Your call? ".to_string()
            };
            let Some(guess) = self.prompt(&text)? else {
                return Ok(Flow::Quit);
            };
            self.verdict(answer.accepts(&guess), answer.call, &answer.explanation)?;
        }
        Ok(Flow::Continue)
    }

    /// Walks the steps, growing the auction by each step's delta.
    pub fn ask_question(&mut self, question: &Question) -> io::Result<Flow> {
        let mut auction = RunningAuction::new(question.dealer);
        writeln!(self.output)?;
        write!(
            self.output,
            "{}",
            format_deal_info(question.dealer, question.vulnerability)
        )?;
        for step in &question.steps {
            auction.begin_step(&step.delta);
            writeln!(self.output)?;
            write!(self.output, "{}", format_auction(auction.slots()))?;
            writeln!(self.output)?;
            write!(
                self.output,
                "{}",
                format_seat_line(auction.next_seat(), question.vulnerability)
            )?;
            write!(self.output, "{}", format_hand(&question.hand))?;
            let Some(guess) = self.prompt("Your bid? ")? else {
                return Ok(Flow::Quit);
            };
            self.verdict(step.accepts(&guess), step.answer, &step.explanation)?;
        }
        Ok(Flow::Continue)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drill_core::io::{read_next_exercise, read_next_question, LineReader};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::io::Cursor;

    const EXERCISE: &str = "\
---
Keys: stayman
Dealer S
Vulnerable: None
Hand:
A K x x
Q x x
x x x
K J x

Auction:
 N    E    S    W
---- ---- ---- ----
-    -    1NT  Pass
?

Answers:
1 2C
Stayman, looking for a spade fit.

===
";

    const QUESTION: &str = "\
Question
Dealer N
Hand
 A K x x
 Q x x
 x x x
 K J x
Endh
Step
Auction 1np
Answer 2c
Explanation
 Stayman.
Ends
Step
Auction 2dp
Answer 3n
Explanation
 No spade fit, so game in notrump.
Ends
Endq
End
";

    fn exercise() -> Exercise {
        let mut rng = StdRng::seed_from_u64(5);
        read_next_exercise(&mut LineReader::from_text(EXERCISE), &mut rng)
            .unwrap()
            .unwrap()
    }

    fn question() -> Question {
        let mut rng = StdRng::seed_from_u64(5);
        read_next_question(&mut LineReader::from_text(QUESTION), &mut rng)
            .unwrap()
            .unwrap()
    }

    fn run<F>(input: &str, drive: F) -> (Scorecard, String, Flow)
    where
        F: FnOnce(&mut Quiz<Cursor<Vec<u8>>, Vec<u8>>) -> io::Result<Flow>,
    {
        let mut quiz = Quiz::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let flow = drive(&mut quiz).unwrap();
        let (score, out) = quiz.finish().unwrap();
        (score, String::from_utf8(out).unwrap(), flow)
    }

    #[test]
    fn test_exercise_correct() {
        let ex = exercise();
        let (score, out, flow) = run("2C\n", |q| q.ask_exercise(&ex));
        assert_eq!(flow, Flow::Continue);
        assert_eq!(score, Scorecard { asked: 1, correct: 1 });
        assert!(out.contains("Dealer: South"));
        assert!(out.contains("Correct"));
        assert!(out.contains("Score: 1 of 1"));
        assert_eq!(
            serde_json::to_string(&score).unwrap(),
            r#"{"asked":1,"correct":1}"#
        );
    }

    #[test]
    fn test_exercise_wrong_shows_explanation() {
        let ex = exercise();
        let (score, out, _) = run("2c\n", |q| q.ask_exercise(&ex));
        assert_eq!(score, Scorecard { asked: 1, correct: 0 });
        assert!(out.contains("No, the answer is 2C"));
        assert!(out.contains("Stayman, looking for a spade fit."));
    }

    #[test]
    fn test_question_steps() {
        let qu = question();
        let (score, out, flow) = run("2C\n2NT\n", |q| q.ask_question(&qu));
        assert_eq!(flow, Flow::Continue);
        assert_eq!(score, Scorecard { asked: 2, correct: 1 });
        assert!(out.contains("1NT    Pass   ?"));
        assert!(out.contains("You are South, not vulnerable"));
        assert!(out.contains("No, the answer is 3NT"));
    }

    #[test]
    fn test_quit_stops_early() {
        let qu = question();
        let (score, _, flow) = run("q\n", |q| q.ask_question(&qu));
        assert_eq!(flow, Flow::Quit);
        assert_eq!(score.asked, 0);

        let (_, _, flow) = run("", |q| q.ask_question(&qu));
        assert_eq!(flow, Flow::Quit);
    }
}
