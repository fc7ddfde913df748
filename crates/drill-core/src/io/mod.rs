//! Readers for the drill file formats.
//!
//! Both formats are line oriented and share the [`LineReader`], the compact
//! auction codec, and the suit-line parser. A file is a sequence of records;
//! the `read_next_*` functions return `Ok(None)` once no further record start
//! is found.

pub mod auction_codec;
pub mod exercise;
pub mod hand_parser;
pub mod line_reader;
pub mod question;
pub mod template;

pub use auction_codec::{decode, seat_padding};
pub use exercise::{load_exercises, read_next_exercise, Exercises};
pub use line_reader::LineReader;
pub use question::{load_questions, read_next_question, Questions};
pub use template::{compact_hand, merge_hands, read_hand_blocks, HandBlock};
