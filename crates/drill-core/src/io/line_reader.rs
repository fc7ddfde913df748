use crate::error::{Location, ParseError, Result};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Forward-only reader over a drill file.
///
/// Lines starting with `#` are dropped, trailing whitespace is stripped, and
/// blank lines are passed through because the grammars use them as
/// terminators. Leading whitespace is kept: suit and explanation lines are
/// recognised by it.
pub struct LineReader<R> {
    inner: R,
    source: String,
    line_number: usize,
    buf: String,
}

impl LineReader<BufReader<File>> {
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = path.display().to_string();
        let file = File::open(path).map_err(|source_err| ParseError::Io {
            location: Location::new(source.clone(), 0),
            source: source_err,
        })?;
        Ok(Self::new(BufReader::new(file), source))
    }
}

impl<'a> LineReader<&'a [u8]> {
    /// Reader over in-memory text, reported as `<input>`.
    pub fn from_text(text: &'a str) -> Self {
        Self::new(text.as_bytes(), "<input>")
    }
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R, source: impl Into<String>) -> Self {
        Self {
            inner,
            source: source.into(),
            line_number: 0,
            buf: String::new(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// 1-based number of the line most recently returned.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn location(&self) -> Location {
        Location::new(self.source.clone(), self.line_number)
    }

    /// Next non-comment line, or `None` at end of input.
    pub fn next_line(&mut self) -> Result<Option<String>> {
        loop {
            self.buf.clear();
            let read = self
                .inner
                .read_line(&mut self.buf)
                .map_err(|source| ParseError::Io {
                    location: Location::new(self.source.clone(), self.line_number + 1),
                    source,
                })?;
            if read == 0 {
                return Ok(None);
            }
            self.line_number += 1;
            if self.buf.starts_with('#') {
                continue;
            }
            let line = self.buf.trim_end().to_string();
            log::trace!("{}:{}: {:?}", self.source, self.line_number, line);
            return Ok(Some(line));
        }
    }

    /// Like [`next_line`](Self::next_line), but running out of input is an error.
    pub fn expect_line(&mut self) -> Result<String> {
        self.next_line()?
            .ok_or_else(|| ParseError::UnexpectedEndOfStream {
                location: self.location(),
            })
    }

    /// Next line with content, skipping blank lines.
    pub fn expect_content_line(&mut self) -> Result<String> {
        loop {
            let line = self.expect_line()?;
            if !line.is_empty() {
                return Ok(line);
            }
        }
    }

    pub(crate) fn malformed(&self, line: &str) -> ParseError {
        ParseError::MalformedLine {
            location: self.location(),
            line: line.to_string(),
        }
    }

    pub(crate) fn violation(&self, message: impl Into<String>) -> ParseError {
        ParseError::InvariantViolation {
            location: self.location(),
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_skips_comments_and_strips_trailing_space() {
        let mut reader = LineReader::from_text("# header\nDealer N  \n#note\n  A K x\n");
        assert_eq!(reader.next_line().unwrap().as_deref(), Some("Dealer N"));
        assert_eq!(reader.line_number(), 2);
        assert_eq!(reader.next_line().unwrap().as_deref(), Some("  A K x"));
        assert_eq!(reader.line_number(), 4);
        assert_eq!(reader.next_line().unwrap(), None);
    }

    #[test]
    fn test_blank_lines_are_returned() {
        let mut reader = LineReader::from_text("one\n\n   \ntwo");
        assert_eq!(reader.expect_line().unwrap(), "one");
        assert_eq!(reader.expect_line().unwrap(), "");
        assert_eq!(reader.expect_line().unwrap(), "");
        assert_eq!(reader.expect_line().unwrap(), "two");
    }

    #[test]
    fn test_content_line_skips_blanks() {
        let mut reader = LineReader::from_text("\n\n# c\n\nK Q J\n");
        assert_eq!(reader.expect_content_line().unwrap(), "K Q J");
        assert_eq!(reader.line_number(), 5);
    }

    #[test]
    fn test_end_of_input_when_required() {
        let mut reader = LineReader::from_text("only\n");
        reader.expect_line().unwrap();
        let err = reader.expect_line().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnexpectedEndOfStream);
        assert_eq!(err.location().line, 1);
    }

    #[test]
    fn test_open_missing_file() {
        let err = LineReader::open("/definitely/not/here.txt").err().unwrap();
        assert_eq!(err.kind(), ErrorKind::Io);
    }
}
