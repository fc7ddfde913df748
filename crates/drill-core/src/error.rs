//! Error types for drill file parsing

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Result type for parsing operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Where in a drill file an error was detected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    /// File name, or `<input>` for in-memory sources
    pub source: String,
    /// 1-based number of the last line read (0 before any line)
    pub line: usize,
}

impl Location {
    pub fn new(source: impl Into<String>, line: usize) -> Self {
        Self {
            source: source.into(),
            line,
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.source, self.line)
    }
}

/// The error taxonomy, without the context payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedLine,
    UnexpectedEndOfStream,
    InvalidAuctionToken,
    InvariantViolation,
    Io,
}

/// A fatal problem in an authored drill file.
///
/// None of these are recoverable for the record being parsed; the file must
/// be fixed by hand.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The line does not match anything expected at this point in the grammar
    #[error("{location}: malformed line: {line:?}")]
    MalformedLine { location: Location, line: String },

    /// Input ran out in the middle of a record
    #[error("{location}: unexpected end of input")]
    UnexpectedEndOfStream { location: Location },

    /// A compact auction string could not be decoded
    #[error("{location}: invalid auction token at offset {offset} in {raw:?}")]
    InvalidAuctionToken {
        location: Location,
        raw: String,
        offset: usize,
    },

    /// Well-formed syntax describing an impossible record
    #[error("{location}: {message}")]
    InvariantViolation { location: Location, message: String },

    #[error("{location}: I/O error: {source}")]
    Io {
        location: Location,
        #[source]
        source: std::io::Error,
    },
}

impl ParseError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::MalformedLine { .. } => ErrorKind::MalformedLine,
            ParseError::UnexpectedEndOfStream { .. } => ErrorKind::UnexpectedEndOfStream,
            ParseError::InvalidAuctionToken { .. } => ErrorKind::InvalidAuctionToken,
            ParseError::InvariantViolation { .. } => ErrorKind::InvariantViolation,
            ParseError::Io { .. } => ErrorKind::Io,
        }
    }

    pub fn location(&self) -> &Location {
        match self {
            ParseError::MalformedLine { location, .. }
            | ParseError::UnexpectedEndOfStream { location }
            | ParseError::InvalidAuctionToken { location, .. }
            | ParseError::InvariantViolation { location, .. }
            | ParseError::Io { location, .. } => location,
        }
    }
}

/// Failure of the pure compact-auction decoder.
///
/// Carries no file position; record parsers lift it into
/// [`ParseError::InvalidAuctionToken`] once they know where the string came from.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid auction token at offset {offset} in {raw:?}")]
pub struct AuctionError {
    pub raw: String,
    pub offset: usize,
}

impl AuctionError {
    pub fn at(self, location: Location) -> ParseError {
        ParseError::InvalidAuctionToken {
            location,
            raw: self.raw,
            offset: self.offset,
        }
    }
}
