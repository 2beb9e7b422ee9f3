//! Error types for the emagram crate.
use crate::parse::LINE_WIDTH;
use std::fmt;

/// Error type for the crate.
///
/// All variants describe a structural problem with the text body of a sounding. They are
/// fatal to the parse that raised them, the text is not in the format the archive publishes
/// and no partial sounding is returned.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ParseError {
    /// A non-blank data line did not have the expected fixed width.
    WrongLineLength {
        /// Zero based line number within the text body.
        line: usize,
        /// The length of the offending line in bytes.
        length: usize,
    },
    /// A field that maps to an output column was non-blank but was not a number.
    MalformedNumber {
        /// Zero based line number within the text body.
        line: usize,
        /// Zero based column index within the line.
        column: usize,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ParseError::WrongLineLength { line, length } => write!(
                f,
                "line {}: data lines must be {} characters wide, found {}",
                line, LINE_WIDTH, length
            ),
            ParseError::MalformedNumber { line, column } => write!(
                f,
                "line {}, column {}: field is not a valid number",
                line, column
            ),
        }
    }
}

impl std::error::Error for ParseError {}

/// Shorthand for results.
pub type Result<T> = std::result::Result<T, ParseError>;
