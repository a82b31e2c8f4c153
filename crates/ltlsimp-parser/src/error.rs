//! Parse errors.

use thiserror::Error;

/// Why a formula failed to parse. Offsets are byte positions in the input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Empty formula")]
    Empty,

    #[error("Unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },

    #[error("Integer literal '{literal}' at offset {offset} does not fit in 64 bits")]
    IntegerOverflow { literal: String, offset: usize },

    #[error("Unexpected '{found}' at offset {offset}, expected {expected}")]
    UnexpectedToken {
        found: String,
        expected: &'static str,
        offset: usize,
    },

    #[error("Unexpected end of input, expected {expected}")]
    UnexpectedEnd { expected: &'static str },

    #[error("Formula nests deeper than {limit} levels (at offset {offset})")]
    TooDeep { limit: usize, offset: usize },
}

impl ParseError {
    /// Byte offset the error points at, if any.
    pub fn offset(&self) -> Option<usize> {
        match self {
            ParseError::UnexpectedChar { offset, .. }
            | ParseError::IntegerOverflow { offset, .. }
            | ParseError::UnexpectedToken { offset, .. }
            | ParseError::TooDeep { offset, .. } => Some(*offset),
            ParseError::Empty | ParseError::UnexpectedEnd { .. } => None,
        }
    }
}
