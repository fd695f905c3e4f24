//! Errors raised while driving the menu.

use std::error::Error;
use std::fmt;
use std::io;

use weir_list::ListError;

use crate::shape::ParseSquareError;

/// Errors that can occur in a menu session.
///
/// Only [`CliError::Io`] and [`CliError::EndOfInput`] end a session; every
/// other variant is reported to the user and the loop continues.
#[derive(Debug)]
pub enum CliError {
    /// Reading input or writing output failed.
    Io(io::Error),
    /// The input stream ran out.
    EndOfInput,
    /// A token could not be read as the number a prompt asked for.
    InvalidNumber {
        /// The offending token.
        token: String,
    },
    /// A menu choice outside the offered set.
    UnknownCommand(i64),
    /// A negative index was entered.
    NegativeIndex {
        /// The requested index.
        index: i64,
        /// Length of the list at the time of the request.
        len: usize,
    },
    /// The entered coordinates do not form a square.
    Shape(ParseSquareError),
    /// The list rejected the operation.
    List(ListError),
}

impl CliError {
    /// Whether the session has to stop after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::Io(_) | Self::EndOfInput)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::EndOfInput => write!(f, "unexpected end of input"),
            Self::InvalidNumber { token } => write!(f, "'{token}' is not a number"),
            Self::UnknownCommand(c) => write!(f, "Wrong command: {c}"),
            Self::NegativeIndex { index, len } => {
                write!(f, "index {index} out of range for list of length {len}")
            }
            Self::Shape(e) => write!(f, "{e}"),
            Self::List(e) => write!(f, "{e}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Shape(e) => Some(e),
            Self::List(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<ParseSquareError> for CliError {
    fn from(e: ParseSquareError) -> Self {
        Self::Shape(e)
    }
}

impl From<ListError> for CliError {
    fn from(e: ListError) -> Self {
        Self::List(e)
    }
}
