//! Error types for numeral formatting and parsing

use std::fmt;
use thiserror::Error;

/// Errors produced by the codec
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NumeralError {
    /// Unrecognized dialect name
    #[error("unknown dialect \"{value}\", expected one of: [\"old\", \"standard\"]")]
    InvalidArgument {
        /// The rejected dialect name
        value: String,
    },

    /// Input is not a well-formed numeral
    #[error("invalid numeral \"{input}\": {reason}")]
    InvalidNumber {
        /// The full text handed to the parser
        input: String,
        /// What was wrong with it
        reason: RejectReason,
    },

    /// A value outside 0..=999 reached the small-number stage.
    ///
    /// This signals a bug in the grouping code, never bad user input.
    #[error("bad input: {value} is outside the range of a thousand group")]
    InvalidInput {
        /// The out-of-range value
        value: u64,
    },
}

impl NumeralError {
    pub(crate) fn invalid_number(input: &str, reason: RejectReason) -> Self {
        log::trace!("rejecting {input:?}: {reason}");
        NumeralError::InvalidNumber {
            input: input.to_string(),
            reason,
        }
    }

    /// The rejection reason, if this is a parse failure
    pub fn reject_reason(&self) -> Option<&RejectReason> {
        match self {
            NumeralError::InvalidNumber { reason, .. } => Some(reason),
            _ => None,
        }
    }
}

/// Why the parser rejected a string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    /// Nothing left after removing titlo marks
    Empty,
    /// Two groups carry the same number of thousand marks
    DuplicateMultiplier,
    /// Group place values do not decrease from left to right
    MultiplierOrder,
    /// A thousands group cannot be split into thousands and ones
    MalformedThousandGroup,
    /// A group has thousand marks but no digit letters
    EmptyGroup,
    /// A digit letter occurs twice in one group
    DuplicateDigit(char),
    /// A character that is not a digit letter
    UnknownCharacter(char),
    /// The value does not fit in a 64-bit integer
    Overflow,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::Empty => write!(f, "empty numeral"),
            RejectReason::DuplicateMultiplier => {
                write!(f, "two groups share the same thousand multiplier")
            }
            RejectReason::MultiplierOrder => {
                write!(f, "thousand groups are not in descending order")
            }
            RejectReason::MalformedThousandGroup => {
                write!(f, "thousands group cannot be combined with a ones group")
            }
            RejectReason::EmptyGroup => write!(f, "group has no digits"),
            RejectReason::DuplicateDigit(ch) => write!(f, "digit '{ch}' repeated in a group"),
            RejectReason::UnknownCharacter(ch) => {
                write!(f, "'{ch}' (U+{:04X}) is not a numeral digit", *ch as u32)
            }
            RejectReason::Overflow => write!(f, "value is too large"),
        }
    }
}

/// Result type for codec operations
pub type Result<T> = std::result::Result<T, NumeralError>;
