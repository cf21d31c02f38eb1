//! Error types for lookup, validation, formatting and configuration.

use alloc::string::String;

use thiserror::Error;

use crate::card::Suit;

/// Errors that can occur when looking up elements of a sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Position is outside the sequence.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange {
        /// The requested position, as given by the caller.
        index: isize,
        /// Length of the sequence.
        len: usize,
    },
    /// Slice step is zero.
    #[error("slice step cannot be zero")]
    ZeroStep,
    /// Rank symbol is not one of the 13 known ranks.
    #[error("unknown rank: {0:?}")]
    UnknownRank(String),
    /// Suit name is not one of the 4 known suits.
    #[error("unknown suit: {0:?}")]
    UnknownSuit(String),
}

/// Errors that can occur when constructing a serial number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Input is not an integer.
    #[error("value must be an integer, got {0:?}")]
    NotAnInteger(String),
}

/// Errors that can occur when parsing or applying a format directive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Directive does not follow the format grammar.
    #[error("invalid format specifier: {0:?}")]
    InvalidSpec(String),
    /// Precision was given for an integer.
    #[error("precision not allowed in integer format specifier")]
    PrecisionNotAllowed,
    /// Presentation type is not valid for an integer.
    #[error("unknown format code {0:?} for integer")]
    UnknownType(char),
    /// Value has no character for the `c` presentation type.
    #[error("{0} is not a valid character code")]
    CharOutOfRange(i64),
    /// Grouping separator is not valid with the presentation type.
    #[error("cannot specify {grouping:?} with {ty:?}")]
    GroupingNotAllowed {
        /// The grouping separator.
        grouping: char,
        /// The presentation type.
        ty: char,
    },
}

/// Errors that can occur when building sort options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// A suit appears more than once in a ranking.
    #[error("suit {0} appears more than once in the ranking")]
    DuplicateSuit(Suit),
}
