//! Error types for polynomial construction and S-box parsing.

use thiserror::Error;

/// Rejected reduction polynomial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolynomialError {
    /// The value is not a degree-8 polynomial (outside `0x100..=0x1ff`).
    #[error("reduction polynomial {0:#x} is not of degree 8 (expected 0x100..=0x1ff)")]
    Degree(u16),
}

/// Failure while reading an S-box in the tab-separated text format.
#[derive(Debug, Error)]
pub enum SBoxFormatError {
    /// Fewer than 256 values were present.
    #[error("incomplete S-box: found {found} of 256 entries")]
    Incomplete {
        /// Number of values read before the input ended.
        found: usize,
    },
    /// A token could not be parsed as a decimal integer.
    #[error("entry {index}: invalid token {token:?}")]
    InvalidToken {
        /// Position of the offending entry.
        index: usize,
        /// The token as it appeared in the input.
        token: String,
    },
    /// A value does not fit in a byte.
    #[error("entry {index}: value {value} is out of range 0..=255")]
    OutOfRange {
        /// Position of the offending entry.
        index: usize,
        /// Parsed value.
        value: u64,
    },
    /// More than 256 values were present.
    #[error("unexpected data after the 256th entry")]
    TrailingData,
    /// Underlying reader failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
