//! Error types for the calculator
//!
//! This module defines the single error condition in the system.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for calculator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for calculator operations
///
/// Division is the only fallible operation; the other three are total
/// functions with no failure mode.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Divisor operand was zero
    #[error("division by zero: {dividend} / 0 has no quotient")]
    DivisionByZero {
        /// Dividend of the rejected division
        dividend: i64,
    },
}
