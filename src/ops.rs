//! Arithmetic operations
//!
//! This module implements the four calculator operations:
//! - `add`, `subtract`, `multiply`: total functions over `i64` with
//!   two's-complement (wrapping) semantics
//! - `divide`: floating-point quotient, rejecting a zero divisor
//!
//! ## Contract
//!
//! - Integer results wrap at the `i64` boundary; behavior is identical in
//!   every build profile.
//! - The quotient is IEEE-754 true division of the operands converted to
//!   `f64`; with a nonzero divisor it is always finite.
//! - Every call is independent and referentially transparent. The only
//!   side effect is a `tracing` event under the `calculator::ops` target.

use tracing::{trace, warn};

use crate::error::{Error, Result};

/// Add two integers, wrapping at the `i64` boundary.
///
/// # Examples
///
/// ```
/// assert_eq!(calculator::add(2, 3), 5);
/// assert_eq!(calculator::add(-1, 1), 0);
/// ```
pub fn add(a: i64, b: i64) -> i64 {
    let sum = a.wrapping_add(b);
    trace!(target: "calculator::ops", a, b, sum, "add");
    sum
}

/// Subtract `b` from `a`, wrapping at the `i64` boundary.
///
/// # Examples
///
/// ```
/// assert_eq!(calculator::subtract(5, 3), 2);
/// assert_eq!(calculator::subtract(0, 1), -1);
/// ```
pub fn subtract(a: i64, b: i64) -> i64 {
    let difference = a.wrapping_sub(b);
    trace!(target: "calculator::ops", a, b, difference, "subtract");
    difference
}

/// Multiply two integers, wrapping at the `i64` boundary.
///
/// # Examples
///
/// ```
/// assert_eq!(calculator::multiply(-2, 3), -6);
/// assert_eq!(calculator::multiply(7, 0), 0);
/// ```
pub fn multiply(a: i64, b: i64) -> i64 {
    let product = a.wrapping_mul(b);
    trace!(target: "calculator::ops", a, b, product, "multiply");
    product
}

/// Divide `a` by `b`, returning the quotient as an `f64`.
///
/// The quotient is IEEE-754 true division of the operands converted to
/// `f64` (`divide(7, 2) == Ok(3.5)`). Operands with magnitude above 2^53
/// lose precision in that conversion; the quotient is the division of the
/// converted values.
///
/// # Errors
///
/// Returns [`Error::DivisionByZero`] when `b` is zero. No quotient value
/// exists in that case.
///
/// # Examples
///
/// ```
/// assert_eq!(calculator::divide(10, 2), Ok(5.0));
/// assert_eq!(calculator::divide(7, 2), Ok(3.5));
/// assert!(calculator::divide(10, 0).is_err());
/// ```
pub fn divide(a: i64, b: i64) -> Result<f64> {
    if b == 0 {
        warn!(target: "calculator::ops", dividend = a, "division by zero rejected");
        return Err(Error::DivisionByZero { dividend: a });
    }

    let quotient = a as f64 / b as f64;
    trace!(target: "calculator::ops", a, b, quotient, "divide");
    Ok(quotient)
}
