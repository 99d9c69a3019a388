//! Calculator - four-function integer arithmetic with explicit errors
//!
//! This crate implements a single stateless component exposing four pure
//! operations:
//! - [`add`], [`subtract`], [`multiply`]: total functions over `i64` with
//!   two's-complement (wrapping) semantics
//! - [`divide`]: returns the quotient as an `f64` and fails with
//!   [`Error::DivisionByZero`] exactly when the divisor is zero
//!
//! # Quick Start
//!
//! ```
//! use calculator::{add, divide, subtract};
//!
//! assert_eq!(add(2, 3), 5);
//! assert_eq!(subtract(5, 3), 2);
//!
//! let quotient = divide(7, 2)?;
//! assert_eq!(quotient, 3.5);
//!
//! // A zero divisor is the only failure in the system.
//! assert!(divide(7, 0).is_err());
//! # Ok::<(), calculator::Error>(())
//! ```
//!
//! # Semantics
//!
//! Integer results wrap at the `i64` boundary in every build profile, so
//! all three integer operations are total. Division is IEEE-754 `f64`
//! true division of the converted operands; with a nonzero divisor the
//! quotient is always finite.
//!
//! Every operation is synchronous, pure, and stateless; calls may be made
//! concurrently from any number of threads without coordination. The
//! operations emit `tracing` events under the `calculator::ops` target;
//! consumers choose whether to install a subscriber.

#![warn(missing_docs)]
#![warn(clippy::all)]

// Module declarations
pub mod error;
pub mod ops;

// Re-export the public API at the crate root
pub use error::{Error, Result};
pub use ops::{add, divide, multiply, subtract};
