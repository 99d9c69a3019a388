//! Arithmetic Conformance Test Suite
//!
//! Locks in the behavioral contract of the four operations.
//!
//! ## Test Tier Structure
//!
//! - **Tier 1: Concrete Scenarios** (fixed input/output rows)
//!   One module per operation; each test pins a documented row.
//!
//! - **Tier 2: Algebraic Laws** (hold over the full `i64` domain)
//!   Commutativity, anti-commutativity, identities, annihilation.
//!   Deterministic grid checks plus property tests.
//!
//! - **Tier 3: Error Surface** (the single failure mode)
//!   `DivisionByZero` trigger condition, payload, message, propagation.
//!
//! ## Running Tests
//!
//! ```bash
//! # Run the whole suite
//! cargo test --test arithmetic
//!
//! # Run one tier
//! cargo test --test arithmetic scenarios
//! cargo test --test arithmetic algebra
//! cargo test --test arithmetic error_handling
//! ```
