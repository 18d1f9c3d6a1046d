//! Numerical solvers for betafit.
//!
//! Solvers are grouped by problem kind. Each solver lives in its own module
//! with a validated `Config`, an `Error` type, observer `Event`s and
//! `Action`s, and a `Solution` carrying the final status.

pub mod optimization;
