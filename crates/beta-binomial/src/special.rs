//! Special functions used by the likelihood.
//!
//! Thin wrappers over the `special` crate so the model depends on three
//! plain functions. Singularities (non-positive integers) produce the
//! infinities or NaNs of the underlying implementation; the likelihood only
//! evaluates them at strictly positive arguments.

use ::special::Gamma;

/// Natural logarithm of the absolute value of the gamma function.
#[must_use]
pub fn ln_gamma(x: f64) -> f64 {
    Gamma::ln_gamma(x).0
}

/// Digamma function, the first derivative of [`ln_gamma`].
#[must_use]
pub fn digamma(x: f64) -> f64 {
    x.digamma()
}

/// Trigamma function, the second derivative of [`ln_gamma`].
#[must_use]
pub fn trigamma(x: f64) -> f64 {
    x.trigamma()
}
