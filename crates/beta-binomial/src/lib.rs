//! Beta-Binomial parameter estimation.
//!
//! Given per-group trial counts and success counts (for example page views
//! and clicks), [`fit`] estimates the shape parameters `(alpha, beta)` of the
//! Beta prior on each group's success probability. The estimate maximizes the
//! Beta-Binomial log-likelihood with a small L2 penalty, using the damped
//! Newton solver from `betafit-solvers`.
//!
//! ```no_run
//! use betafit_beta_binomial::fit;
//! use betafit_solvers::optimization::newton::Config;
//!
//! let views = [1.0, 2.0, 3.0, 4.0, 2.0, 3.0, 10.0];
//! let clicks = [0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 2.0];
//!
//! let fitted = fit(&views, &clicks, &Config::default())?;
//! println!("smoothed rate: {}", fitted.summary.smoothed_rate);
//! # Ok::<(), betafit_beta_binomial::FitError>(())
//! ```

mod fit;
mod likelihood;
mod observations;
pub mod special;

pub use fit::{Fit, FitError, Summary, fit, fit_observed, solve};
pub use likelihood::{BetaBinomial, REGULARIZATION};
pub use observations::{DataError, Observations};
