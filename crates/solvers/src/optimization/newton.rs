//! Damped Newton method for two-variable minimization.
//!
//! # Algorithm
//!
//! Each iteration evaluates the Hessian at the current point and shifts its
//! diagonal so the smallest eigenvalue is at least [`HESSIAN_SHIFT`]. The
//! shifted matrix is positive definite, so the Newton step it produces is
//! always a descent direction, even where the true Hessian is indefinite.
//! Eigenvalues and the linear solve are computed in closed form for 2x2
//! matrices (see [`linalg`]).
//!
//! The full step is then shortened by a backtracking line search that halves
//! the step scale until the candidate both does not increase the objective
//! and keeps every component strictly positive. The search is bounded by
//! [`MAX_HALVINGS`] and the step-scale floor [`MIN_STEP_SCALE`]; when the
//! floor is reached the last candidate is accepted anyway.
//!
//! The solver stops when every gradient component is below [`GRADIENT_TOL`]
//! in absolute value, or when no component moved by more than [`STEP_TOL`].
//! A step-tolerance stop caused by a line search that ran down to the floor
//! is reported as [`Status::Stalled`] rather than as convergence.
//!
//! # Domain
//!
//! The line search treats `x > 0` (componentwise) as the feasible region, so
//! the initial point must be strictly positive. Objectives should return
//! `f64::INFINITY` outside their domain.
//!
//! # Numerical failures
//!
//! - A non-finite gradient or Hessian aborts the solve with
//!   [`Error::NonFinite`].
//! - A singular (or overflowing) shifted Hessian makes the solver fall back to
//!   the steepest-descent direction for that iteration and emit
//!   [`Event::SingularHessian`].
//!
//! # Observer Events
//!
//! The solver emits [`Event::Iterated`] once per completed iteration, and
//! [`Event::SingularHessian`] whenever the fallback direction is used.
//! Observers can return [`Action::StopEarly`] to halt immediately.

mod action;
mod config;
mod error;
mod event;
pub mod linalg;
mod line_search;
mod search;
mod solution;


pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::{Error, Quantity};
pub use event::Event;
pub use line_search::{LineSearch, MAX_HALVINGS, MIN_STEP_SCALE, backtrack};
pub use solution::{Solution, Status};

use betafit_core::{Derivatives, Observer};

use search::search;

/// Gradient tolerance: converged when `max(|g₀|, |g₁|)` drops below this.
pub const GRADIENT_TOL: f64 = 1e-5;

/// Step tolerance: converged when no component moves by this much or more.
pub const STEP_TOL: f64 = 1e-8;

/// Minimum eigenvalue enforced on the shifted Hessian.
pub const HESSIAN_SHIFT: f64 = 1e-6;

/// Finds a minimum of the objective using the damped Newton method.
///
/// The observer receives an [`Event`] for each iteration.
/// See the [module docs](self) for details on stopping rules and failures.
///
/// # Errors
///
/// Returns an error if the problem fails to evaluate, or if the gradient or
/// Hessian becomes non-finite.
pub fn minimize<P, Obs>(problem: &P, config: &Config, observer: Obs) -> Result<Solution, Error>
where
    P: Derivatives<2>,
    Obs: Observer<Event, Action>,
{
    search(problem, config, observer)
}

/// Finds a minimum of the objective without observer support.
///
/// This is a convenience wrapper around [`minimize`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the problem fails to evaluate, or if the gradient or
/// Hessian becomes non-finite.
pub fn minimize_unobserved<P>(problem: &P, config: &Config) -> Result<Solution, Error>
where
    P: Derivatives<2>,
{
    minimize(problem, config, ())
}
