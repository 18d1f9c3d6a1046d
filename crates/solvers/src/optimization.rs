//! Solvers for optimization problems: minimizing an objective.
//!
//! An [`Objective`] maps solver variables `x: [f64; N]` to a scalar value, and
//! [`Derivatives`] adds its gradient and Hessian. Solvers in this module search
//! for the `x` that minimizes that objective.
//!
//! # Solvers
//!
//! - [`newton`]: damped Newton method with an eigenvalue-corrected Hessian and
//!   a feasibility-aware backtracking line search, for two variables
//!
//! [`Objective`]: betafit_core::Objective
//! [`Derivatives`]: betafit_core::Derivatives

pub mod newton;
