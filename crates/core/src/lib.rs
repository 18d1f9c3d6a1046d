//! Core traits for the betafit workspace.
//!
//! This crate defines the shared abstractions that solvers and models build on:
//!
//! - [`Objective`]: a scalar objective over `N` solver variables
//! - [`Derivatives`]: the gradient and Hessian of an [`Objective`]
//! - [`Observer`]: receives solver events and optionally returns control actions

mod observer;
mod problems;

pub use observer::Observer;
pub use problems::{Derivatives, Objective};
