/// Indicates why the solver stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Status {
    /// Every gradient component fell below the gradient tolerance.
    GradientConverged,

    /// The accepted step moved no component by the step tolerance or more.
    StepConverged,

    /// The line search shrank the step to its floor without useful progress.
    Stalled,

    /// Reached the iteration limit without converging.
    MaxIters,

    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

impl Status {
    /// Returns `true` if the solver met one of its convergence tests.
    #[must_use]
    pub fn is_converged(self) -> bool {
        matches!(self, Self::GradientConverged | Self::StepConverged)
    }
}

/// The result of a Newton solve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,

    /// Best available estimate of the minimizer.
    pub x: [f64; 2],

    /// Objective value at `x`.
    pub objective: f64,

    /// Gradient at `x`.
    pub gradient: [f64; 2],

    /// Number of completed iterations.
    pub iters: usize,
}
