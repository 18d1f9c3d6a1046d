/// Events emitted by the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// An iteration finished and its line search accepted a point.
    Iterated {
        /// Zero-based iteration index.
        iter: usize,

        /// The accepted point.
        x: [f64; 2],

        /// Objective value at `x`.
        objective: f64,

        /// Gradient at `x`.
        gradient: [f64; 2],

        /// Scale applied to the Newton step (`1.0` is a full step).
        step_scale: f64,

        /// Number of halvings the line search performed.
        halvings: usize,
    },

    /// The shifted Hessian could not be solved against the gradient.
    ///
    /// The solver uses the steepest-descent direction for this iteration.
    SingularHessian {
        /// Zero-based iteration index.
        iter: usize,

        /// The point the iteration started from.
        x: [f64; 2],

        /// The shifted Hessian that failed to solve.
        hessian: [[f64; 2]; 2],
    },
}

impl Event {
    /// Returns the iteration index of this event.
    #[must_use]
    pub fn iter(&self) -> usize {
        match self {
            Self::Iterated { iter, .. } | Self::SingularHessian { iter, .. } => *iter,
        }
    }

    /// Returns the point associated with this event.
    #[must_use]
    pub fn x(&self) -> [f64; 2] {
        match self {
            Self::Iterated { x, .. } | Self::SingularHessian { x, .. } => *x,
        }
    }
}
