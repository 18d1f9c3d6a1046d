use std::fmt;

/// Errors that can occur during a Newton solve.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("problem error: {0}")]
    Problem(Box<dyn std::error::Error + Send + Sync>),

    #[error("non-finite {quantity} at iteration {iter} (x = {x:?})")]
    NonFinite {
        iter: usize,
        x: [f64; 2],
        quantity: Quantity,
    },
}

impl Error {
    pub(super) fn problem<E>(error: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Problem(Box::new(error))
    }
}

/// The derivative that turned out non-finite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantity {
    Gradient,
    Hessian,
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gradient => f.write_str("gradient"),
            Self::Hessian => f.write_str("Hessian"),
        }
    }
}
