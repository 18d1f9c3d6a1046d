/// Defines a minimization objective over `N` solver variables.
///
/// Solvers search for the `x` that minimizes this objective. Returning
/// `f64::INFINITY` marks `x` as outside the objective's domain, which lets a
/// line search reject the point with a plain comparison.
///
/// The const generic `N` is the number of solver variables.
/// For example, `N = 2` represents a two-parameter fit.
pub trait Objective<const N: usize> {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Computes the objective value at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Self::Error`] if the objective cannot be computed.
    fn objective(&self, x: &[f64; N]) -> Result<f64, Self::Error>;
}

/// First and second derivatives of an [`Objective`].
///
/// This is the capability second-order solvers depend on. Implementors provide
/// the gradient and the (symmetric) Hessian of the objective; solvers never
/// need to know the concrete model behind them, so synthetic problems can be
/// substituted in tests.
pub trait Derivatives<const N: usize>: Objective<N> {
    /// Computes the gradient of the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Objective::Error`] if the gradient cannot be computed.
    fn gradient(&self, x: &[f64; N]) -> Result<[f64; N], Self::Error>;

    /// Computes the Hessian of the objective at `x`.
    ///
    /// # Errors
    ///
    /// Returns [`Objective::Error`] if the Hessian cannot be computed.
    fn hessian(&self, x: &[f64; N]) -> Result<[[f64; N]; N], Self::Error>;
}
