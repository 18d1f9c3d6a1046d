use std::convert::Infallible;

use betafit_core::{Derivatives, Objective};

use crate::{
    observations::{DataError, Observations},
    special::{digamma, ln_gamma, trigamma},
};

/// Default L2 penalty weight λ in `½·λ·(α² + β²)`.
pub const REGULARIZATION: f64 = 1e-6;

/// Penalized negative Beta-Binomial log-likelihood over `x = [alpha, beta]`.
///
/// As an [`Objective`] it evaluates `−ℓ(α, β) + ½·λ·(α² + β²)`, which is
/// `+∞` whenever `α ≤ 0` or `β ≤ 0`.
#[derive(Debug, Clone, PartialEq)]
pub struct BetaBinomial {
    observations: Observations,
    lambda: f64,
}

impl BetaBinomial {
    /// Creates a model over `observations` with the default penalty weight.
    #[must_use]
    pub fn new(observations: Observations) -> Self {
        Self {
            observations,
            lambda: REGULARIZATION,
        }
    }

    /// Returns a copy with a different penalty weight.
    ///
    /// # Errors
    ///
    /// Returns an error if `lambda` is negative or non-finite.
    pub fn with_regularization(self, lambda: f64) -> Result<Self, DataError> {
        if !lambda.is_finite() || lambda < 0.0 {
            return Err(DataError::Regularization(lambda));
        }
        Ok(Self { lambda, ..self })
    }

    #[must_use]
    pub fn observations(&self) -> &Observations {
        &self.observations
    }

    #[must_use]
    pub fn regularization_weight(&self) -> f64 {
        self.lambda
    }

    /// Log-likelihood of the observations under Beta-Binomial(α, β).
    ///
    /// Binomial coefficients are constant in (α, β) and omitted.
    /// Returns `−∞` if either parameter is not strictly positive.
    #[must_use]
    pub fn log_likelihood(&self, alpha: f64, beta: f64) -> f64 {
        if alpha <= 0.0 || beta <= 0.0 {
            return f64::NEG_INFINITY;
        }

        let shared = ln_gamma(alpha + beta) - ln_gamma(alpha) - ln_gamma(beta);
        self.observations
            .iter()
            .map(|(n, s)| {
                shared + ln_gamma(alpha + s) + ln_gamma(beta + n - s)
                    - ln_gamma(alpha + beta + n)
            })
            .sum()
    }

    /// Partial derivatives of [`log_likelihood`](Self::log_likelihood).
    #[must_use]
    pub fn log_likelihood_gradient(&self, alpha: f64, beta: f64) -> [f64; 2] {
        let psi_sum = digamma(alpha + beta);
        let psi_alpha = digamma(alpha);
        let psi_beta = digamma(beta);

        self.observations
            .iter()
            .fold([0.0, 0.0], |[da, db], (n, s)| {
                let psi_total = digamma(alpha + beta + n);
                [
                    da + psi_sum - psi_alpha + digamma(alpha + s) - psi_total,
                    db + psi_sum - psi_beta + digamma(beta + n - s) - psi_total,
                ]
            })
    }

    /// Second partial derivatives of [`log_likelihood`](Self::log_likelihood).
    ///
    /// The result is symmetric.
    #[must_use]
    pub fn log_likelihood_hessian(&self, alpha: f64, beta: f64) -> [[f64; 2]; 2] {
        let tri_sum = trigamma(alpha + beta);
        let tri_alpha = trigamma(alpha);
        let tri_beta = trigamma(beta);

        let [daa, dab, dbb] =
            self.observations
                .iter()
                .fold([0.0, 0.0, 0.0], |[daa, dab, dbb], (n, s)| {
                    let tri_total = trigamma(alpha + beta + n);
                    [
                        daa + tri_sum - tri_alpha + trigamma(alpha + s) - tri_total,
                        dab + tri_sum - tri_total,
                        dbb + tri_sum - tri_beta + trigamma(beta + n - s) - tri_total,
                    ]
                });

        [[daa, dab], [dab, dbb]]
    }

    /// The L2 penalty `½·λ·(α² + β²)`.
    #[must_use]
    pub fn regularization(&self, x: &[f64; 2]) -> f64 {
        0.5 * self.lambda * (x[0].powi(2) + x[1].powi(2))
    }

    #[must_use]
    pub fn regularization_gradient(&self, x: &[f64; 2]) -> [f64; 2] {
        [self.lambda * x[0], self.lambda * x[1]]
    }

    #[must_use]
    pub fn regularization_hessian(&self, _x: &[f64; 2]) -> [[f64; 2]; 2] {
        [[self.lambda, 0.0], [0.0, self.lambda]]
    }
}

impl Objective<2> for BetaBinomial {
    type Error = Infallible;

    fn objective(&self, x: &[f64; 2]) -> Result<f64, Self::Error> {
        Ok(-self.log_likelihood(x[0], x[1]) + self.regularization(x))
    }
}

impl Derivatives<2> for BetaBinomial {
    fn gradient(&self, x: &[f64; 2]) -> Result<[f64; 2], Self::Error> {
        let g = self.log_likelihood_gradient(x[0], x[1]);
        let r = self.regularization_gradient(x);
        Ok([-g[0] + r[0], -g[1] + r[1]])
    }

    fn hessian(&self, x: &[f64; 2]) -> Result<[[f64; 2]; 2], Self::Error> {
        let h = self.log_likelihood_hessian(x[0], x[1]);
        let r = self.regularization_hessian(x);
        Ok([
            [-h[0][0] + r[0][0], -h[0][1] + r[0][1]],
            [-h[1][0] + r[1][0], -h[1][1] + r[1][1]],
        ])
    }
}
