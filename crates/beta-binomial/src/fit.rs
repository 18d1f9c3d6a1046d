use betafit_core::Observer;
use betafit_solvers::optimization::newton::{self, Action, Config, Event, Status};
use serde::Serialize;
use thiserror::Error;

use crate::{
    likelihood::BetaBinomial,
    observations::{DataError, Observations},
};

/// Errors that can occur when fitting a Beta-Binomial prior.
#[derive(Debug, Error)]
pub enum FitError {
    /// The observations cannot be fit; no solution exists.
    #[error("invalid observations: {0}")]
    InvalidData(#[from] DataError),

    /// The solver failed numerically.
    #[error("solver failed: {0}")]
    Solver(#[from] newton::Error),
}

/// Fitted prior parameters and the solver's final state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Fit {
    pub status: Status,
    pub alpha: f64,
    pub beta: f64,
    pub iters: usize,
    pub objective: f64,
    pub gradient: [f64; 2],
    pub summary: Summary,
}

/// Aggregate statistics for a fit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub groups: usize,
    pub total_trials: f64,
    pub total_successes: f64,

    /// Pooled `successes / trials`, or `None` when there are no trials.
    pub observed_rate: Option<f64>,

    /// Prior mean `alpha / (alpha + beta)`.
    pub smoothed_rate: f64,
}

impl Summary {
    fn new(observations: &Observations, alpha: f64, beta: f64) -> Self {
        let total_trials = observations.total_trials();
        let total_successes = observations.total_successes();
        let observed_rate = (total_trials > 0.0).then(|| total_successes / total_trials);

        Self {
            groups: observations.len(),
            total_trials,
            total_successes,
            observed_rate,
            smoothed_rate: alpha / (alpha + beta),
        }
    }
}

/// Fits Beta-Binomial `(alpha, beta)` to per-group trial and success counts.
///
/// # Errors
///
/// Returns [`FitError::InvalidData`] if the counts are unusable and
/// [`FitError::Solver`] if the Newton iteration fails.
pub fn fit(trials: &[f64], successes: &[f64], config: &Config) -> Result<Fit, FitError> {
    fit_observed(trials, successes, config, ())
}

/// Fits like [`fit`], reporting solver events to `observer`.
///
/// # Errors
///
/// See [`fit`].
pub fn fit_observed<Obs>(
    trials: &[f64],
    successes: &[f64],
    config: &Config,
    observer: Obs,
) -> Result<Fit, FitError>
where
    Obs: Observer<Event, Action>,
{
    let model = BetaBinomial::new(Observations::new(trials, successes)?);
    solve(&model, config, observer)
}

/// Minimizes an already constructed model.
///
/// Use this to fit with a non-default regularization weight.
///
/// # Errors
///
/// Returns [`FitError::Solver`] if the Newton iteration fails.
pub fn solve<Obs>(model: &BetaBinomial, config: &Config, observer: Obs) -> Result<Fit, FitError>
where
    Obs: Observer<Event, Action>,
{
    let solution = newton::minimize(model, config, observer)?;
    let [alpha, beta] = solution.x;
    let summary = Summary::new(model.observations(), alpha, beta);

    if config.debug() {
        match summary.observed_rate {
            Some(rate) => log::info!(
                "observed rate {rate:.6} ({} / {})",
                summary.total_successes,
                summary.total_trials
            ),
            None => log::info!("observed rate undefined (no trials)"),
        }
        log::info!(
            "smoothed rate {:.6} (alpha = {alpha:.6}, beta = {beta:.6})",
            summary.smoothed_rate
        );
    }

    Ok(Fit {
        status: solution.status,
        alpha,
        beta,
        iters: solution.iters,
        objective: solution.objective,
        gradient: solution.gradient,
        summary,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn summary_statistics() {
        let obs = Observations::new(&[4.0, 6.0], &[1.0, 2.0]).unwrap();
        let summary = Summary::new(&obs, 1.0, 3.0);

        assert_eq!(summary.groups, 2);
        assert_eq!(summary.total_trials, 10.0);
        assert_eq!(summary.total_successes, 3.0);
        assert_relative_eq!(summary.observed_rate.unwrap(), 0.3);
        assert_relative_eq!(summary.smoothed_rate, 0.25);
    }

    #[test]
    fn observed_rate_undefined_without_trials() {
        let obs = Observations::new(&[0.0, 0.0], &[0.0, 0.0]).unwrap();
        let summary = Summary::new(&obs, 2.0, 2.0);

        assert_eq!(summary.observed_rate, None);
        assert_relative_eq!(summary.smoothed_rate, 0.5);
    }

    #[test]
    fn invalid_data_is_no_solution() {
        let config = Config::default();

        assert!(matches!(
            fit(&[], &[], &config),
            Err(FitError::InvalidData(DataError::Empty))
        ));
        assert!(matches!(
            fit(&[1.0, 2.0], &[0.0], &config),
            Err(FitError::InvalidData(DataError::LengthMismatch { .. }))
        ));
        assert!(matches!(
            fit(&[1.0], &[2.0], &config),
            Err(FitError::InvalidData(DataError::InvalidGroup { index: 0, .. }))
        ));
    }
}
