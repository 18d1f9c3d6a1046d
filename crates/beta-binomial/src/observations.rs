use thiserror::Error;

/// Errors that can occur when building an [`Observations`] set.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum DataError {
    #[error("no observation groups")]
    Empty,

    #[error("{trials} trial counts but {successes} success counts")]
    LengthMismatch { trials: usize, successes: usize },

    #[error(
        "group {index} has {successes} successes out of {trials} trials; \
         counts must be finite with 0 <= successes <= trials"
    )]
    InvalidGroup {
        index: usize,
        trials: f64,
        successes: f64,
    },

    #[error("regularization weight must be finite and non-negative, got {0}")]
    Regularization(f64),
}

/// Aggregated binomial counts, one `(trials, successes)` pair per group.
///
/// Every group satisfies `trials >= successes >= 0` with finite values.
#[derive(Debug, Clone, PartialEq)]
pub struct Observations {
    trials: Vec<f64>,
    successes: Vec<f64>,
}

impl Observations {
    /// Creates an observation set from parallel trial and success counts.
    ///
    /// # Errors
    ///
    /// Returns an error if the slices are empty, differ in length, or contain
    /// a group with non-finite counts, negative counts, or more successes than
    /// trials.
    pub fn new(trials: &[f64], successes: &[f64]) -> Result<Self, DataError> {
        if trials.len() != successes.len() {
            return Err(DataError::LengthMismatch {
                trials: trials.len(),
                successes: successes.len(),
            });
        }
        if trials.is_empty() {
            return Err(DataError::Empty);
        }

        if let Some((index, (&n, &s))) = trials
            .iter()
            .zip(successes)
            .enumerate()
            .find(|(_, (n, s))| !is_valid_group(**n, **s))
        {
            return Err(DataError::InvalidGroup {
                index,
                trials: n,
                successes: s,
            });
        }

        Ok(Self {
            trials: trials.to_vec(),
            successes: successes.to_vec(),
        })
    }

    /// Returns the number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.trials.len()
    }

    /// Always `false`: construction rejects empty sets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trials.is_empty()
    }

    /// Iterates over `(trials, successes)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.trials.iter().copied().zip(self.successes.iter().copied())
    }

    /// Returns the sum of trial counts across groups.
    #[must_use]
    pub fn total_trials(&self) -> f64 {
        self.trials.iter().sum()
    }

    /// Returns the sum of success counts across groups.
    #[must_use]
    pub fn total_successes(&self) -> f64 {
        self.successes.iter().sum()
    }
}

fn is_valid_group(trials: f64, successes: f64) -> bool {
    trials.is_finite() && successes.is_finite() && successes >= 0.0 && successes <= trials
}
