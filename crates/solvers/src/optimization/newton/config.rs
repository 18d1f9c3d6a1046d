use thiserror::Error;

/// Configuration for the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    max_iters: usize,
    initial_point: [f64; 2],
    report_interval: usize,
    debug: bool,
}

/// Errors that can occur when validating a Newton solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("initial point must have exactly 2 components, got {len}")]
    Dimension { len: usize },

    #[error("initial point components must be finite and positive")]
    InitialPoint,

    #[error("report_interval must be at least 1")]
    ReportInterval,
}

impl Default for Config {
    fn default() -> Self {
        // Known-good values, unwrap is safe
        Self::new(2000, &[10.0, 10.0], 1000, false).unwrap()
    }
}

impl Config {
    /// Creates a new config with a validated initial point and report interval.
    ///
    /// # Errors
    ///
    /// Returns an error if `initial_point` does not have exactly two
    /// components, if any component is non-finite or not strictly positive,
    /// or if `report_interval` is zero.
    pub fn new(
        max_iters: usize,
        initial_point: &[f64],
        report_interval: usize,
        debug: bool,
    ) -> Result<Self, ConfigError> {
        let initial_point = validate_point(initial_point)?;
        if report_interval == 0 {
            return Err(ConfigError::ReportInterval);
        }

        Ok(Self {
            max_iters,
            initial_point,
            report_interval,
            debug,
        })
    }

    /// Returns a copy with a different iteration limit.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self { max_iters, ..self }
    }

    /// Returns a copy with a different initial point.
    ///
    /// # Errors
    ///
    /// Returns an error if the point is not two finite, positive components.
    pub fn with_initial_point(self, initial_point: &[f64]) -> Result<Self, ConfigError> {
        Ok(Self {
            initial_point: validate_point(initial_point)?,
            ..self
        })
    }

    /// Returns a copy with a different progress-report interval.
    ///
    /// # Errors
    ///
    /// Returns an error if `report_interval` is zero.
    pub fn with_report_interval(self, report_interval: usize) -> Result<Self, ConfigError> {
        if report_interval == 0 {
            return Err(ConfigError::ReportInterval);
        }
        Ok(Self {
            report_interval,
            ..self
        })
    }

    /// Returns a copy with progress reporting switched on or off.
    #[must_use]
    pub fn with_debug(self, debug: bool) -> Self {
        Self { debug, ..self }
    }

    /// Returns the maximum number of Newton iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }

    /// Returns the starting point of the solve.
    #[must_use]
    pub fn initial_point(&self) -> [f64; 2] {
        self.initial_point
    }

    /// Returns how many iterations separate two progress reports.
    #[must_use]
    pub fn report_interval(&self) -> usize {
        self.report_interval
    }

    /// Returns `true` if progress reports are enabled.
    #[must_use]
    pub fn debug(&self) -> bool {
        self.debug
    }
}

fn validate_point(point: &[f64]) -> Result<[f64; 2], ConfigError> {
    let point: [f64; 2] = point
        .try_into()
        .map_err(|_| ConfigError::Dimension { len: point.len() })?;

    if point.iter().any(|v| !v.is_finite() || *v <= 0.0) {
        return Err(ConfigError::InitialPoint);
    }
    Ok(point)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = Config::default();

        assert_eq!(config.max_iters(), 2000);
        assert_eq!(config.initial_point(), [10.0, 10.0]);
        assert_eq!(config.report_interval(), 1000);
        assert!(!config.debug());
    }

    #[test]
    fn rejects_wrong_dimension() {
        assert_eq!(
            Config::new(10, &[1.0, 2.0, 3.0], 1, false),
            Err(ConfigError::Dimension { len: 3 })
        );
        assert_eq!(
            Config::default().with_initial_point(&[1.0]),
            Err(ConfigError::Dimension { len: 1 })
        );
    }

    #[test]
    fn rejects_infeasible_initial_point() {
        for point in [[0.0, 1.0], [1.0, -2.0], [f64::NAN, 1.0], [1.0, f64::INFINITY]] {
            assert_eq!(
                Config::new(10, &point, 1, false),
                Err(ConfigError::InitialPoint),
                "point {point:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_zero_report_interval() {
        assert_eq!(
            Config::new(10, &[1.0, 1.0], 0, false),
            Err(ConfigError::ReportInterval)
        );
        assert_eq!(
            Config::default().with_report_interval(0),
            Err(ConfigError::ReportInterval)
        );
    }

    #[test]
    fn builder_copies_leave_original_untouched() {
        let base = Config::default();
        let tuned = base
            .with_max_iters(5)
            .with_debug(true)
            .with_initial_point(&[100_000.0, 1_000_000.0])
            .unwrap();

        assert_eq!(tuned.max_iters(), 5);
        assert!(tuned.debug());
        assert_eq!(tuned.initial_point(), [100_000.0, 1_000_000.0]);
        assert_eq!(base, Config::default());
    }
}
