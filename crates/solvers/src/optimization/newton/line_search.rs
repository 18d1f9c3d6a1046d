use betafit_core::Objective;

/// Step-scale floor: the line search stops halving once the scale reaches it.
pub const MIN_STEP_SCALE: f64 = 1e-16;

/// Upper bound on halvings per line search.
///
/// After 54 halvings the scale is `2⁻⁵⁴ < 1e-16`, so this bound and
/// [`MIN_STEP_SCALE`] agree.
pub const MAX_HALVINGS: usize = 54;

/// The outcome of a backtracking line search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSearch {
    /// The accepted point, `x0 − step_scale · p`.
    pub x: [f64; 2],

    /// Objective value at `x`.
    pub objective: f64,

    /// Scale applied to the full step.
    pub step_scale: f64,

    /// Number of times the scale was halved.
    pub halvings: usize,
}

impl LineSearch {
    /// Returns `true` if the search ran all the way down to the scale floor.
    ///
    /// The accepted point may then be infeasible or non-improving.
    #[must_use]
    pub fn exhausted(&self) -> bool {
        self.step_scale <= MIN_STEP_SCALE
    }
}

/// Backtracks along `x0 − a·p`, halving `a` from `1` until the candidate is
/// feasible (both components positive) and does not increase the objective.
///
/// `f0` must be the objective at `x0`. A NaN objective is never accepted.
/// If the scale reaches [`MIN_STEP_SCALE`] the last candidate is returned
/// regardless.
///
/// # Errors
///
/// Returns the problem's error if an objective evaluation fails.
pub fn backtrack<P>(
    problem: &P,
    x0: &[f64; 2],
    f0: f64,
    p: &[f64; 2],
) -> Result<LineSearch, P::Error>
where
    P: Objective<2>,
{
    let mut step_scale = 1.0;
    let mut x = step(x0, p, step_scale);
    let mut objective = problem.objective(&x)?;

    let mut halvings = 0;
    while halvings < MAX_HALVINGS
        && step_scale > MIN_STEP_SCALE
        && !is_acceptable(&x, objective, f0)
    {
        halvings += 1;
        step_scale *= 0.5;
        x = step(x0, p, step_scale);
        objective = problem.objective(&x)?;
    }

    log::trace!("line search: {halvings} halvings, scale {step_scale:e}, objective {objective}");

    Ok(LineSearch {
        x,
        objective,
        step_scale,
        halvings,
    })
}

fn step(x0: &[f64; 2], p: &[f64; 2], scale: f64) -> [f64; 2] {
    [x0[0] - scale * p[0], x0[1] - scale * p[1]]
}

fn is_acceptable(x: &[f64; 2], objective: f64, f0: f64) -> bool {
    x[0] > 0.0 && x[1] > 0.0 && objective <= f0
}
