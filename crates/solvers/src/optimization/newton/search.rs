use betafit_core::{Derivatives, Observer};

use super::{
    Action, Config, Error, Event, GRADIENT_TOL, HESSIAN_SHIFT, Quantity, STEP_TOL, Solution,
    Status, linalg, line_search::backtrack,
};

/// Core damped Newton iteration.
pub(super) fn search<P, Obs>(
    problem: &P,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    P: Derivatives<2>,
    Obs: Observer<Event, Action>,
{
    let mut x0 = config.initial_point();
    let mut f0 = problem.objective(&x0).map_err(Error::problem)?;
    let mut gradient = gradient_at(problem, &x0, 0)?;

    for iter in 0..config.max_iters() {
        let mut hessian = hessian_at(problem, &x0, iter)?;
        linalg::regularize(&mut hessian, HESSIAN_SHIFT);

        let direction = match linalg::solve(&hessian, gradient) {
            Some(p) => p,
            None => {
                log::warn!(
                    "iteration {iter}: shifted Hessian {hessian:?} is singular, \
                     using steepest descent"
                );
                let event = Event::SingularHessian {
                    iter,
                    x: x0,
                    hessian,
                };
                if let Some(Action::StopEarly) = observer.observe(&event) {
                    return Ok(Solution {
                        status: Status::StoppedByObserver,
                        x: x0,
                        objective: f0,
                        gradient,
                        iters: iter,
                    });
                }
                gradient
            }
        };

        let step = backtrack(problem, &x0, f0, &direction).map_err(Error::problem)?;
        let x = step.x;
        gradient = gradient_at(problem, &x, iter)?;

        let event = Event::Iterated {
            iter,
            x,
            objective: step.objective,
            gradient,
            step_scale: step.step_scale,
            halvings: step.halvings,
        };

        let solution = |status| Solution {
            status,
            x,
            objective: step.objective,
            gradient,
            iters: iter + 1,
        };

        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(solution(Status::StoppedByObserver));
        }

        if gradient.iter().all(|g| g.abs() < GRADIENT_TOL) {
            return Ok(solution(Status::GradientConverged));
        }

        let moved = (x0[0] - x[0]).abs().max((x0[1] - x[1]).abs());
        if moved < STEP_TOL {
            let stalled = step.halvings > 0 && (step.exhausted() || step.objective >= f0);
            if stalled {
                log::warn!("iteration {iter}: line search stalled at {x:?}");
                return Ok(solution(Status::Stalled));
            }
            return Ok(solution(Status::StepConverged));
        }

        x0 = x;
        f0 = step.objective;

        if config.debug() && iter % config.report_interval() == 0 {
            log::info!("iteration {iter}: x = ({:.6}, {:.6})", x[0], x[1]);
        }
    }

    log::warn!(
        "not converged after {} iterations (x = {x0:?})",
        config.max_iters()
    );

    Ok(Solution {
        status: Status::MaxIters,
        x: x0,
        objective: f0,
        gradient,
        iters: config.max_iters(),
    })
}

fn gradient_at<P: Derivatives<2>>(
    problem: &P,
    x: &[f64; 2],
    iter: usize,
) -> Result<[f64; 2], Error> {
    let gradient = problem.gradient(x).map_err(Error::problem)?;
    if gradient.iter().all(|g| g.is_finite()) {
        Ok(gradient)
    } else {
        Err(Error::NonFinite {
            iter,
            x: *x,
            quantity: Quantity::Gradient,
        })
    }
}

fn hessian_at<P: Derivatives<2>>(
    problem: &P,
    x: &[f64; 2],
    iter: usize,
) -> Result<[[f64; 2]; 2], Error> {
    let hessian = problem.hessian(x).map_err(Error::problem)?;
    if hessian.iter().flatten().all(|h| h.is_finite()) {
        Ok(hessian)
    } else {
        Err(Error::NonFinite {
            iter,
            x: *x,
            quantity: Quantity::Hessian,
        })
    }
}
