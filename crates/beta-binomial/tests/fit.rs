use approx::assert_relative_eq;
use betafit_beta_binomial::{BetaBinomial, FitError, Observations, fit, fit_observed, solve};
use betafit_solvers::optimization::newton::{Action, Config, Event, Status};

const VIEWS: [f64; 7] = [1.0, 2.0, 3.0, 4.0, 2.0, 3.0, 10.0];
const CLICKS: [f64; 7] = [0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 2.0];

fn reference_config() -> Config {
    Config::default()
        .with_initial_point(&[100_000.0, 1_000_000.0])
        .unwrap()
}

#[test]
fn reference_scenario_converges() {
    let fitted = fit(&VIEWS, &CLICKS, &reference_config()).unwrap();

    assert_eq!(fitted.status, Status::GradientConverged);
    assert!(fitted.iters < 100, "took {} iterations", fitted.iters);
    assert!(fitted.gradient.iter().all(|g| g.abs() < 1e-5));

    assert!((25.0..40.0).contains(&fitted.alpha), "alpha = {}", fitted.alpha);
    assert!((140.0..200.0).contains(&fitted.beta), "beta = {}", fitted.beta);
    assert_relative_eq!(fitted.summary.smoothed_rate, 0.16, epsilon = 0.01);

    assert_eq!(fitted.summary.groups, 7);
    assert_eq!(fitted.summary.total_trials, 25.0);
    assert_eq!(fitted.summary.total_successes, 4.0);
    assert_relative_eq!(fitted.summary.observed_rate.unwrap(), 0.16);
}

#[test]
fn starting_point_does_not_change_the_estimate() {
    let far = fit(&VIEWS, &CLICKS, &reference_config()).unwrap();
    let near = fit(&VIEWS, &CLICKS, &Config::default()).unwrap();

    assert_eq!(near.status, Status::GradientConverged);
    assert_relative_eq!(far.summary.smoothed_rate, near.summary.smoothed_rate, epsilon = 1e-3);
}

#[test]
fn objective_decreases_every_iteration() {
    let mut objectives = Vec::new();
    let observer = |event: &Event| -> Option<Action> {
        if let Event::Iterated { x, objective, .. } = *event {
            assert!(x[0] > 0.0 && x[1] > 0.0, "left the domain at {x:?}");
            objectives.push(objective);
        }
        None
    };

    let fitted = fit_observed(&VIEWS, &CLICKS, &reference_config(), observer).unwrap();

    assert_eq!(objectives.len(), fitted.iters);
    assert!(objectives.windows(2).all(|w| w[1] <= w[0]));
}

#[test]
fn repeated_fits_are_identical() {
    let config = reference_config();

    let first = fit(&VIEWS, &CLICKS, &config).unwrap();
    let second = fit(&VIEWS, &CLICKS, &config).unwrap();

    assert_eq!(first, second);
}

#[test]
fn invalid_input_has_no_solution() {
    let config = Config::default();

    assert!(matches!(fit(&[], &[], &config), Err(FitError::InvalidData(_))));
    assert!(matches!(
        fit(&VIEWS, &CLICKS[..3], &config),
        Err(FitError::InvalidData(_))
    ));
    assert!(matches!(
        fit(&[3.0], &[4.0], &config),
        Err(FitError::InvalidData(_))
    ));
}

#[test]
fn observer_can_stop_the_fit() {
    let observer = |event: &Event| match event {
        Event::Iterated { iter: 2, .. } => Some(Action::StopEarly),
        _ => None,
    };

    let fitted = fit_observed(&VIEWS, &CLICKS, &reference_config(), observer).unwrap();

    assert_eq!(fitted.status, Status::StoppedByObserver);
    assert_eq!(fitted.iters, 3);
}

#[test]
fn iteration_budget_is_respected() {
    let config = reference_config().with_max_iters(3);

    let fitted = fit(&VIEWS, &CLICKS, &config).unwrap();

    assert_eq!(fitted.status, Status::MaxIters);
    assert_eq!(fitted.iters, 3);
    assert!(fitted.alpha > 0.0 && fitted.beta > 0.0);
}

#[test]
fn custom_regularization_pulls_toward_origin() {
    let observations = Observations::new(&VIEWS, &CLICKS).unwrap();
    let weak = BetaBinomial::new(observations.clone());
    let strong = BetaBinomial::new(observations)
        .with_regularization(1e-2)
        .unwrap();

    let weak = solve(&weak, &Config::default(), ()).unwrap();
    let strong = solve(&strong, &Config::default(), ()).unwrap();

    assert!(strong.alpha + strong.beta < weak.alpha + weak.beta);
}

#[test]
fn serializes_to_json() {
    let fitted = fit(&VIEWS, &CLICKS, &reference_config()).unwrap();

    let json = serde_json::to_value(&fitted).unwrap();

    assert_eq!(json["status"], "gradient_converged");
    assert_eq!(json["summary"]["groups"], 7);
    assert!(json["alpha"].as_f64().unwrap() > 0.0);
}
