use std::cell::Cell;

use approx::assert_relative_eq;
use numlab_core::ScalarFunction;

use super::{
    Action, Config, Error, Problem, Record, Status, Warning, contraction_ratio,
    iteration_estimate, solve, solve_unobserved,
};

/// f(x) = x² − 2 with its derivatives.
fn sqrt_two() -> Problem<impl ScalarFunction, impl ScalarFunction, impl ScalarFunction> {
    Problem::new(|x: f64| x * x - 2.0, |x: f64| 2.0 * x, |_: f64| 2.0)
}

/// f(x) = x² + 1, which has no real root.
fn no_root() -> Problem<impl ScalarFunction, impl ScalarFunction, impl ScalarFunction> {
    Problem::new(|x: f64| x * x + 1.0, |x: f64| 2.0 * x, |_: f64| 2.0)
}

#[test]
fn converges_to_square_root_of_two() {
    let solution = solve_unobserved(&sqrt_two(), 1.5, [1.0, 2.0], &Config::default())
        .expect("should start");

    assert_eq!(solution.status, Status::Converged);
    assert!(solution.is_converged());
    assert!(solution.warnings.is_empty());
    assert_relative_eq!(solution.root, 2.0_f64.sqrt(), epsilon = 1e-6);
    assert!(solution.step.expect("steps were taken") < 1e-6);
    assert_eq!(solution.iters, solution.log.len());
    assert_eq!(solution.iterates.len(), solution.log.len());
    assert_relative_eq!(solution.root, *solution.iterates.last().expect("iterates"));
}

#[test]
fn derivative_stays_frozen_at_initial_point() {
    let solution = solve_unobserved(&sqrt_two(), 1.5, [1.0, 2.0], &Config::default())
        .expect("should start");

    // f'(1.5) = 3 is used for every step.
    let x1 = 1.5 - 0.25 / 3.0;
    let x2 = x1 - (x1 * x1 - 2.0) / 3.0;

    assert_relative_eq!(solution.iterates[0], x1, epsilon = 1e-15);
    assert_relative_eq!(solution.iterates[1], x2, epsilon = 1e-15);
    assert_relative_eq!(solution.log[1].x, x1, epsilon = 1e-15);
    assert_relative_eq!(solution.log[1].step, (x2 - x1).abs(), epsilon = 1e-15);
}

#[test]
fn contraction_ratio_uses_derivative_extremes() {
    // |f'| = 2x ranges over [2, 4] on [1, 2].
    let q0 = contraction_ratio(&|x: f64| 2.0 * x, [1.0, 2.0]).expect("valid interval");
    assert_relative_eq!(q0, 1.0 / 3.0, epsilon = 1e-12);

    let solution = solve_unobserved(&sqrt_two(), 1.5, [1.0, 2.0], &Config::default())
        .expect("should start");
    assert_relative_eq!(solution.q0, 1.0 / 3.0, epsilon = 1e-12);
}

#[test]
fn contraction_ratio_skips_vanishing_samples() {
    // The sample at x = 0 is ignored; the smallest remaining |f'| is 0.01.
    let q0 = contraction_ratio(&|x: f64| x, [-1.0, 1.0]).expect("valid interval");
    assert_relative_eq!(q0, 0.99 / 1.01, epsilon = 1e-9);
}

#[test]
fn warns_but_runs_when_condition_fails() {
    // f(1.3) < 0 while f'' > 0.
    let solution = solve_unobserved(&sqrt_two(), 1.3, [1.0, 2.0], &Config::default())
        .expect("should start");

    assert!(matches!(
        solution.warnings.as_slice(),
        [Warning::ConvergenceCondition { .. }]
    ));
    assert_eq!(solution.status, Status::Converged);
    assert_relative_eq!(solution.root, 2.0_f64.sqrt(), epsilon = 1e-6);
}

#[test]
fn zero_initial_derivative_is_a_setup_error() {
    let problem = Problem::new(|x: f64| x * x - 4.0, |x: f64| 2.0 * x, |_: f64| 2.0);

    let result = solve_unobserved(&problem, 0.0, [1.0, 3.0], &Config::default());

    assert!(matches!(result, Err(Error::ZeroDerivative { x0, .. }) if x0 == 0.0));
}

#[test]
fn infinite_initial_derivative_is_a_setup_error() {
    // f'(x) = 1 / (3·∛x²) is infinite at x0 = 0, which would freeze every step.
    let problem = Problem::new(
        |x: f64| x.cbrt() + 1.0,
        |x: f64| 1.0 / (3.0 * x.cbrt().powi(2)),
        |x: f64| -2.0 / (9.0 * x.cbrt().powi(5)),
    );

    let result = solve_unobserved(&problem, 0.0, [-2.0, -0.5], &Config::default());

    assert!(matches!(
        result,
        Err(Error::NonFiniteDerivative { x0, derivative }) if x0 == 0.0 && derivative.is_infinite()
    ));
}

#[test]
fn infinite_local_derivative_stops_as_diverged() {
    // The first step lands on x = 2, where f' is reported as infinite.
    let problem = Problem::new(
        |x: f64| x - 2.0,
        |x: f64| if x > 0.5 { f64::INFINITY } else { 1.0 },
        |_: f64| 0.0,
    );

    let solution = solve_unobserved(&problem, 0.0, [-1.0, 0.0], &Config::default())
        .expect("should start");

    assert_eq!(solution.status, Status::Diverged);
    assert!(!solution.is_converged());
    assert_eq!(solution.iters, 1);
    assert_relative_eq!(solution.root, 2.0);
}

#[test]
fn contraction_ratio_skips_non_finite_samples() {
    let df = |x: f64| if x < 0.0 { f64::INFINITY } else { 2.0 };
    let q0 = contraction_ratio(&df, [-1.0, 1.0]).expect("finite samples remain");
    assert!(q0.is_finite());
    assert_relative_eq!(q0, 0.0);

    let result = contraction_ratio(&|_: f64| f64::NAN, [-1.0, 1.0]);
    assert!(matches!(result, Err(Error::DegenerateDerivative { .. })));
}

#[test]
fn vanishing_derivative_on_reference_is_a_setup_error() {
    let calls = Cell::new(0usize);
    let problem = Problem::new(
        |_: f64| {
            calls.set(calls.get() + 1);
            1.0
        },
        |_: f64| 0.0,
        |_: f64| 0.0,
    );

    let result = solve_unobserved(&problem, 0.5, [0.0, 1.0], &Config::default());

    assert!(matches!(result, Err(Error::DegenerateDerivative { .. })));
    assert_eq!(calls.get(), 1, "only the condition check may evaluate f");
}

#[test]
fn rejects_invalid_setup_inputs() {
    let config = Config::default();

    let result = solve_unobserved(&sqrt_two(), f64::NAN, [1.0, 2.0], &config);
    assert!(matches!(result, Err(Error::NonFiniteStart { .. })));

    let result = solve_unobserved(&sqrt_two(), 1.5, [2.0, 2.0], &config);
    assert!(matches!(result, Err(Error::InvalidReference(_))));
}

#[test]
fn divergence_guard_stops_runaway_iterates() {
    let solution = solve_unobserved(&no_root(), 2.0, [1.0, 3.0], &Config::default())
        .expect("should start");

    assert_eq!(solution.status, Status::Diverged);
    assert!(!solution.is_converged());
    assert_eq!(solution.iters, 15);
    assert!(solution.root.abs() > 1e6);
    assert_relative_eq!(solution.root, *solution.iterates.last().expect("iterates"));
}

#[test]
fn flat_local_derivative_stops_iteration() {
    // From x0 = 1 the first step lands exactly on x = 0, where f' = 0.
    let solution = solve_unobserved(&no_root(), 1.0, [0.5, 2.0], &Config::default())
        .expect("should start");

    assert_eq!(solution.status, Status::FlatDerivative);
    assert_eq!(solution.iters, 1);
    assert_relative_eq!(solution.root, 0.0);
    assert_relative_eq!(solution.residual, 1.0);
}

#[test]
fn reports_iteration_limit() {
    let config = Config::new(1e-15, 2).expect("valid config");
    let solution = solve_unobserved(&sqrt_two(), 1.5, [1.0, 2.0], &config).expect("should start");

    assert_eq!(solution.status, Status::MaxIters);
    assert_eq!(solution.iters, 2);
    assert_relative_eq!(solution.root, solution.iterates[1]);
}

#[test]
fn observer_can_stop_iteration() {
    let mut seen = Vec::new();
    let observer = |record: &Record| {
        seen.push(record.iter);
        (record.iter == 2).then_some(Action::StopEarly)
    };

    let config = Config::new(1e-15, 50).expect("valid config");
    let solution =
        solve(&sqrt_two(), 1.5, [1.0, 2.0], &config, observer).expect("should stop cleanly");

    assert_eq!(solution.status, Status::StoppedByObserver);
    assert_eq!(solution.iters, 2);
    assert_eq!(seen, vec![1, 2]);
}

#[test]
fn iteration_estimate_requires_contraction() {
    assert_eq!(iteration_estimate(1.0, 0.0, 1e-3, 0.5), Some(11));
    assert_eq!(iteration_estimate(1.0, 0.0, 1e-3, 0.0), None);
    assert_eq!(iteration_estimate(1.0, 0.0, 1e-3, 1.0), None);
    assert_eq!(iteration_estimate(1.0, 1.0, 1e-3, 0.5), None);
}

#[test]
fn solution_estimate_uses_run_parameters() {
    let solution = solve_unobserved(&sqrt_two(), 1.5, [1.0, 2.0], &Config::default())
        .expect("should start");

    assert_eq!(
        solution.iteration_estimate(),
        iteration_estimate(1.5, solution.root, 1e-6, solution.q0)
    );
    assert!(solution.iteration_estimate().is_some());
}
