//! Modified Newton's method with the derivative frozen at the initial point.
//!
//! # Algorithm
//!
//! Every step uses the slope at `x₀` rather than at the running point:
//!
//! ```text
//! xₙ₊₁ = xₙ − f(xₙ) / f'(x₀)
//! ```
//!
//! Before iterating, the solver checks the classical sufficient condition
//! `f(x₀)·f''(x₀) > 0` and estimates the contraction ratio
//! `q₀ = (M − m) / (M + m)` from the extremes of `|f'|` on a reference
//! interval. Both are diagnostics only: a violation is logged and recorded as
//! a [`Warning`], and the iteration still runs.
//!
//! # Termination
//!
//! - [`Status::Converged`]: a step `|xₙ₊₁ − xₙ|` fell below `eps`
//! - [`Status::Diverged`]: `|f(x)|` or `|x|` exceeded its [`Guards`] limit,
//!   or `f(x)` or `f'(x)` was not finite
//! - [`Status::FlatDerivative`]: `|f'(x)|` at the running point fell below
//!   the slope guard
//! - [`Status::MaxIters`]: the step budget ran out
//! - [`Status::StoppedByObserver`]: an observer returned
//!   [`Action::StopEarly`]
//!
//! Only setup problems are errors; every status above comes back as a
//! [`Solution`] holding the best point reached.

mod action;
mod config;
mod error;
mod problem;
mod record;
mod solution;
mod state;
mod warning;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use config::{Config, ConfigError, Guards, SAMPLES, ZERO_DERIVATIVE};
pub use error::Error;
pub use problem::Problem;
pub use record::Record;
pub use solution::{Solution, Status};
pub use warning::Warning;

use numlab_core::{Observer, ScalarFunction};
use tracing::{debug, warn};

use crate::equation::bounds::Bounds;

use state::State;

/// Finds a root of `problem.f` starting from `x0`.
///
/// `reference` is the interval on which `q₀` is estimated; it is normally the
/// bracket that `x0` was picked from.
///
/// # Errors
///
/// Returns an error before any step is taken if `x0` is not finite, the
/// reference interval is invalid, `|f'|` vanishes on the whole reference
/// interval, or `f'(x0)` is not finite or below [`ZERO_DERIVATIVE`] in
/// magnitude.
pub fn solve<F, D1, D2, Obs>(
    problem: &Problem<F, D1, D2>,
    x0: f64,
    reference: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarFunction,
    D1: ScalarFunction,
    D2: ScalarFunction,
    Obs: Observer<Record, Action>,
{
    if !x0.is_finite() {
        return Err(Error::NonFiniteStart { x0 });
    }

    let mut warnings = Vec::new();

    let value = problem.f.call(x0);
    let curvature = problem.d2f.call(x0);
    let condition = value * curvature;
    if condition.is_nan() || condition <= 0.0 {
        warn!(x0, value, curvature, "f(x0)·f''(x0) > 0 does not hold");
        warnings.push(Warning::ConvergenceCondition { value, curvature });
    }

    let q0 = contraction_ratio(&problem.df, reference)?;
    if q0 >= 1.0 {
        warn!(q0, "contraction ratio q0 >= 1, convergence is not guaranteed");
        warnings.push(Warning::DivergenceRisk { q0 });
    }

    let slope = problem.df.call(x0);
    if !slope.is_finite() {
        return Err(Error::NonFiniteDerivative {
            x0,
            derivative: slope,
        });
    }
    if slope.abs() < ZERO_DERIVATIVE {
        return Err(Error::ZeroDerivative {
            x0,
            derivative: slope,
        });
    }

    let guards = config.guards();
    let mut state = State::new(x0, config.eps(), q0, warnings);
    let mut x = x0;

    for iter in 1..=config.max_iters() {
        let value = problem.f.call(x);
        if !value.is_finite() || value.abs() > guards.value_limit || x.abs() > guards.x_limit {
            warn!(iter, x, value, "iterate left the admissible range, stopping");
            return Ok(state.into_solution(&problem.f, Status::Diverged, x));
        }

        let local_slope = problem.df.call(x);
        if !local_slope.is_finite() {
            warn!(iter, x, local_slope, "derivative is not finite, stopping");
            return Ok(state.into_solution(&problem.f, Status::Diverged, x));
        }
        if local_slope.abs() < guards.min_slope {
            warn!(iter, x, local_slope, "derivative too small, stopping");
            return Ok(state.into_solution(&problem.f, Status::FlatDerivative, x));
        }

        let next = x - value / slope;
        let record = Record {
            iter,
            x,
            value,
            step: (next - x).abs(),
        };
        debug!(
            iter,
            x,
            value,
            step = record.step,
            "modified Newton step"
        );

        let action = observer.observe(&record);
        state.push(record, next);

        if record.step < config.eps() {
            return Ok(state.into_solution(&problem.f, Status::Converged, next));
        }

        x = next;

        if let Some(Action::StopEarly) = action {
            return Ok(state.into_solution(&problem.f, Status::StoppedByObserver, x));
        }
    }

    warn!(max_iters = config.max_iters(), x, "iteration limit reached without convergence");
    Ok(state.into_solution(&problem.f, Status::MaxIters, x))
}

/// Runs modified Newton without observation.
///
/// # Errors
///
/// Returns an error if the iteration cannot start. See [`solve`].
pub fn solve_unobserved<F, D1, D2>(
    problem: &Problem<F, D1, D2>,
    x0: f64,
    reference: [f64; 2],
    config: &Config,
) -> Result<Solution, Error>
where
    F: ScalarFunction,
    D1: ScalarFunction,
    D2: ScalarFunction,
{
    solve(problem, x0, reference, config, ())
}

/// Estimates the contraction ratio `q₀ = (M − m) / (M + m)`.
///
/// `M` and `m` are the largest and smallest `|f'|` over [`SAMPLES`] equally
/// spaced points of `reference`, ignoring samples at or below
/// [`ZERO_DERIVATIVE`] and samples that are not finite.
///
/// # Errors
///
/// Returns an error if the interval is invalid or no sample has a usable
/// derivative magnitude.
pub fn contraction_ratio<D>(df: &D, reference: [f64; 2]) -> Result<f64, Error>
where
    D: ScalarFunction + ?Sized,
{
    let bounds = Bounds::new(reference)?;

    let (min, max) = bounds
        .sample_points(SAMPLES)
        .map(|x| df.call(x).abs())
        .filter(|slope| slope.is_finite() && *slope > ZERO_DERIVATIVE)
        .fold(None::<(f64, f64)>, |extremes, slope| match extremes {
            None => Some((slope, slope)),
            Some((min, max)) => Some((f64::min(min, slope), f64::max(max, slope))),
        })
        .ok_or(Error::DegenerateDerivative {
            left: bounds.left,
            right: bounds.right,
        })?;

    Ok((max - min) / (max + min))
}

/// Returns the a-priori step count
/// `n₀ = ⌈ln(|x₀ − x*| / eps) / ln(1 / q₀)⌉ + 1`.
///
/// Returns `None` unless `0 < q0 < 1`, and when the estimate is not finite
/// (for example `x0 == root`).
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn iteration_estimate(x0: f64, root: f64, eps: f64, q0: f64) -> Option<usize> {
    if q0.is_nan() || q0 <= 0.0 || q0 >= 1.0 {
        return None;
    }

    let estimate = ((x0 - root).abs() / eps).ln() / (1.0 / q0).ln();
    if !estimate.is_finite() {
        return None;
    }

    let n0 = estimate.ceil() + 1.0;
    Some(if n0 > 0.0 { n0 as usize } else { 0 })
}
