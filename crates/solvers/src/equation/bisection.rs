//! Bisection (dichotomy) for bracketed roots.
//!
//! # Algorithm
//!
//! Given a continuous `f` and a bracket `[a, b]` with `f(a)·f(b) < 0`, each
//! step evaluates the midpoint `c = (a + b) / 2` and keeps `[a, c]` when
//! `f(a)·f(c) < 0`, otherwise `[c, b]`. The run stops once the half-width is
//! at most `eps` or after `max_iters` steps, and reports the final midpoint.
//! A midpoint with `f(c) = 0` ends the run immediately with `c` as the root.
//!
//! # Observer Events
//!
//! The solver emits one [`Record`] per step, after the midpoint has been
//! evaluated and before the bracket is updated. Observers can return
//! [`Action::StopEarly`] to halt after the update.

mod action;
mod bracket;
mod config;
mod error;
mod record;
mod solution;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use record::Record;
pub use solution::{Solution, Status};

use numlab_core::{Observer, ScalarFunction};
use tracing::{debug, info};

use crate::equation::bounds::Bounds;

use bracket::Bracket;

/// Finds a root of `f` inside `bracket` using bisection.
///
/// The bracket may be given in either order.
/// The observer sees a [`Record`] for every step.
///
/// # Errors
///
/// Returns an error before any step is taken if the bracket is non-finite,
/// has zero width, or does not satisfy `f(a)·f(b) < 0`.
/// Returns [`Error::NonFiniteValue`] if `f` produces a non-finite value.
pub fn solve<F, Obs>(
    f: &F,
    bracket: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: ScalarFunction + ?Sized,
    Obs: Observer<Record, Action>,
{
    let bounds = Bounds::new(bracket)?;
    let left_value = finite_value(f, bounds.left)?;
    let right_value = finite_value(f, bounds.right)?;

    let mut bracket = Bracket::new(bounds, left_value, right_value)?;
    let mut log = Vec::new();

    while !bracket.is_converged(config.eps()) && log.len() < config.max_iters() {
        let c = bracket.midpoint();
        let value = finite_value(f, c)?;

        let record = Record {
            iter: log.len() + 1,
            a: bracket.left(),
            b: bracket.right(),
            c,
            value,
            width: bracket.width(),
        };
        debug!(
            iter = record.iter,
            a = record.a,
            b = record.b,
            c = record.c,
            value = record.value,
            "bisection step"
        );

        let action = observer.observe(&record);
        log.push(record);

        #[allow(clippy::float_cmp)]
        if value == 0.0 {
            return Ok(finish(c, value, record.width * 0.5, Status::Converged, log));
        }

        bracket.shrink(c, value);

        if let Some(Action::StopEarly) = action {
            return Ok(conclude(f, &bracket, Status::StoppedByObserver, log));
        }
    }

    let status = if bracket.is_converged(config.eps()) {
        Status::Converged
    } else {
        Status::MaxIters
    };

    Ok(conclude(f, &bracket, status, log))
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error if the bracket is invalid or `f` produces a non-finite
/// value. See [`solve`].
pub fn solve_unobserved<F>(f: &F, bracket: [f64; 2], config: &Config) -> Result<Solution, Error>
where
    F: ScalarFunction + ?Sized,
{
    solve(f, bracket, config, ())
}

/// Returns the a-priori number of bisections `⌈log₂((b − a) / eps)⌉`.
///
/// The estimate depends only on the initial bracket and tolerance. It is zero
/// when the bracket is already narrower than `eps`, and `None` if `eps` is
/// not finite and positive or the bracket is not finite.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn iteration_estimate(bracket: [f64; 2], eps: f64) -> Option<usize> {
    let width = (bracket[1] - bracket[0]).abs();
    if !width.is_finite() || !eps.is_finite() || eps <= 0.0 {
        return None;
    }

    let estimate = (width / eps).log2().ceil();
    Some(if estimate > 0.0 { estimate as usize } else { 0 })
}

fn finite_value<F: ScalarFunction + ?Sized>(f: &F, x: f64) -> Result<f64, Error> {
    let value = f.call(x);
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::NonFiniteValue { x, value })
    }
}

fn conclude<F: ScalarFunction + ?Sized>(
    f: &F,
    bracket: &Bracket,
    status: Status,
    log: Vec<Record>,
) -> Solution {
    let root = bracket.midpoint();
    finish(root, f.call(root), bracket.half_width(), status, log)
}

fn finish(root: f64, residual: f64, error_bound: f64, status: Status, log: Vec<Record>) -> Solution {
    info!(root, residual, iters = log.len(), ?status, "bisection finished");
    Solution {
        status,
        root,
        residual,
        iters: log.len(),
        error_bound,
        log,
    }
}
