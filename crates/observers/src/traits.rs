//! Capability traits for cross-solver observers.
//!
//! These traits abstract over solver-specific record and action types, so one
//! observer can drive both root finders.
//!
//! # Example
//!
//! ```rust
//! use numlab_core::Observer;
//! use numlab_observers::traits::{CanStopEarly, HasResidual};
//!
//! struct GoodEnough {
//!     tolerance: f64,
//!     min_iters: usize,
//!     iter: usize,
//! }
//!
//! impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for GoodEnough {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         self.iter += 1;
//!         if self.iter >= self.min_iters && event.residual().abs() < self.tolerance {
//!             return Some(A::stop_early());
//!         }
//!         None
//!     }
//! }
//! ```

use numlab_solvers::equation::{bisection, modified_newton};

/// An event that carries a residual value.
pub trait HasResidual {
    /// Returns the function value recorded for this event.
    fn residual(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the solver early.
    fn stop_early() -> Self;
}

impl HasResidual for bisection::Record {
    fn residual(&self) -> f64 {
        self.value
    }
}

impl HasResidual for modified_newton::Record {
    fn residual(&self) -> f64 {
        self.value
    }
}

impl CanStopEarly for bisection::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

impl CanStopEarly for modified_newton::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use numlab_core::Observer;
    use numlab_solvers::equation::modified_newton::Problem;

    /// Stops once `|f|` falls below a threshold.
    struct BelowResidual(f64);

    impl<E: HasResidual, A: CanStopEarly> Observer<E, A> for BelowResidual {
        fn observe(&mut self, event: &E) -> Option<A> {
            (event.residual().abs() < self.0).then(A::stop_early)
        }
    }

    #[test]
    fn one_observer_stops_both_solvers() {
        let f = |x: f64| x * x - 2.0;

        let bisection = bisection::solve(
            &f,
            [1.0, 2.0],
            &bisection::Config::new(1e-12, 200).expect("valid config"),
            BelowResidual(1e-2),
        )
        .expect("bisection should run");
        assert_eq!(bisection.status, bisection::Status::StoppedByObserver);
        let last = bisection.log.last().expect("at least one step");
        assert!(last.residual().abs() < 1e-2);

        let problem = Problem::new(f, |x: f64| 2.0 * x, |_: f64| 2.0);
        let newton = modified_newton::solve(
            &problem,
            1.5,
            [1.0, 2.0],
            &modified_newton::Config::new(1e-15, 100).expect("valid config"),
            BelowResidual(1e-6),
        )
        .expect("newton should run");
        assert_eq!(newton.status, modified_newton::Status::StoppedByObserver);
        let last = newton.log.last().expect("at least one step");
        assert!(last.residual().abs() < 1e-6);
    }
}
