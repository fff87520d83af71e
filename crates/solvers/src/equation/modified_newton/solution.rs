use super::{Record, Warning, iteration_estimate};

/// Indicates how the modified Newton run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// A step fell below the tolerance.
    Converged,
    /// Reached the iteration limit without converging.
    MaxIters,
    /// `|f(x)|` or `|x|` exceeded its limit, or `f(x)` or `f'(x)` was not finite.
    Diverged,
    /// `|f'(x)|` at the running point fell below the slope guard.
    FlatDerivative,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a modified Newton solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Root estimate: the converged iterate, or the last point reached.
    pub root: f64,
    /// Function value at `root`.
    pub residual: f64,
    /// Number of completed steps.
    pub iters: usize,
    /// Magnitude of the last step, if any step was taken.
    pub step: Option<f64>,
    /// Initial point.
    pub x0: f64,
    /// Step tolerance used for the run.
    pub eps: f64,
    /// Contraction ratio estimated on the reference interval.
    pub q0: f64,
    /// Setup diagnostics that did not prevent the run.
    pub warnings: Vec<Warning>,
    /// Ordered log of every step.
    pub log: Vec<Record>,
    /// Every new iterate `xₙ₊₁`, in order.
    pub iterates: Vec<f64>,
}

impl Solution {
    /// Returns true if the solver met its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }

    /// Returns the a-priori step count for this run's `x0`, `eps` and `q0`,
    /// taking `root` as the exact root.
    ///
    /// See [`iteration_estimate`] for when this is unavailable.
    #[must_use]
    pub fn iteration_estimate(&self) -> Option<usize> {
        iteration_estimate(self.x0, self.root, self.eps, self.q0)
    }
}
