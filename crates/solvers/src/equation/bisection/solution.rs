use super::Record;

/// Indicates how the bisection run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    /// The bracket half-width reached the tolerance, or a midpoint hit the
    /// root exactly.
    Converged,
    /// Reached the iteration limit without converging.
    MaxIters,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a bisection solve.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Solution {
    /// Final solver status.
    pub status: Status,
    /// Midpoint of the final bracket.
    pub root: f64,
    /// Function value at `root`.
    pub residual: f64,
    /// Number of bisections performed.
    pub iters: usize,
    /// Half-width of the final bracket, a bound on `|root - x*|`.
    pub error_bound: f64,
    /// Ordered log of every bisection step.
    pub log: Vec<Record>,
}

impl Solution {
    /// Returns true if the solver met its tolerance.
    #[must_use]
    pub fn is_converged(&self) -> bool {
        self.status == Status::Converged
    }
}
