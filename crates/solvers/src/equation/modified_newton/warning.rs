use std::fmt;

/// Non-fatal diagnostics raised while setting up the iteration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub enum Warning {
    /// The sufficient condition `f(x₀)·f''(x₀) > 0` does not hold.
    ConvergenceCondition {
        /// `f(x₀)`.
        value: f64,
        /// `f''(x₀)`.
        curvature: f64,
    },
    /// The contraction ratio estimate does not guarantee convergence.
    DivergenceRisk {
        /// Estimated `q₀`.
        q0: f64,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ConvergenceCondition { value, curvature } => write!(
                f,
                "f(x0)·f''(x0) > 0 does not hold (f = {value:e}, f'' = {curvature:e}); the method may diverge"
            ),
            Self::DivergenceRisk { q0 } => {
                write!(f, "q0 = {q0:.4} >= 1; convergence is not guaranteed")
            }
        }
    }
}
