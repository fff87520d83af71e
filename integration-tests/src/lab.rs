//! The two lab problems: a transcendental equation and `log₁₀` interpolation.

use std::f64::consts::LN_10;

use numlab_core::ScalarFunction;
use numlab_interpolate::hermite::{Derivatives, Error, Node};
use numlab_solvers::equation::modified_newton::Problem;

/// `f(x) = x² + 5 sin x − 1`.
pub fn equation(x: f64) -> f64 {
    x * x + 5.0 * x.sin() - 1.0
}

/// `f'(x) = 2x + 5 cos x`.
pub fn equation_slope(x: f64) -> f64 {
    2.0 * x + 5.0 * x.cos()
}

/// `f''(x) = 2 − 5 sin x`.
pub fn equation_curvature(x: f64) -> f64 {
    2.0 - 5.0 * x.sin()
}

/// The equation with both derivatives, ready for modified Newton.
pub fn equation_problem() -> Problem<impl ScalarFunction, impl ScalarFunction, impl ScalarFunction> {
    Problem::new(equation, equation_slope, equation_curvature)
}

/// Starting point for modified Newton near the negative root.
pub const NEWTON_START: f64 = -2.227;

pub const LAGRANGE_NODES: [f64; 15] = [
    1.0, 8.0, 15.0, 22.0, 29.0, 36.0, 43.0, 50.0, 57.0, 64.0, 71.0, 78.0, 85.0, 92.0, 100.0,
];

pub const HERMITE_NODES: [f64; 9] = [1.0, 13.0, 25.0, 38.0, 50.0, 62.0, 75.0, 87.0, 100.0];

pub const HERMITE_MULTIPLICITIES: [usize; 9] = [4, 4, 4, 4, 4, 4, 4, 4, 3];

/// Point at which both interpolants are checked against `log₁₀`.
pub const CONTROL_POINT: f64 = 45.0;

/// Hermite nodes paired with their multiplicities.
pub fn hermite_nodes() -> Vec<Node> {
    HERMITE_NODES
        .iter()
        .zip(HERMITE_MULTIPLICITIES)
        .map(|(&x, m)| Node::new(x, m))
        .collect()
}

/// `log₁₀` and its first three derivatives.
///
/// # Errors
///
/// Fails only if a registered order is unsupported.
pub fn log10_derivatives() -> Result<Derivatives<'static>, Error> {
    Derivatives::new(f64::log10)
        .with(1, |x: f64| 1.0 / (x * LN_10))?
        .with(2, |x: f64| -1.0 / (x * x * LN_10))?
        .with(3, |x: f64| 2.0 / (x.powi(3) * LN_10))
}
