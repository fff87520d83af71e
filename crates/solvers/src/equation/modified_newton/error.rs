use thiserror::Error;

use crate::equation::BracketError;

/// Errors that prevent the modified Newton iteration from starting.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("invalid reference interval: {0}")]
    InvalidReference(#[from] BracketError),

    #[error("initial point {x0} is not finite")]
    NonFiniteStart { x0: f64 },

    #[error("f'(x0) = {derivative} at x0 = {x0} is too close to zero to start")]
    ZeroDerivative { x0: f64, derivative: f64 },

    #[error("f'(x0) = {derivative} at x0 = {x0} is not finite")]
    NonFiniteDerivative { x0: f64, derivative: f64 },

    #[error("|f'| is close to zero everywhere on [{left}, {right}]; cannot estimate q0")]
    DegenerateDerivative { left: f64, right: f64 },
}
