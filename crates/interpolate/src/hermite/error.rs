use thiserror::Error;

/// Errors that can occur when configuring or building a Hermite interpolant.
///
/// All of them are detected before any divided difference is computed.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("at least one node is required")]
    Empty,
    #[error("node is not finite: {x}")]
    NonFiniteNode { x: f64 },
    #[error("node at x = {x} has zero multiplicity")]
    ZeroMultiplicity { x: f64 },
    #[error("node at x = {x} appears more than once")]
    DuplicateNode { x: f64 },
    #[error("node at x = {x} has multiplicity {multiplicity}, at most {max} is supported")]
    UnsupportedMultiplicity {
        x: f64,
        multiplicity: usize,
        max: usize,
    },
    #[error("node at x = {x} needs a derivative of order {order}, which was not supplied")]
    MissingDerivative { x: f64, order: usize },
    #[error("derivative order {order} is not supported, at most {max} is")]
    UnsupportedDerivativeOrder { order: usize, max: usize },
}
