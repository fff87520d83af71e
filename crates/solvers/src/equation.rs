//! Solvers for scalar equations, finding roots of `f(x) = 0`.
//!
//! # Solvers
//!
//! - [`bisection`]: guaranteed convergence on a bracketed interval
//! - [`modified_newton`]: Newton iteration with the derivative frozen at the
//!   initial point
//!
//! # Helpers
//!
//! - [`scan`]: locate sign-change intervals to seed the solvers
//! - [`compare`]: check that two solvers agree on a root

mod bounds;

pub mod bisection;
pub mod compare;
pub mod modified_newton;
pub mod scan;

pub use bounds::BracketError;
