//! Root finders for scalar equations `f(x) = 0`.
//!
//! See the [`equation`] module for the available solvers and the helpers that
//! locate a starting bracket.

pub mod equation;
