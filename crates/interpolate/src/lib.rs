//! Polynomial interpolation of scalar functions.
//!
//! - [`lagrange`]: the classical Lagrange form through distinct nodes
//! - [`hermite`]: Newton-form interpolation on nodes with multiplicity,
//!   matching derivatives up to order three
//! - [`compare`]: errors of an interpolant against the true function on a
//!   dense grid
//!
//! Both interpolants implement [`Interpolant`].

pub mod compare;
pub mod hermite;
pub mod lagrange;

mod interpolant;

pub use interpolant::Interpolant;
