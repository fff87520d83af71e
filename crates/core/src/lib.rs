//! Core traits shared by the numlab solvers and interpolators.
//!
//! - [`ScalarFunction`]: a real-valued function of one real variable
//! - [`Observer`]: receives per-iteration events and optionally returns
//!   control actions

mod function;
mod observer;

pub use function::ScalarFunction;
pub use observer::Observer;
