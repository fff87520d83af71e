/// A real-valued function of one real variable.
///
/// Solvers and interpolators only ever evaluate the function; they never
/// inspect or mutate it. Closures of the form `Fn(f64) -> f64` implement
/// this trait automatically, so derivatives are supplied the same way as the
/// function itself.
pub trait ScalarFunction {
    /// Evaluates the function at `x`.
    fn call(&self, x: f64) -> f64;
}

/// Blanket implementation for plain functions and closures.
impl<F> ScalarFunction for F
where
    F: Fn(f64) -> f64,
{
    fn call(&self, x: f64) -> f64 {
        self(x)
    }
}
