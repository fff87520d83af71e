use numlab_core::ScalarFunction;

/// The function whose root is sought, with its first two derivatives.
///
/// Derivatives are supplied by the caller; nothing is differentiated
/// numerically or symbolically.
#[derive(Debug, Clone, Copy)]
pub struct Problem<F, D1, D2> {
    /// The function `f`.
    pub f: F,
    /// The first derivative `f'`.
    pub df: D1,
    /// The second derivative `f''`.
    pub d2f: D2,
}

impl<F, D1, D2> Problem<F, D1, D2>
where
    F: ScalarFunction,
    D1: ScalarFunction,
    D2: ScalarFunction,
{
    /// Groups a function with its first and second derivatives.
    pub fn new(f: F, df: D1, d2f: D2) -> Self {
        Self { f, df, d2f }
    }
}
