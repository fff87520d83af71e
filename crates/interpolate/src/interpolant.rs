use ndarray::Array1;

/// A polynomial that can be evaluated at arbitrary points.
pub trait Interpolant {
    /// Evaluates the interpolant at `x`.
    fn evaluate(&self, x: f64) -> f64;

    /// Evaluates the interpolant at every point of `grid`.
    fn evaluate_grid(&self, grid: &Array1<f64>) -> Array1<f64> {
        grid.mapv(|x| self.evaluate(x))
    }
}
