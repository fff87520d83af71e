//! Interpolation error against the true function.
//!
//! [`Comparison`] holds the `(grid, exact, approx)` triple a plotting or
//! reporting consumer needs, and [`PointError`] the same data for a single
//! control point.

use ndarray::Array1;
use numlab_core::ScalarFunction;

use crate::Interpolant;

/// True and interpolated values on an evaluation grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    pub grid: Array1<f64>,
    pub exact: Array1<f64>,
    pub approx: Array1<f64>,
}

impl Comparison {
    /// Evaluates `f` and `interpolant` at every grid point.
    ///
    /// Grids are usually built with [`Array1::linspace`].
    pub fn new<F, I>(grid: Array1<f64>, f: &F, interpolant: &I) -> Self
    where
        F: ScalarFunction + ?Sized,
        I: Interpolant + ?Sized,
    {
        let exact = grid.mapv(|x| f.call(x));
        let approx = interpolant.evaluate_grid(&grid);
        Self {
            grid,
            exact,
            approx,
        }
    }

    /// Returns `|f(x) − p(x)|` at every grid point.
    #[must_use]
    pub fn errors(&self) -> Array1<f64> {
        (&self.exact - &self.approx).mapv(f64::abs)
    }

    /// Returns the largest pointwise error, or `0` for an empty grid.
    ///
    /// A `NaN` error is reported as `NaN`.
    #[must_use]
    pub fn max_error(&self) -> f64 {
        self.errors().fold(0.0, |max, &err| {
            if err.is_nan() || max.is_nan() {
                f64::NAN
            } else {
                max.max(err)
            }
        })
    }

    /// Returns the grid point with the largest error and that error.
    #[must_use]
    pub fn worst_point(&self) -> Option<(f64, f64)> {
        let errors = self.errors();
        self.grid
            .iter()
            .zip(errors.iter())
            .map(|(&x, &err)| (x, err))
            .max_by(|a, b| a.1.total_cmp(&b.1))
    }
}

/// True and interpolated value at a single control point.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct PointError {
    pub x: f64,
    pub exact: f64,
    pub approx: f64,
    pub error: f64,
}

impl PointError {
    /// Evaluates `f` and `interpolant` at `x`.
    pub fn new<F, I>(x: f64, f: &F, interpolant: &I) -> Self
    where
        F: ScalarFunction + ?Sized,
        I: Interpolant + ?Sized,
    {
        let exact = f.call(x);
        let approx = interpolant.evaluate(x);
        Self {
            x,
            exact,
            approx,
            error: (exact - approx).abs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::lagrange::Lagrange;

    #[test]
    fn zero_error_for_exact_interpolant() {
        let square = |x: f64| x * x;
        let interp = Lagrange::sample(vec![-1.0, 0.0, 1.0], &square).expect("valid nodes");

        let comparison = Comparison::new(Array1::linspace(-2.0, 2.0, 41), &square, &interp);

        assert_eq!(comparison.grid.len(), 41);
        assert_eq!(comparison.exact.len(), 41);
        assert_eq!(comparison.approx.len(), 41);
        assert_relative_eq!(comparison.max_error(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn errors_are_absolute_differences() {
        // The line through (0, 0) and (1, 1) against x².
        let square = |x: f64| x * x;
        let interp = Lagrange::sample(vec![0.0, 1.0], &square).expect("valid nodes");

        let comparison = Comparison::new(Array1::linspace(0.0, 2.0, 5), &square, &interp);
        let errors = comparison.errors();

        assert_relative_eq!(errors[0], 0.0);
        assert_relative_eq!(errors[1], 0.25, epsilon = 1e-12);
        assert_relative_eq!(errors[4], 2.0, epsilon = 1e-12);
        assert_relative_eq!(comparison.max_error(), 2.0, epsilon = 1e-12);

        let (x, err) = comparison.worst_point().expect("non-empty grid");
        assert_relative_eq!(x, 2.0);
        assert_relative_eq!(err, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn control_point_error() {
        let square = |x: f64| x * x;
        let interp = Lagrange::sample(vec![0.0, 1.0], &square).expect("valid nodes");

        let point = PointError::new(0.5, &square, &interp);

        assert_relative_eq!(point.exact, 0.25);
        assert_relative_eq!(point.approx, 0.5, epsilon = 1e-12);
        assert_relative_eq!(point.error, 0.25, epsilon = 1e-12);
    }
}
