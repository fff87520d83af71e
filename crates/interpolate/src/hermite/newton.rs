use ndarray::Array1;

use crate::Interpolant;

/// A polynomial in Newton form,
/// `p(x) = c₀ + c₁(x − z₀) + c₂(x − z₀)(x − z₁) + …`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct NewtonPolynomial {
    nodes: Array1<f64>,
    coeffs: Array1<f64>,
}

impl NewtonPolynomial {
    pub(crate) fn new(nodes: Array1<f64>, coeffs: Array1<f64>) -> Self {
        debug_assert_eq!(nodes.len(), coeffs.len());
        Self { nodes, coeffs }
    }

    /// Returns the centers `zᵢ`.
    #[must_use]
    pub fn nodes(&self) -> &Array1<f64> {
        &self.nodes
    }

    /// Returns the coefficients `cᵢ`.
    #[must_use]
    pub fn coeffs(&self) -> &Array1<f64> {
        &self.coeffs
    }

    /// Returns the formal degree, one less than the number of coefficients.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.coeffs.len().saturating_sub(1)
    }

    /// Evaluates the `order`-th derivative at `x`.
    ///
    /// Runs Horner's scheme on the Taylor coefficients `p⁽ᵏ⁾(x) / k!` for
    /// `k = 0..=order` and rescales the last one.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn derivative(&self, x: f64, order: usize) -> f64 {
        let n = self.coeffs.len();
        if n == 0 {
            return 0.0;
        }

        let mut taylor = vec![0.0; order + 1];
        taylor[0] = self.coeffs[n - 1];

        for i in (0..n - 1).rev() {
            let shift = x - self.nodes[i];
            for k in (1..=order).rev() {
                taylor[k] = taylor[k] * shift + taylor[k - 1];
            }
            taylor[0] = taylor[0] * shift + self.coeffs[i];
        }

        (1..=order).fold(taylor[order], |acc, k| acc * k as f64)
    }
}

impl Interpolant for NewtonPolynomial {
    fn evaluate(&self, x: f64) -> f64 {
        let n = self.coeffs.len();
        if n == 0 {
            return 0.0;
        }

        (0..n - 1)
            .rev()
            .fold(self.coeffs[n - 1], |acc, i| acc * (x - self.nodes[i]) + self.coeffs[i])
    }
}
