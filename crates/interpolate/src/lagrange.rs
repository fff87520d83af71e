//! Lagrange interpolation through distinct nodes.
//!
//! The interpolant is evaluated directly from the classical form
//!
//! ```text
//! L(x) = Σᵢ yᵢ · ℓᵢ(x),    ℓᵢ(x) = Πⱼ≠ᵢ (x − xⱼ) / (xᵢ − xⱼ)
//! ```
//!
//! Every evaluation recomputes all basis terms, at `O(n²)` cost per point.
//! At a node `xₖ` every basis product except `ℓₖ` contains an exact zero
//! factor, so the node values are reproduced exactly.

use ndarray::Array1;
use numlab_core::ScalarFunction;
use thiserror::Error;
use tracing::debug;

use crate::Interpolant;

/// Errors that can occur when building a Lagrange interpolant.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("at least one node is required")]
    Empty,
    #[error("{nodes} nodes but {values} values")]
    LengthMismatch { nodes: usize, values: usize },
    #[error("node {index} is not finite: {x}")]
    NonFiniteNode { index: usize, x: f64 },
    #[error("nodes {first} and {second} coincide at x = {x}")]
    DuplicateNode { first: usize, second: usize, x: f64 },
}

/// The interpolating polynomial of degree `n − 1` through `n` distinct nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Lagrange {
    nodes: Array1<f64>,
    values: Array1<f64>,
}

impl Lagrange {
    /// Creates the interpolant through `(nodes[i], values[i])`.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no nodes, the lengths differ, a node is
    /// not finite, or two nodes coincide.
    pub fn new<N, V>(nodes: N, values: V) -> Result<Self, Error>
    where
        N: Into<Array1<f64>>,
        V: Into<Array1<f64>>,
    {
        let nodes = nodes.into();
        let values = values.into();

        if nodes.is_empty() {
            return Err(Error::Empty);
        }
        if nodes.len() != values.len() {
            return Err(Error::LengthMismatch {
                nodes: nodes.len(),
                values: values.len(),
            });
        }
        if let Some((index, &x)) = nodes.iter().enumerate().find(|(_, x)| !x.is_finite()) {
            return Err(Error::NonFiniteNode { index, x });
        }
        for (first, &x) in nodes.iter().enumerate() {
            #[allow(clippy::float_cmp)]
            if let Some(offset) = nodes.iter().skip(first + 1).position(|&other| other == x) {
                return Err(Error::DuplicateNode {
                    first,
                    second: first + 1 + offset,
                    x,
                });
            }
        }

        debug!(nodes = nodes.len(), "built Lagrange interpolant");
        Ok(Self { nodes, values })
    }

    /// Creates the interpolant through `(x, f(x))` for every node.
    ///
    /// # Errors
    ///
    /// Returns an error if the nodes are invalid. See [`Lagrange::new`].
    pub fn sample<N, F>(nodes: N, f: &F) -> Result<Self, Error>
    where
        N: Into<Array1<f64>>,
        F: ScalarFunction + ?Sized,
    {
        let nodes = nodes.into();
        let values = nodes.mapv(|x| f.call(x));
        Self::new(nodes, values)
    }

    /// Returns the interpolation nodes.
    #[must_use]
    pub fn nodes(&self) -> &Array1<f64> {
        &self.nodes
    }

    /// Returns the values at the nodes.
    #[must_use]
    pub fn values(&self) -> &Array1<f64> {
        &self.values
    }

    /// Returns the polynomial degree, `n − 1`.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.nodes.len() - 1
    }

    fn basis(&self, i: usize, x: f64) -> f64 {
        let xi = self.nodes[i];
        self.nodes
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .map(|(_, &xj)| (x - xj) / (xi - xj))
            .product()
    }
}

impl Interpolant for Lagrange {
    fn evaluate(&self, x: f64) -> f64 {
        self.values
            .iter()
            .enumerate()
            .map(|(i, &yi)| yi * self.basis(i, x))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::array;

    #[test]
    fn reproduces_node_values_exactly() {
        let nodes = array![1.0, 8.0, 15.0, 22.0, 29.0, 36.0];
        let interp = Lagrange::sample(nodes.clone(), &f64::log10).expect("valid nodes");

        for (&x, &y) in nodes.iter().zip(interp.values()) {
            assert_eq!(interp.evaluate(x).to_bits(), y.to_bits());
        }
    }

    #[test]
    fn recovers_quadratic() {
        let interp = Lagrange::new(vec![-1.0, 0.0, 2.0], vec![2.0, 1.0, 5.0]).expect("valid nodes");

        // x² + 1 is the unique quadratic through these points.
        assert_eq!(interp.degree(), 2);
        assert_relative_eq!(interp.evaluate(1.0), 2.0, epsilon = 1e-12);
        assert_relative_eq!(interp.evaluate(3.0), 10.0, epsilon = 1e-12);
        assert_relative_eq!(interp.evaluate(-2.5), 7.25, epsilon = 1e-12);
    }

    #[test]
    fn single_node_is_constant() {
        let interp = Lagrange::new(vec![4.0], vec![7.0]).expect("valid node");
        assert_eq!(interp.degree(), 0);
        assert_relative_eq!(interp.evaluate(-100.0), 7.0);
    }

    #[test]
    fn evaluation_is_repeatable() {
        let interp = Lagrange::sample(vec![1.0, 2.0, 4.0], &f64::ln).expect("valid nodes");
        let first = interp.evaluate(3.0);
        let second = interp.evaluate(3.0);
        assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn rejects_invalid_input() {
        let empty: Vec<f64> = Vec::new();
        assert_eq!(Lagrange::new(empty.clone(), empty), Err(Error::Empty));

        assert_eq!(
            Lagrange::new(vec![0.0, 1.0], vec![0.0]),
            Err(Error::LengthMismatch {
                nodes: 2,
                values: 1
            })
        );

        assert!(matches!(
            Lagrange::new(vec![0.0, f64::NAN], vec![0.0, 1.0]),
            Err(Error::NonFiniteNode { index: 1, .. })
        ));

        assert!(matches!(
            Lagrange::new(vec![0.0, 1.0, 2.0, 1.0], vec![0.0; 4]),
            Err(Error::DuplicateNode {
                first: 1,
                second: 3,
                ..
            })
        ));
    }
}
