//! Hermite interpolation through nodes with multiplicity.
//!
//! # Algorithm
//!
//! 1. Sort the [`Node`]s and expand them into [`ExpandedNodes`], repeating
//!    each `x` by its multiplicity.
//! 2. Fill the generalized [`DividedDifferences`] table. Windows that span
//!    a repeated node take `f⁽ʲ⁾(x) / j!` from the supplied [`Derivatives`].
//! 3. Read the Newton coefficients off the first row and evaluate the
//!    resulting [`NewtonPolynomial`] with Horner's scheme.
//!
//! Building costs `O(N²)` in the number of conditions `N`; each evaluation
//! costs `O(N)`.
//!
//! Derivatives up to [`MAX_DERIVATIVE_ORDER`] are supported, so a node may
//! have multiplicity at most [`MAX_MULTIPLICITY`]. Every configuration
//! problem is reported before any table entry is computed.

mod derivatives;
mod error;
mod expanded;
mod newton;
mod node;
mod table;


pub use derivatives::Derivatives;
pub use error::Error;
pub use expanded::ExpandedNodes;
pub use newton::NewtonPolynomial;
pub use node::Node;
pub use table::DividedDifferences;

use ndarray::Array1;
use tracing::{debug, info};

use crate::Interpolant;

/// Highest derivative order that can be supplied.
pub const MAX_DERIVATIVE_ORDER: usize = 3;

/// Highest node multiplicity, one more than [`MAX_DERIVATIVE_ORDER`].
pub const MAX_MULTIPLICITY: usize = MAX_DERIVATIVE_ORDER + 1;

/// A built Hermite interpolant.
#[derive(Debug, Clone, PartialEq)]
pub struct Hermite {
    nodes: Vec<Node>,
    expanded: ExpandedNodes,
    table: DividedDifferences,
    polynomial: NewtonPolynomial,
}

impl Hermite {
    /// Builds the interpolant matching `f` and its first `m − 1` derivatives
    /// at every node of multiplicity `m`.
    ///
    /// Nodes may be given in any order.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no nodes, a node is not finite, has zero
    /// or unsupported multiplicity, appears twice, or needs a derivative
    /// order that `derivatives` does not hold.
    pub fn build(nodes: &[Node], derivatives: &Derivatives<'_>) -> Result<Self, Error> {
        let nodes = validate(nodes, derivatives)?;

        let expanded = ExpandedNodes::from_sorted(&nodes);
        debug!(
            nodes = nodes.len(),
            conditions = expanded.len(),
            "expanded Hermite nodes"
        );

        let table = DividedDifferences::build(&expanded, derivatives)?;
        let polynomial = NewtonPolynomial::new(expanded.as_array().clone(), table.coefficients());
        info!(degree = polynomial.degree(), "built Hermite interpolant");

        Ok(Self {
            nodes,
            expanded,
            table,
            polynomial,
        })
    }

    /// Returns the sorted distinct nodes.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the multiplicity-expanded node sequence.
    #[must_use]
    pub fn expanded(&self) -> &ExpandedNodes {
        &self.expanded
    }

    /// Returns the divided-difference table.
    #[must_use]
    pub fn table(&self) -> &DividedDifferences {
        &self.table
    }

    /// Returns the interpolant in Newton form.
    #[must_use]
    pub fn polynomial(&self) -> &NewtonPolynomial {
        &self.polynomial
    }

    /// Returns the Newton coefficients.
    #[must_use]
    pub fn coefficients(&self) -> &Array1<f64> {
        self.polynomial.coeffs()
    }

    /// Returns the polynomial degree, `N − 1`.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.polynomial.degree()
    }

    /// Evaluates the `order`-th derivative of the interpolant at `x`.
    #[must_use]
    pub fn derivative(&self, x: f64, order: usize) -> f64 {
        self.polynomial.derivative(x, order)
    }
}

impl Interpolant for Hermite {
    fn evaluate(&self, x: f64) -> f64 {
        self.polynomial.evaluate(x)
    }
}

/// Checks every node against the supplied derivatives and returns them
/// sorted by `x`.
fn validate(nodes: &[Node], derivatives: &Derivatives<'_>) -> Result<Vec<Node>, Error> {
    if nodes.is_empty() {
        return Err(Error::Empty);
    }

    for node in nodes {
        let Node { x, multiplicity } = *node;

        if !x.is_finite() {
            return Err(Error::NonFiniteNode { x });
        }
        if multiplicity == 0 {
            return Err(Error::ZeroMultiplicity { x });
        }
        if multiplicity > MAX_MULTIPLICITY {
            return Err(Error::UnsupportedMultiplicity {
                x,
                multiplicity,
                max: MAX_MULTIPLICITY,
            });
        }
        if let Some(order) = (1..multiplicity).find(|&order| !derivatives.contains(order)) {
            return Err(Error::MissingDerivative { x, order });
        }
    }

    let mut sorted = nodes.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));

    #[allow(clippy::float_cmp)]
    if let Some(pair) = sorted.windows(2).find(|pair| pair[0].x == pair[1].x) {
        return Err(Error::DuplicateNode { x: pair[0].x });
    }

    Ok(sorted)
}
