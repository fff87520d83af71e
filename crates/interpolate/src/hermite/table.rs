use ndarray::{Array1, Array2};

use super::{Derivatives, Error, ExpandedNodes};

/// `j!` for every supported derivative order.
const FACTORIALS: [f64; 4] = [1.0, 1.0, 2.0, 6.0];

/// The generalized divided-difference table over an expanded node sequence.
///
/// Entry `(i, j)` is the divided difference `f[zᵢ, …, zᵢ₊ⱼ]`. Only entries
/// with `i + j < N` are used; the rest of the `N × N` storage stays zero.
#[derive(Debug, Clone, PartialEq)]
pub struct DividedDifferences {
    table: Array2<f64>,
}

impl DividedDifferences {
    /// Fills the table column by column.
    ///
    /// Column 0 holds `f(zᵢ)`. A window `zᵢ = zᵢ₊ⱼ` spans a repeated node and
    /// takes `f⁽ʲ⁾(zᵢ) / j!`; any other window is the ordinary quotient
    /// `(T[i+1][j−1] − T[i][j−1]) / (zᵢ₊ⱼ − zᵢ)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingDerivative`] if a repeated window needs an
    /// order that is not registered. Callers validate multiplicities first,
    /// so this only guards against an inconsistent node sequence.
    pub(crate) fn build(nodes: &ExpandedNodes, derivatives: &Derivatives<'_>) -> Result<Self, Error> {
        let z = nodes.as_array();
        let n = z.len();
        let mut table = Array2::zeros((n, n));

        let f = derivatives.function();
        for (i, &zi) in z.iter().enumerate() {
            table[[i, 0]] = f.call(zi);
        }

        for j in 1..n {
            for i in 0..n - j {
                #[allow(clippy::float_cmp)]
                let entry = if z[i] == z[i + j] {
                    let derivative = derivatives
                        .get(j)
                        .ok_or(Error::MissingDerivative { x: z[i], order: j })?;
                    derivative.call(z[i]) / FACTORIALS[j]
                } else {
                    (table[[i + 1, j - 1]] - table[[i, j - 1]]) / (z[i + j] - z[i])
                };
                table[[i, j]] = entry;
            }
        }

        Ok(Self { table })
    }

    /// Returns the divided difference `f[zᵢ, …, zᵢ₊ⱼ]`, or `None` outside the
    /// used triangle.
    #[must_use]
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        (i + j < self.size()).then(|| self.table[[i, j]])
    }

    /// Returns the Newton coefficients, the first row of the table.
    #[must_use]
    pub fn coefficients(&self) -> Array1<f64> {
        self.table.row(0).to_owned()
    }

    /// Returns `N`, the length of the expanded node sequence.
    #[must_use]
    pub fn size(&self) -> usize {
        self.table.nrows()
    }

    /// Returns the full `N × N` storage.
    #[must_use]
    pub fn as_array(&self) -> &Array2<f64> {
        &self.table
    }
}
