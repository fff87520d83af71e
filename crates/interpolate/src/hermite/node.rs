/// A distinct interpolation node and how many conditions it imposes.
///
/// A node of multiplicity `m` matches the function value and its first
/// `m − 1` derivatives.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub x: f64,
    pub multiplicity: usize,
}

impl Node {
    /// A node at `x` matching the value and the first `multiplicity − 1` derivatives.
    #[must_use]
    pub fn new(x: f64, multiplicity: usize) -> Self {
        Self { x, multiplicity }
    }

    /// A node that only matches the function value.
    #[must_use]
    pub fn simple(x: f64) -> Self {
        Self::new(x, 1)
    }
}
