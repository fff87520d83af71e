/// One bisection step: the bracket before the update and the midpoint value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Left end of the bracket.
    pub a: f64,
    /// Right end of the bracket.
    pub b: f64,
    /// Midpoint of the bracket.
    pub c: f64,
    /// Function value at the midpoint.
    pub value: f64,
    /// Bracket width `b - a`.
    pub width: f64,
}
