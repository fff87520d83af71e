/// One modified Newton step.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct Record {
    /// Iteration counter (1-based).
    pub iter: usize,
    /// The point the step started from.
    pub x: f64,
    /// Function value at `x`.
    pub value: f64,
    /// Step magnitude `|xₙ₊₁ − xₙ|`.
    pub step: f64,
}
