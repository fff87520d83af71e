use crate::equation::bounds::Bounds;

use super::Error;

/// Current bracket bounds and the function value at the left end.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(super) struct Bracket {
    left: f64,
    right: f64,
    left_value: f64,
}

impl Bracket {
    /// Creates a bracket from validated bounds and the endpoint values.
    ///
    /// # Errors
    ///
    /// Returns `Error::NoSignChange` unless `f(a)·f(b) < 0`.
    pub(super) fn new(bounds: Bounds, left_value: f64, right_value: f64) -> Result<Self, Error> {
        if left_value * right_value >= 0.0 {
            return Err(Error::NoSignChange {
                left: bounds.left,
                right: bounds.right,
                left_value,
                right_value,
            });
        }

        Ok(Self {
            left: bounds.left,
            right: bounds.right,
            left_value,
        })
    }

    pub(super) fn left(&self) -> f64 {
        self.left
    }

    pub(super) fn right(&self) -> f64 {
        self.right
    }

    pub(super) fn midpoint(&self) -> f64 {
        0.5 * (self.left + self.right)
    }

    pub(super) fn width(&self) -> f64 {
        self.right - self.left
    }

    pub(super) fn half_width(&self) -> f64 {
        0.5 * self.width()
    }

    pub(super) fn is_converged(&self, eps: f64) -> bool {
        self.half_width() <= eps
    }

    /// Keeps `[a, c]` when `f(a)·f(c) < 0`, otherwise `[c, b]`.
    pub(super) fn shrink(&mut self, c: f64, value: f64) {
        if self.left_value * value < 0.0 {
            self.right = c;
        } else {
            self.left = c;
            self.left_value = value;
        }
    }
}
