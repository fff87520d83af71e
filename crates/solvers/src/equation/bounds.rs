use thiserror::Error;

/// Errors that can occur when validating interval endpoints.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
    /// Endpoints are equal, giving zero width.
    #[error("zero width")]
    ZeroWidth,
}

/// Ordered finite bounds of an interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Bounds {
    pub(crate) left: f64,
    pub(crate) right: f64,
}

impl Bounds {
    /// Validates and orders the interval endpoints.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if endpoints are non-finite or zero width.
    pub(crate) fn new(bounds: [f64; 2]) -> Result<Self, BracketError> {
        let [left, right] = bounds;

        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite);
        }

        #[allow(clippy::float_cmp)]
        if left == right {
            return Err(BracketError::ZeroWidth);
        }

        if left < right {
            Ok(Self { left, right })
        } else {
            Ok(Self {
                left: right,
                right: left,
            })
        }
    }

    /// Returns the interval width.
    pub(crate) fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Returns `samples` equally spaced points covering the interval,
    /// endpoints included.
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn sample_points(self, samples: usize) -> impl Iterator<Item = f64> {
        let step = self.width() / samples.saturating_sub(1).max(1) as f64;
        (0..samples).map(move |i| self.left + i as f64 * step)
    }
}
