//! Sign-change scanning to seed the bracketed and local solvers.

use numlab_core::ScalarFunction;
use thiserror::Error;
use tracing::debug;

use crate::equation::{BracketError, bounds::Bounds};

/// Scan range and step size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanConfig {
    range: [f64; 2],
    step: f64,
}

/// Errors that can occur when validating a scan config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid scan range: {0}")]
    Range(#[from] BracketError),
    #[error("step must be finite and positive")]
    Step,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            range: [-10.0, 10.0],
            step: 0.1,
        }
    }
}

impl ScanConfig {
    /// Creates a scan over `range` (either order) in increments of `step`.
    ///
    /// # Errors
    ///
    /// Returns an error if the range is invalid or `step` is not finite and
    /// positive.
    pub fn new(range: [f64; 2], step: f64) -> Result<Self, ConfigError> {
        let bounds = Bounds::new(range)?;
        if !step.is_finite() || step <= 0.0 {
            return Err(ConfigError::Step);
        }
        Ok(Self {
            range: [bounds.left, bounds.right],
            step,
        })
    }

    /// Returns the ordered scan range.
    #[must_use]
    pub fn range(&self) -> [f64; 2] {
        self.range
    }

    /// Returns the sub-interval width.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }
}

/// Returns every sub-interval `[a, a + step]` with `f(a)·f(a + step) < 0`.
///
/// Start points are `min + k·step` for as long as they stay below `max`, so
/// the last interval may reach slightly past the range. A root that lands
/// exactly on a start point gives a zero product and is not reported.
#[allow(clippy::cast_precision_loss)]
pub fn sign_changes<F>(f: &F, config: &ScanConfig) -> Vec<[f64; 2]>
where
    F: ScalarFunction + ?Sized,
{
    let [min, max] = config.range;
    let step = config.step;

    let intervals: Vec<[f64; 2]> = (0_usize..)
        .map(|k| min + k as f64 * step)
        .take_while(|a| *a < max)
        .map(|a| [a, a + step])
        .filter(|&[a, b]| f.call(a) * f.call(b) < 0.0)
        .collect();

    debug!(count = intervals.len(), ?intervals, "sign-change scan");
    intervals
}

/// Picks the interval with a negative endpoint whose right end is closest to
/// zero.
///
/// Ties keep the first such interval. Returns `None` if no interval has a
/// negative endpoint.
#[must_use]
pub fn choose_negative(intervals: &[[f64; 2]]) -> Option<[f64; 2]> {
    intervals
        .iter()
        .filter(|[a, b]| *a < 0.0 || *b < 0.0)
        .min_by(|[_, x], [_, y]| x.abs().total_cmp(&y.abs()))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn lab_equation(x: f64) -> f64 {
        x * x + 5.0 * x.sin() - 1.0
    }

    #[test]
    fn finds_both_roots_of_lab_equation() {
        let intervals = sign_changes(&lab_equation, &ScanConfig::default());

        assert_eq!(intervals.len(), 2);
        assert_relative_eq!(intervals[0][0], -2.3, epsilon = 1e-9);
        assert_relative_eq!(intervals[0][1], -2.2, epsilon = 1e-9);
        assert_relative_eq!(intervals[1][0], 0.1, epsilon = 1e-9);
        assert_relative_eq!(intervals[1][1], 0.2, epsilon = 1e-9);
    }

    #[test]
    fn reports_nothing_without_real_roots() {
        let intervals = sign_changes(&|x: f64| x * x + 1.0, &ScanConfig::default());
        assert!(intervals.is_empty());
    }

    #[test]
    fn honours_custom_range() {
        let config = ScanConfig::new([4.0, 0.0], 0.5).expect("valid config");
        assert_eq!(config.range(), [0.0, 4.0]);

        let intervals = sign_changes(&|x: f64| x - 2.2, &config);
        assert_eq!(intervals.len(), 1);
        assert_relative_eq!(intervals[0][0], 2.0);
        assert_relative_eq!(intervals[0][1], 2.5);
    }

    #[test]
    fn rejects_bad_config() {
        assert_eq!(ScanConfig::new([0.0, 1.0], 0.0), Err(ConfigError::Step));
        assert_eq!(
            ScanConfig::new([0.0, 1.0], f64::INFINITY),
            Err(ConfigError::Step)
        );
        assert_eq!(
            ScanConfig::new([1.0, 1.0], 0.1),
            Err(ConfigError::Range(BracketError::ZeroWidth))
        );
    }

    #[test]
    fn default_matches_new() {
        assert_eq!(ScanConfig::new([-10.0, 10.0], 0.1), Ok(ScanConfig::default()));
    }

    #[test]
    fn chooses_negative_interval_nearest_zero() {
        let intervals = [[-5.0, -4.5], [-2.3, -2.2], [0.1, 0.2], [3.0, 3.1]];
        assert_eq!(choose_negative(&intervals), Some([-2.3, -2.2]));
    }

    #[test]
    fn straddling_interval_counts_as_negative() {
        let intervals = [[-3.0, -2.0], [-0.5, 0.5]];
        assert_eq!(choose_negative(&intervals), Some([-0.5, 0.5]));
    }

    #[test]
    fn ties_keep_the_first_interval() {
        let intervals = [[-1.0, -0.5], [-2.0, 0.5]];
        assert_eq!(choose_negative(&intervals), Some([-1.0, -0.5]));
    }

    #[test]
    fn no_negative_interval() {
        assert_eq!(choose_negative(&[[0.1, 0.2], [1.0, 2.0]]), None);
        assert_eq!(choose_negative(&[]), None);
    }
}
