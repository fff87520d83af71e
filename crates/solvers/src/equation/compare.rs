//! Agreement check between the bisection and modified Newton roots.

use crate::equation::{bisection, modified_newton};

/// Roots found by both solvers and their absolute difference.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-derive", derive(serde::Serialize, serde::Deserialize))]
pub struct RootComparison {
    pub bisection: f64,
    pub newton: f64,
    pub difference: f64,
}

impl RootComparison {
    /// Compares the roots reported by two solutions.
    #[must_use]
    pub fn new(bisection: &bisection::Solution, newton: &modified_newton::Solution) -> Self {
        Self {
            bisection: bisection.root,
            newton: newton.root,
            difference: (bisection.root - newton.root).abs(),
        }
    }

    /// Returns true if the roots differ by less than `tol`.
    #[must_use]
    pub fn agrees_within(&self, tol: f64) -> bool {
        self.difference < tol
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::equation::modified_newton::Problem;

    #[test]
    fn solvers_agree_on_square_root() {
        let f = |x: f64| x * x - 2.0;
        let bisection = bisection::solve_unobserved(&f, [1.0, 2.0], &bisection::Config::default())
            .expect("bisection should run");

        let problem = Problem::new(f, |x: f64| 2.0 * x, |_: f64| 2.0);
        let newton = modified_newton::solve_unobserved(
            &problem,
            1.5,
            [1.0, 2.0],
            &modified_newton::Config::default(),
        )
        .expect("newton should run");

        let comparison = RootComparison::new(&bisection, &newton);

        assert_relative_eq!(
            comparison.difference,
            (comparison.bisection - comparison.newton).abs()
        );
        assert!(comparison.agrees_within(1e-3));
        assert!(!comparison.agrees_within(0.0));
    }
}
