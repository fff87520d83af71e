//! Plain-text reports for solver runs and interpolation comparisons.
//!
//! Each report borrows the result it describes and renders through
//! [`Display`](fmt::Display), so callers decide where the text goes.
//!
//! ```rust
//! use numlab_observers::report::BisectionReport;
//! use numlab_solvers::equation::bisection;
//!
//! let solution = bisection::solve_unobserved(
//!     &|x: f64| x * x - 2.0,
//!     [1.0, 2.0],
//!     &bisection::Config::default(),
//! )
//! .unwrap();
//!
//! let estimate = bisection::iteration_estimate([1.0, 2.0], 1e-4);
//! println!("{}", BisectionReport::new(&solution, estimate));
//! ```

use std::fmt;

use ndarray::Array1;
use numlab_interpolate::compare::{Comparison, PointError};
use numlab_solvers::equation::{bisection, compare::RootComparison, modified_newton};

const RULE: &str = "----------------------------------------------------------------------";

/// Iteration table and summary of a bisection run.
#[derive(Debug, Clone, Copy)]
pub struct BisectionReport<'a> {
    solution: &'a bisection::Solution,
    estimate: Option<usize>,
}

impl<'a> BisectionReport<'a> {
    /// Creates a report, optionally with the a-priori iteration estimate.
    #[must_use]
    pub fn new(solution: &'a bisection::Solution, estimate: Option<usize>) -> Self {
        Self { solution, estimate }
    }
}

impl fmt::Display for BisectionReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let solution = self.solution;

        writeln!(
            f,
            "{:>4} | {:>12} | {:>12} | {:>12} | {:>12} | {:>10}",
            "iter", "a", "b", "c", "f(c)", "b - a"
        )?;
        writeln!(f, "{RULE}")?;
        for record in &solution.log {
            writeln!(
                f,
                "{:>4} | {:>12.8} | {:>12.8} | {:>12.8} | {:>12.4e} | {:>10.2e}",
                record.iter, record.a, record.b, record.c, record.value, record.width
            )?;
        }
        writeln!(f, "{RULE}")?;

        writeln!(f, "status:      {:?}", solution.status)?;
        writeln!(f, "root:        {:.8}", solution.root)?;
        writeln!(f, "f(root):     {:.4e}", solution.residual)?;
        writeln!(f, "error bound: {:.2e}", solution.error_bound)?;
        write!(f, "iterations:  {}", solution.iters)?;
        match self.estimate {
            Some(n) => write!(f, " (a-priori estimate {n})"),
            None => Ok(()),
        }
    }
}

/// Iteration table and summary of a modified Newton run.
#[derive(Debug, Clone, Copy)]
pub struct NewtonReport<'a> {
    solution: &'a modified_newton::Solution,
}

impl<'a> NewtonReport<'a> {
    #[must_use]
    pub fn new(solution: &'a modified_newton::Solution) -> Self {
        Self { solution }
    }
}

impl fmt::Display for NewtonReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let solution = self.solution;

        for warning in &solution.warnings {
            writeln!(f, "warning: {warning}")?;
        }

        writeln!(f, "{:>4} | {:>14} | {:>12} | {:>10}", "iter", "x", "f(x)", "|dx|")?;
        writeln!(f, "{RULE}")?;
        for record in &solution.log {
            writeln!(
                f,
                "{:>4} | {:>14.10} | {:>12.4e} | {:>10.2e}",
                record.iter, record.x, record.value, record.step
            )?;
        }
        writeln!(f, "{RULE}")?;

        writeln!(f, "status:      {:?}", solution.status)?;
        writeln!(f, "root:        {:.10}", solution.root)?;
        writeln!(f, "f(root):     {:.4e}", solution.residual)?;
        writeln!(f, "q0:          {:.6}", solution.q0)?;
        write!(f, "iterations:  {}", solution.iters)?;
        match solution.iteration_estimate() {
            Some(n) => write!(f, " (a-priori estimate {n})"),
            None => write!(f, " (a-priori estimate unavailable)"),
        }
    }
}

/// Side-by-side roots from both solvers.
#[derive(Debug, Clone, Copy)]
pub struct RootComparisonReport<'a> {
    comparison: &'a RootComparison,
    tolerance: f64,
}

impl<'a> RootComparisonReport<'a> {
    /// Creates a report that flags whether the roots agree within `tolerance`.
    #[must_use]
    pub fn new(comparison: &'a RootComparison, tolerance: f64) -> Self {
        Self {
            comparison,
            tolerance,
        }
    }
}

impl fmt::Display for RootComparisonReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = self.comparison;
        writeln!(f, "bisection:       {:.10}", c.bisection)?;
        writeln!(f, "modified Newton: {:.10}", c.newton)?;
        write!(f, "difference:      {:.4e}", c.difference)?;
        if c.agrees_within(self.tolerance) {
            write!(f, " (within {:e})", self.tolerance)
        } else {
            write!(f, " (exceeds {:e})", self.tolerance)
        }
    }
}

/// Summary of one interpolant: abbreviated coefficients, a control point and
/// the largest error on the comparison grid.
#[derive(Debug, Clone, Copy)]
pub struct InterpolationReport<'a> {
    pub method: &'a str,
    pub degree: usize,
    pub coefficients: &'a Array1<f64>,
    pub control: PointError,
    pub comparison: &'a Comparison,
}

impl fmt::Display for InterpolationReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} (degree {})", self.method, self.degree)?;
        writeln!(f, "  coefficients: {}", abbreviate(self.coefficients, 4))?;
        writeln!(
            f,
            "  x = {}: exact {:.10}, interpolant {:.10}, error {:.4e}",
            self.control.x, self.control.exact, self.control.approx, self.control.error
        )?;

        let grid = &self.comparison.grid;
        match (grid.first(), grid.last()) {
            (Some(lo), Some(hi)) => write!(
                f,
                "  max error on [{lo}, {hi}]: {:.6e}",
                self.comparison.max_error()
            ),
            _ => write!(f, "  max error: empty grid"),
        }
    }
}

/// Formats values as a list, keeping only the first and last four when there
/// are more than ten.
#[must_use]
pub fn abbreviate(values: &Array1<f64>, precision: usize) -> String {
    let join = |values: &[f64]| {
        values
            .iter()
            .map(|v| format!("{v:.precision$}"))
            .collect::<Vec<_>>()
            .join(", ")
    };

    let values = values.to_vec();
    if values.len() > 10 {
        let head = join(&values[..4]);
        let tail = join(&values[values.len() - 4..]);
        format!("[{head}, ..., {tail}]")
    } else {
        format!("[{}]", join(&values))
    }
}
