//! Text reports for the root-finding and interpolation labs.
//!
//! # Usage
//!
//! ```text
//! cargo run --example report -- roots
//! cargo run --example report -- interpolate
//! RUST_LOG=debug cargo run --example report -- roots
//! ```
//!
//! # Modes
//!
//! - **roots**: Scan `x² + 5 sin x − 1` on \[−10, 10\] for sign changes,
//!   refine the negative root with bisection and modified Newton, and compare.
//!
//! - **interpolate**: Interpolate `log₁₀ x` on \[1, 100\] with Lagrange
//!   (15 nodes) and Hermite (9 nodes, 35 conditions) and report the errors.
//!
//! Solver progress is logged through `tracing`; set `RUST_LOG` to see it.

use std::{error::Error, f64::consts::LN_10};

use ndarray::Array1;
use numlab_interpolate::{
    compare::{Comparison, PointError},
    hermite::{Derivatives, Hermite, Node},
    lagrange::Lagrange,
};
use numlab_observers::report::{
    BisectionReport, InterpolationReport, NewtonReport, RootComparisonReport,
};
use numlab_solvers::equation::{
    bisection,
    compare::RootComparison,
    modified_newton::{self, Problem},
    scan::{self, ScanConfig},
};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let mode = std::env::args().nth(1).unwrap_or_else(|| "roots".into());
    match mode.as_str() {
        "roots" => roots(),
        "interpolate" => interpolate(),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: report [roots|interpolate]");
            std::process::exit(1);
        }
    }
}

// --- Roots -------------------------------------------------------------------

/// Modified Newton starting point near the negative root.
const NEWTON_START: f64 = -2.227;

fn f(x: f64) -> f64 {
    x * x + 5.0 * x.sin() - 1.0
}

fn df(x: f64) -> f64 {
    2.0 * x + 5.0 * x.cos()
}

fn d2f(x: f64) -> f64 {
    2.0 - 5.0 * x.sin()
}

fn roots() -> Result<(), Box<dyn Error>> {
    let intervals = scan::sign_changes(&f, &ScanConfig::default());
    println!("sign changes: {intervals:?}");

    let Some(bracket) = scan::choose_negative(&intervals) else {
        return Err("no sign change with a negative endpoint".into());
    };
    println!("chosen interval: {bracket:?}\n");

    let config = bisection::Config::default();
    let bisection = bisection::solve_unobserved(&f, bracket, &config)?;
    let estimate = bisection::iteration_estimate(bracket, config.eps());
    println!("== Bisection ==\n{}\n", BisectionReport::new(&bisection, estimate));

    let problem = Problem::new(f, df, d2f);
    let newton = modified_newton::solve_unobserved(
        &problem,
        NEWTON_START,
        bracket,
        &modified_newton::Config::default(),
    )?;
    println!("== Modified Newton ==\n{}\n", NewtonReport::new(&newton));

    let comparison = RootComparison::new(&bisection, &newton);
    println!("== Comparison ==\n{}", RootComparisonReport::new(&comparison, 1e-3));

    Ok(())
}

// --- Interpolate -------------------------------------------------------------

const LAGRANGE_NODES: [f64; 15] = [
    1.0, 8.0, 15.0, 22.0, 29.0, 36.0, 43.0, 50.0, 57.0, 64.0, 71.0, 78.0, 85.0, 92.0, 100.0,
];

const HERMITE_NODES: [f64; 9] = [1.0, 13.0, 25.0, 38.0, 50.0, 62.0, 75.0, 87.0, 100.0];

const HERMITE_MULTIPLICITIES: [usize; 9] = [4, 4, 4, 4, 4, 4, 4, 4, 3];

const CONTROL_POINT: f64 = 45.0;

fn interpolate() -> Result<(), Box<dyn Error>> {
    let grid = Array1::linspace(1.0, 100.0, 500);

    let lagrange = Lagrange::sample(LAGRANGE_NODES.to_vec(), &f64::log10)?;
    let lagrange_cmp = Comparison::new(grid.clone(), &f64::log10, &lagrange);
    let report = InterpolationReport {
        method: "Lagrange",
        degree: lagrange.degree(),
        coefficients: lagrange.values(),
        control: PointError::new(CONTROL_POINT, &f64::log10, &lagrange),
        comparison: &lagrange_cmp,
    };
    println!("{report}\n");

    let derivatives = Derivatives::new(f64::log10)
        .with(1, |x: f64| 1.0 / (x * LN_10))?
        .with(2, |x: f64| -1.0 / (x * x * LN_10))?
        .with(3, |x: f64| 2.0 / (x.powi(3) * LN_10))?;
    let nodes: Vec<Node> = HERMITE_NODES
        .iter()
        .zip(HERMITE_MULTIPLICITIES)
        .map(|(&x, m)| Node::new(x, m))
        .collect();
    let hermite = Hermite::build(&nodes, &derivatives)?;
    let hermite_cmp = Comparison::new(grid, &f64::log10, &hermite);
    let report = InterpolationReport {
        method: "Hermite",
        degree: hermite.degree(),
        coefficients: hermite.coefficients(),
        control: PointError::new(CONTROL_POINT, &f64::log10, &hermite),
        comparison: &hermite_cmp,
    };
    println!("{report}");

    Ok(())
}
