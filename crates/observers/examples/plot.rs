//! Interactive visualizations of the numlab solvers and interpolants.
//!
//! Each mode runs one lab and opens interactive plot windows showing the
//! result. Close a window to move on to the next one.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot -- roots
//! cargo run --example plot --features plot -- interpolate
//! ```
//!
//! # Modes
//!
//! - **roots**: Refine the negative root of `x² + 5 sin x − 1` with
//!   bisection and modified Newton. Shows `|f|` and the bracket width or step
//!   size per iteration on a log scale.
//!
//! - **interpolate**: Interpolate `log₁₀ x` on \[1, 100\] with Lagrange and
//!   Hermite. Shows the true function against both interpolants, then the
//!   absolute errors on linear and log scales.

use std::{error::Error, f64::consts::LN_10};

use ndarray::Array1;
use numlab_interpolate::{
    compare::Comparison,
    hermite::{Derivatives, Hermite, Node},
    lagrange::Lagrange,
};
use numlab_observers::{PlotObserver, ShowConfig};
use numlab_solvers::equation::{
    bisection,
    modified_newton::{self, Problem},
    scan::{self, ScanConfig},
};

fn main() -> Result<(), Box<dyn Error>> {
    let mode = std::env::args().nth(1).unwrap_or_else(|| "roots".into());
    match mode.as_str() {
        "roots" => roots(),
        "interpolate" => interpolate(),
        other => {
            eprintln!("Unknown mode: {other}");
            eprintln!("Usage: plot [roots|interpolate]");
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
    let Some(bracket) = scan::choose_negative(&intervals) else {
        return Err("no sign change with a negative endpoint".into());
    };

    let mut obs = PlotObserver::<2>::new(["|f(c)|", "b - a"]);
    bisection::solve(&f, bracket, &bisection::Config::default(), &mut obs)?;
    obs.show(ShowConfig::new().title("Bisection").legend().log_y())?;

    let mut obs = PlotObserver::<2>::new(["|f(x)|", "|dx|"]);
    modified_newton::solve(
        &Problem::new(f, df, d2f),
        NEWTON_START,
        bracket,
        &modified_newton::Config::default(),
        &mut obs,
    )?;
    obs.show(ShowConfig::new().title("Modified Newton").legend().log_y())?;

    Ok(())
}

// --- Interpolate -------------------------------------------------------------

const LAGRANGE_NODES: [f64; 15] = [
    1.0, 8.0, 15.0, 22.0, 29.0, 36.0, 43.0, 50.0, 57.0, 64.0, 71.0, 78.0, 85.0, 92.0, 100.0,
];

const HERMITE_NODES: [f64; 9] = [1.0, 13.0, 25.0, 38.0, 50.0, 62.0, 75.0, 87.0, 100.0];

const HERMITE_MULTIPLICITIES: [usize; 9] = [4, 4, 4, 4, 4, 4, 4, 4, 3];

fn interpolate() -> Result<(), Box<dyn Error>> {
    let grid = Array1::linspace(1.0, 100.0, 500);

    let lagrange = Lagrange::sample(LAGRANGE_NODES.to_vec(), &f64::log10)?;

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

    let lagrange_cmp = Comparison::new(grid.clone(), &f64::log10, &lagrange);
    let hermite_cmp = Comparison::new(grid.clone(), &f64::log10, &hermite);

    PlotObserver::from_series(
        ["log10(x)", "L(x)", "H(x)"],
        &grid,
        [&lagrange_cmp.exact, &lagrange_cmp.approx, &hermite_cmp.approx],
    )
    .show(ShowConfig::new().title("Interpolants").legend())?;

    let lagrange_err = lagrange_cmp.errors();
    let hermite_err = hermite_cmp.errors();

    PlotObserver::from_series(["Lagrange", "Hermite"], &grid, [&lagrange_err, &hermite_err])
        .show(ShowConfig::new().title("Absolute error").legend())?;

    PlotObserver::from_series(["Lagrange", "Hermite"], &grid, [&lagrange_err, &hermite_err])
        .show(ShowConfig::new().title("Absolute error (log)").legend().log_y())?;

    Ok(())
}
