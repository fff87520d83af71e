//! Plot windows for solver traces and interpolation errors.
//!
//! A [`PlotObserver`] collects named traces, either live from a solver (it is
//! an [`Observer`] for any [`Plottable`] record) or in bulk from grid data via
//! [`PlotObserver::from_series`]. [`PlotObserver::show`] then opens a blocking
//! egui window configured by a [`ShowConfig`].

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use ndarray::Array1;
use numlab_core::Observer;
use numlab_solvers::equation::{bisection, modified_newton};

/// Window settings for [`PlotObserver::show`].
///
/// ```ignore
/// obs.show(ShowConfig::new().title("Absolute error").legend().log_y())?;
/// ```
#[derive(Debug, Clone, Default)]
pub struct ShowConfig {
    title: String,
    legend: bool,
    log_y: bool,
    x_label: Option<String>,
}

impl ShowConfig {
    /// Untitled window, no legend, linear y-axis.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Labels each trace by name.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Plots `log₁₀ y`, dropping non-positive values.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }

    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }
}

/// A record that can be drawn as `N` traces against a common x value.
///
/// Returning `None` from [`x`][Plottable::x] skips the record. A `None` slot
/// in [`traces`][Plottable::traces] skips only that trace.
///
/// Both root finders' records are plottable: `|f|` and the bracket width
/// (bisection) or step size (modified Newton) against the iteration number.
pub trait Plottable<const N: usize> {
    fn x(&self) -> Option<f64>;

    fn traces(&self) -> [Option<f64>; N];
}

#[allow(clippy::cast_precision_loss)]
impl Plottable<2> for bisection::Record {
    fn x(&self) -> Option<f64> {
        Some(self.iter as f64)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(self.value.abs()), Some(self.width)]
    }
}

#[allow(clippy::cast_precision_loss)]
impl Plottable<2> for modified_newton::Record {
    fn x(&self) -> Option<f64> {
        Some(self.iter as f64)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(self.value.abs()), Some(self.step)]
    }
}

/// Collects `N` named traces for display.
///
/// Pass `&mut PlotObserver` as a solver observer to record every step, then
/// call [`show`][PlotObserver::show] once the solve returns:
///
/// ```ignore
/// let mut obs = PlotObserver::<2>::new(["|f(c)|", "b - a"]);
/// bisection::solve(&f, bracket, &config, &mut obs)?;
/// obs.show(ShowConfig::new().title("Bisection").legend().log_y())?;
/// ```
#[derive(Debug, Clone)]
pub struct PlotObserver<const N: usize> {
    names: [String; N],
    traces: [Vec<[f64; 2]>; N],
}

impl<const N: usize> PlotObserver<N> {
    pub fn new(names: [&str; N]) -> Self {
        Self {
            names: names.map(str::to_owned),
            traces: std::array::from_fn(|_| Vec::new()),
        }
    }

    /// Loads one trace per series, paired point by point with `grid`.
    ///
    /// A series longer than the grid is truncated.
    pub fn from_series(names: [&str; N], grid: &Array1<f64>, series: [&Array1<f64>; N]) -> Self {
        let mut obs = Self::new(names);
        for (trace, values) in obs.traces.iter_mut().zip(series) {
            trace.extend(grid.iter().zip(values).map(|(&x, &y)| [x, y]));
        }
        obs
    }

    /// Appends `(x, y)` to every trace whose slot is `Some(y)`.
    pub fn record(&mut self, x: f64, ys: [Option<f64>; N]) {
        for (trace, y) in self.traces.iter_mut().zip(ys) {
            if let Some(y) = y {
                trace.push([x, y]);
            }
        }
    }

    /// Returns the points collected for trace `index`.
    #[must_use]
    pub fn points(&self, index: usize) -> &[[f64; 2]] {
        &self.traces[index]
    }

    /// Opens a window with every trace and blocks until it is closed.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let window = TraceWindow {
            traces: self.names.into_iter().zip(self.traces).collect(),
            legend: config.legend,
            log_y: config.log_y,
            x_label: config.x_label,
        };

        eframe::run_native(
            &config.title,
            eframe::NativeOptions::default(),
            Box::new(move |_cc| Ok(Box::new(window))),
        )
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Lets a solver borrow the observer so it can still be shown afterwards.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}

struct TraceWindow {
    traces: Vec<(String, Vec<[f64; 2]>)>,
    legend: bool,
    log_y: bool,
    x_label: Option<String>,
}

impl eframe::App for TraceWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("numlab_traces");
            if self.legend {
                plot = plot.legend(Legend::default());
            }
            if self.log_y {
                plot = plot.y_axis_label("log₁₀");
            }
            if let Some(label) = &self.x_label {
                plot = plot.x_axis_label(label.clone());
            }

            plot.show(ui, |plot_ui| {
                for (name, points) in &self.traces {
                    plot_ui.line(Line::new(to_plot_points(points, self.log_y)).name(name));
                }
            });
        });
    }
}

fn to_plot_points(points: &[[f64; 2]], log_y: bool) -> PlotPoints {
    if log_y {
        points
            .iter()
            .filter(|[_, y]| *y > 0.0)
            .map(|&[x, y]| [x, y.log10()])
            .collect()
    } else {
        points.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use ndarray::array;

    #[test]
    fn bisection_steps_become_points() {
        let mut obs = PlotObserver::<2>::new(["|f(c)|", "b - a"]);
        bisection::solve(
            &|x: f64| x - 0.3,
            [0.0, 1.0],
            &bisection::Config::new(0.1, 100).expect("valid config"),
            &mut obs,
        )
        .expect("should solve");

        // Midpoints 0.5, 0.25 and 0.375 before the half-width reaches 0.0625.
        assert_eq!(obs.points(0).len(), 3);
        assert_eq!(obs.points(1), [[1.0, 1.0], [2.0, 0.5], [3.0, 0.25]]);
    }

    #[test]
    fn newton_steps_become_points() {
        let mut obs = PlotObserver::<2>::new(["|f(x)|", "|dx|"]);
        let problem = modified_newton::Problem::new(|x: f64| 2.0 * x - 1.0, |_: f64| 2.0, |_: f64| 0.0);
        let solution = modified_newton::solve(
            &problem,
            3.0,
            [0.0, 4.0],
            &modified_newton::Config::default(),
            &mut obs,
        )
        .expect("should solve");

        // A linear function converges on the second step.
        assert_eq!(solution.iters, 2);
        assert_eq!(obs.points(0), [[1.0, 5.0], [2.0, 0.0]]);
        assert_eq!(obs.points(1), [[1.0, 2.5], [2.0, 0.0]]);
    }

    #[test]
    fn none_slots_skip_only_their_trace() {
        let mut obs = PlotObserver::<2>::new(["a", "b"]);
        obs.record(1.0, [Some(10.0), None]);
        obs.record(2.0, [None, Some(20.0)]);

        assert_eq!(obs.points(0), [[1.0, 10.0]]);
        assert_eq!(obs.points(1), [[2.0, 20.0]]);
    }

    #[test]
    fn series_pair_with_grid() {
        let grid = array![0.0, 1.0, 2.0];
        let exact = array![0.0, 1.0, 4.0];
        let approx = array![0.0, 1.0, 2.0, 3.0];

        let obs = PlotObserver::from_series(["exact", "approx"], &grid, [&exact, &approx]);

        assert_eq!(obs.points(0), [[0.0, 0.0], [1.0, 1.0], [2.0, 4.0]]);
        assert_eq!(obs.points(1), [[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]);
    }

    #[test]
    fn log_scale_drops_non_positive_values() {
        let points = to_plot_points(&[[0.0, 100.0], [1.0, 0.0], [2.0, -1.0], [3.0, 10.0]], true);

        let kept: Vec<[f64; 2]> = points.points().iter().map(|p| [p.x, p.y]).collect();
        assert_eq!(kept, [[0.0, 2.0], [3.0, 1.0]]);
    }
}
