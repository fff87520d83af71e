//! Reporting and observation helpers for numlab solver runs.
//!
//! # Modules
//!
//! - [`traits`]: Capability traits for cross-solver observers
//!   ([`HasResidual`], [`CanStopEarly`])
//! - [`report`]: Text tables and summaries for solver logs and
//!   interpolation comparisons
//!
//! # Features
//!
//! - `plot`: Enables [`PlotObserver`] for visualizing solver traces and
//!   interpolation errors via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.
//!
//! [`HasResidual`]: traits::HasResidual
//! [`CanStopEarly`]: traits::CanStopEarly

pub mod report;
pub mod traits;

#[cfg(feature = "plot")]
mod plot;

#[cfg(feature = "plot")]
pub use plot::{PlotObserver, Plottable, ShowConfig};
