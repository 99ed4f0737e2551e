//! Smoothed, auto-scaled scrolling line charts on top of a display toolkit.
//!
//! [`ChartUpdater`] owns the tuning, a [`ChartBackend`] wraps the toolkit, and
//! the caller keeps one [`ChartHandle`](trend_core::ChartHandle) per chart.

pub mod backend;
pub mod history;
pub mod recorder;
pub mod scaling;
pub mod smoothing;
pub mod updater;

pub use backend::ChartBackend;
pub use history::SampleHistory;
pub use recorder::RecordingBackend;
pub use scaling::Scaling;
pub use smoothing::Ema;
pub use updater::{ChartUpdater, HandleFor};
