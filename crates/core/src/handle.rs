use serde::{Deserialize, Serialize};

/// A chart widget together with the single data series plotted on it.
///
/// Returned by `ChartUpdater::initialize` and owned by the caller for as long
/// as the enclosing screen lives.  `series` is `None` when the toolkit refused
/// to create the series; updates against such a handle are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartHandle<W, S> {
    pub widget: W,
    pub series: Option<S>,
}

impl<W, S> ChartHandle<W, S> {
    pub fn new(widget: W, series: Option<S>) -> Self {
        Self { widget, series }
    }

    /// `true` when both the widget and its series are present.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.series.is_some()
    }
}

/// Size and position of a chart widget, in display pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Geometry {
    pub width:  i32,
    pub height: i32,
    pub x:      i32,
    pub y:      i32,
}

impl Default for Geometry {
    fn default() -> Self {
        Self { width: 200, height: 80, x: 0, y: 0 }
    }
}

/// Value axis a series is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    #[default]
    PrimaryY,
    SecondaryY,
}

/// How a chart draws its series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartType {
    #[default]
    Line,
    Bar,
    Scatter,
}

/// How the widget's point buffer behaves when a new value is pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UpdateMode {
    /// Oldest point drops off the front; the curve scrolls.
    #[default]
    Shift,
    /// Points wrap around and overwrite from the start.
    Circular,
}

/// Integer bounds applied to a value axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisRange {
    pub min: i32,
    pub max: i32,
}

impl AxisRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }
}

impl Default for AxisRange {
    fn default() -> Self {
        Self::new(0, 100)
    }
}
