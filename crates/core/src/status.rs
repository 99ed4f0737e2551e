use crate::handle::AxisRange;

/// Outcome of a single chart update.
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    /// The widget was rescaled and refilled.
    Applied {
        /// Number of points pushed to the series.
        points: usize,
        /// Axis range set on the widget.
        range:  AxisRange,
    },
    /// Nothing was sent to the widget.
    Skipped(SkipReason),
}

impl UpdateStatus {
    #[inline]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Why an update left the widget untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The sample window was empty.
    EmptyInput,
    /// The handle has no series attached.
    InvalidHandle,
}
