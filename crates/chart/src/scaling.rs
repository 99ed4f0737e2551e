use trend_config::ScalingConfig;
use trend_core::AxisRange;

/// Maps observed data bounds to the integer axis range shown on the chart.
///
/// The range is padded beyond the tightest fit so small fluctuations between
/// updates don't rescale the axis every tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scaling {
    /// Fraction of the span added on both ends.
    pub padding:       f32,
    /// Floor for the span the padding is computed from.
    pub min_span:      f32,
    /// Used when the observed bounds coincide or are not finite.
    pub default_range: AxisRange,
}

impl Scaling {
    pub fn from_config(cfg: &ScalingConfig) -> Self {
        Self {
            padding:       cfg.padding,
            min_span:      cfg.min_span,
            default_range: cfg.default_range(),
        }
    }

    /// Axis range for data observed within `[min, max]`.  Both ends are cast
    /// to integers by truncation toward zero; if that collapses the range,
    /// the top is raised by one so the axis never has zero height.
    pub fn axis_range(&self, min: f32, max: f32) -> AxisRange {
        if min == max || !min.is_finite() || !max.is_finite() {
            return self.default_range;
        }

        let span = (max - min).max(self.min_span);
        let pad = self.padding * span;
        let lo = (min - pad) as i32;
        let hi = (max + pad) as i32;
        AxisRange::new(lo, hi.max(lo.saturating_add(1)))
    }
}

impl Default for Scaling {
    fn default() -> Self {
        Self::from_config(&ScalingConfig::default())
    }
}
