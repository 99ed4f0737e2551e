use serde::{Deserialize, Serialize};
use trend_core::{AxisRange, ChartError, Geometry, Result};

/// Root configuration structure parsed from `trend.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Exponential smoothing of the plotted curve.
    pub smoothing: SmoothingConfig,
    /// Axis auto-scaling.
    pub scaling: ScalingConfig,
    /// Widget look.
    pub style: StyleConfig,
    /// Widget size and position.
    pub layout: Geometry,
    /// Rolling sample window fed to the chart.
    pub history: HistoryConfig,
}

impl ChartConfig {
    /// Raw samples on a tight axis: no smoothing and no padding.
    pub fn passthrough() -> Self {
        Self {
            smoothing: SmoothingConfig::disabled(),
            scaling: ScalingConfig::tight(),
            ..Self::default()
        }
    }

    /// Reject values the updater cannot work with.
    pub fn validate(&self) -> Result<()> {
        let alpha = self.smoothing.alpha;
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(ChartError::Config(format!(
                "smoothing.alpha must be in (0, 1], got {alpha}"
            )));
        }
        if !(self.scaling.padding >= 0.0 && self.scaling.padding.is_finite()) {
            return Err(ChartError::Config(format!(
                "scaling.padding must be a non-negative number, got {}",
                self.scaling.padding
            )));
        }
        if !(self.scaling.min_span > 0.0 && self.scaling.min_span.is_finite()) {
            return Err(ChartError::Config(format!(
                "scaling.min_span must be positive, got {}",
                self.scaling.min_span
            )));
        }
        if self.scaling.default_min >= self.scaling.default_max {
            return Err(ChartError::Config(format!(
                "scaling.default_min ({}) must be below scaling.default_max ({})",
                self.scaling.default_min, self.scaling.default_max
            )));
        }
        if self.history.capacity == 0 {
            return Err(ChartError::Config("history.capacity must be at least 1".into()));
        }
        Ok(())
    }
}

/// Exponential moving average settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmoothingConfig {
    /// Weight of each new sample (0 < alpha ≤ 1).  `1.0` disables smoothing.
    pub alpha: f32,
}

impl SmoothingConfig {
    pub fn disabled() -> Self {
        Self { alpha: 1.0 }
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self { alpha: 0.02 }
    }
}

/// Axis range settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScalingConfig {
    /// Fraction of the observed span added above and below the data.
    pub padding: f32,
    /// Smallest span the padding is computed from.
    pub min_span: f32,
    /// Axis bounds used when the observed min and max coincide.
    pub default_min: i32,
    pub default_max: i32,
}

impl ScalingConfig {
    /// Axis hugs the observed bounds.
    pub fn tight() -> Self {
        Self { padding: 0.0, ..Self::default() }
    }

    pub fn default_range(&self) -> AxisRange {
        AxisRange::new(self.default_min, self.default_max)
    }
}

impl Default for ScalingConfig {
    fn default() -> Self {
        Self {
            padding:     0.15,
            min_span:    1.0,
            default_min: 0,
            default_max: 100,
        }
    }
}

/// Widget styling.  Colors are hex strings (`"#RRGGBB"` or `"0xRRGGBB"`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    /// Series line color.
    pub line_color: String,
    /// Widget background color.
    pub background: String,
    /// Background opacity (0 = transparent, 255 = opaque).
    pub background_opacity: u8,
    pub border_width: u16,
    pub line_width: u16,
    /// Point marker size; 0 hides the markers.
    pub point_size: u16,
    /// Horizontal division (grid) lines.
    pub h_div_lines: u8,
    /// Vertical division (grid) lines.
    pub v_div_lines: u8,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            line_color:         "#00e5ff".to_string(),
            background:         "#000000".to_string(),
            background_opacity: 0,
            border_width:       0,
            line_width:         2,
            point_size:         0,
            h_div_lines:        0,
            v_div_lines:        0,
        }
    }
}

/// Rolling window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Number of samples kept and plotted.
    pub capacity: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self { capacity: 120 }
    }
}
