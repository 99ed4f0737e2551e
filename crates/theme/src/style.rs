use crate::colors::Color;
use trend_config::StyleConfig;

/// Compiled look of a chart widget, with colours pre-parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartStyle {
    pub line_color:         Color,
    pub background:         Color,
    /// Background opacity (0 = transparent).
    pub background_opacity: u8,
    pub border_width:       u16,
    pub line_width:         u16,
    /// Point marker size; 0 = no dots.
    pub point_size:         u16,
    pub h_div_lines:        u8,
    pub v_div_lines:        u8,
}

impl ChartStyle {
    /// Build a [`ChartStyle`] from the config file's `[style]` section.
    /// Invalid colour strings fall back to safe defaults.
    pub fn from_config(cfg: &StyleConfig) -> Self {
        Self {
            line_color:         Color::from_hex(&cfg.line_color).unwrap_or(Color::CYAN),
            background:         Color::from_hex(&cfg.background).unwrap_or(Color::BLACK),
            background_opacity: cfg.background_opacity,
            border_width:       cfg.border_width,
            line_width:         cfg.line_width,
            point_size:         cfg.point_size,
            h_div_lines:        cfg.h_div_lines,
            v_div_lines:        cfg.v_div_lines,
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self::from_config(&StyleConfig::default())
    }
}
