use trend_core::{Axis, AxisRange, ChartType, Geometry, Result, UpdateMode};
use trend_theme::Color;

/// Primitives the display toolkit exposes for a line-chart widget.
///
/// Implementations wrap a concrete GUI library.  Every method is called from
/// the thread that owns the widget tree; `&mut self` keeps calls exclusive.
pub trait ChartBackend {
    /// Container a new chart is placed in.
    type Parent: ?Sized;
    /// Reference to a chart widget.
    type Widget: Copy + std::fmt::Debug;
    /// Reference to a data series owned by a chart widget.
    type Series: Copy + std::fmt::Debug;

    /// Create a line-chart widget with the given size and position.
    fn create_line_chart(&mut self, parent: &Self::Parent, geometry: Geometry)
        -> Result<Self::Widget>;

    fn set_background(&mut self, chart: Self::Widget, color: Color, opacity: u8);
    fn set_border_width(&mut self, chart: Self::Widget, width: u16);
    fn set_line_width(&mut self, chart: Self::Widget, width: u16);
    /// Size of the per-point marker; 0 hides it.
    fn set_point_size(&mut self, chart: Self::Widget, size: u16);
    fn set_div_line_count(&mut self, chart: Self::Widget, h_lines: u8, v_lines: u8);
    fn set_chart_type(&mut self, chart: Self::Widget, kind: ChartType);
    fn set_update_mode(&mut self, chart: Self::Widget, mode: UpdateMode);

    /// Attach a series to `chart`.  `None` if the toolkit could not allocate it.
    fn add_series(&mut self, chart: Self::Widget, color: Color, axis: Axis) -> Option<Self::Series>;

    fn set_range(&mut self, chart: Self::Widget, axis: Axis, range: AxisRange);
    /// Set the number of points every series on `chart` holds.
    fn set_point_count(&mut self, chart: Self::Widget, count: usize);
    /// Blank every point of `series`.
    fn clear_values(&mut self, chart: Self::Widget, series: Self::Series);
    /// Push the next value according to the chart's update mode.
    fn set_next_value(&mut self, chart: Self::Widget, series: Self::Series, value: i32);
    /// Request a redraw.
    fn refresh(&mut self, chart: Self::Widget);
}
