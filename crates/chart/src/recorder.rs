//! In-memory [`ChartBackend`] that records every primitive call.
//!
//! Models just enough widget state (range, point buffer, update mode) to check
//! what a real display would show.  Used by the tests and the replay binary.

use std::collections::VecDeque;

use tracing::trace;
use trend_core::{Axis, AxisRange, ChartError, ChartType, Geometry, Result, UpdateMode};
use trend_theme::Color;

use crate::backend::ChartBackend;

/// Point count a freshly created chart starts with.
const DEFAULT_POINT_COUNT: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WidgetId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeriesId {
    pub widget: WidgetId,
    pub index:  usize,
}

/// One primitive call, in the order it was issued.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    CreateLineChart(Geometry),
    SetBackground(WidgetId, Color, u8),
    SetBorderWidth(WidgetId, u16),
    SetLineWidth(WidgetId, u16),
    SetPointSize(WidgetId, u16),
    SetDivLineCount(WidgetId, u8, u8),
    SetChartType(WidgetId, ChartType),
    SetUpdateMode(WidgetId, UpdateMode),
    AddSeries(WidgetId, Color, Axis),
    SetRange(WidgetId, Axis, AxisRange),
    SetPointCount(WidgetId, usize),
    ClearValues(SeriesId),
    SetNextValue(SeriesId, i32),
    Refresh(WidgetId),
}

#[derive(Debug, Clone)]
pub struct RecordedSeries {
    pub color:  Color,
    pub axis:   Axis,
    /// `None` marks a blank point.
    pub points: VecDeque<Option<i32>>,
    /// Next write position in circular mode.
    cursor:     usize,
}

/// State of one recorded chart widget.
#[derive(Debug, Clone)]
pub struct RecordedChart {
    pub geometry:     Geometry,
    pub background:   Color,
    pub bg_opacity:   u8,
    pub border_width: u16,
    pub line_width:   u16,
    pub point_size:   u16,
    pub div_lines:    (u8, u8),
    pub kind:         ChartType,
    pub mode:         UpdateMode,
    pub primary:      AxisRange,
    pub secondary:    AxisRange,
    pub point_count:  usize,
    pub series:       Vec<RecordedSeries>,
    pub refreshes:    usize,
}

impl RecordedChart {
    fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            background:   Color::WHITE,
            bg_opacity:   0xff,
            border_width: 1,
            line_width:   2,
            point_size:   4,
            div_lines:    (3, 5),
            kind:         ChartType::Bar,
            mode:         UpdateMode::Shift,
            primary:      AxisRange::default(),
            secondary:    AxisRange::default(),
            point_count:  DEFAULT_POINT_COUNT,
            series:       Vec::new(),
            refreshes:    0,
        }
    }

    pub fn range(&self, axis: Axis) -> AxisRange {
        match axis {
            Axis::PrimaryY => self.primary,
            Axis::SecondaryY => self.secondary,
        }
    }
}

/// Records calls and tracks widget state in memory.
#[derive(Debug, Default)]
pub struct RecordingBackend {
    charts:        Vec<RecordedChart>,
    calls:         Vec<Call>,
    refuse_series: bool,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every later `add_series` fail, as an out-of-memory toolkit would.
    pub fn refuse_series(mut self, refuse: bool) -> Self {
        self.refuse_series = refuse;
        self
    }

    pub fn calls(&self) -> &[Call] {
        &self.calls
    }

    /// Drain the call log, keeping widget state.
    pub fn take_calls(&mut self) -> Vec<Call> {
        std::mem::take(&mut self.calls)
    }

    pub fn chart(&self, id: WidgetId) -> Option<&RecordedChart> {
        self.charts.get(id.0)
    }

    pub fn chart_count(&self) -> usize {
        self.charts.len()
    }

    /// Non-blank points of `series`, oldest first.
    pub fn points(&self, series: SeriesId) -> Vec<i32> {
        self.series(series)
            .map(|s| s.points.iter().flatten().copied().collect())
            .unwrap_or_default()
    }

    fn series(&self, id: SeriesId) -> Option<&RecordedSeries> {
        self.charts.get(id.widget.0)?.series.get(id.index)
    }

    fn record(&mut self, call: Call) {
        trace!(?call, "chart call");
        self.calls.push(call);
    }

    fn chart_mut(&mut self, id: WidgetId) -> Option<&mut RecordedChart> {
        let chart = self.charts.get_mut(id.0);
        if chart.is_none() {
            trace!(?id, "call on unknown chart ignored");
        }
        chart
    }
}

impl ChartBackend for RecordingBackend {
    type Parent = ();
    type Widget = WidgetId;
    type Series = SeriesId;

    fn create_line_chart(&mut self, _parent: &(), geometry: Geometry) -> Result<WidgetId> {
        self.record(Call::CreateLineChart(geometry));
        if geometry.width <= 0 || geometry.height <= 0 {
            return Err(ChartError::Backend(format!(
                "cannot create a {}x{} chart",
                geometry.width, geometry.height
            )));
        }
        self.charts.push(RecordedChart::new(geometry));
        Ok(WidgetId(self.charts.len() - 1))
    }

    fn set_background(&mut self, chart: WidgetId, color: Color, opacity: u8) {
        self.record(Call::SetBackground(chart, color, opacity));
        if let Some(c) = self.chart_mut(chart) {
            c.background = color;
            c.bg_opacity = opacity;
        }
    }

    fn set_border_width(&mut self, chart: WidgetId, width: u16) {
        self.record(Call::SetBorderWidth(chart, width));
        if let Some(c) = self.chart_mut(chart) {
            c.border_width = width;
        }
    }

    fn set_line_width(&mut self, chart: WidgetId, width: u16) {
        self.record(Call::SetLineWidth(chart, width));
        if let Some(c) = self.chart_mut(chart) {
            c.line_width = width;
        }
    }

    fn set_point_size(&mut self, chart: WidgetId, size: u16) {
        self.record(Call::SetPointSize(chart, size));
        if let Some(c) = self.chart_mut(chart) {
            c.point_size = size;
        }
    }

    fn set_div_line_count(&mut self, chart: WidgetId, h_lines: u8, v_lines: u8) {
        self.record(Call::SetDivLineCount(chart, h_lines, v_lines));
        if let Some(c) = self.chart_mut(chart) {
            c.div_lines = (h_lines, v_lines);
        }
    }

    fn set_chart_type(&mut self, chart: WidgetId, kind: ChartType) {
        self.record(Call::SetChartType(chart, kind));
        if let Some(c) = self.chart_mut(chart) {
            c.kind = kind;
        }
    }

    fn set_update_mode(&mut self, chart: WidgetId, mode: UpdateMode) {
        self.record(Call::SetUpdateMode(chart, mode));
        if let Some(c) = self.chart_mut(chart) {
            c.mode = mode;
        }
    }

    fn add_series(&mut self, chart: WidgetId, color: Color, axis: Axis) -> Option<SeriesId> {
        self.record(Call::AddSeries(chart, color, axis));
        if self.refuse_series {
            return None;
        }
        let c = self.chart_mut(chart)?;
        c.series.push(RecordedSeries {
            color,
            axis,
            points: std::iter::repeat(None).take(c.point_count).collect(),
            cursor: 0,
        });
        Some(SeriesId { widget: chart, index: c.series.len() - 1 })
    }

    fn set_range(&mut self, chart: WidgetId, axis: Axis, range: AxisRange) {
        self.record(Call::SetRange(chart, axis, range));
        if let Some(c) = self.chart_mut(chart) {
            match axis {
                Axis::PrimaryY => c.primary = range,
                Axis::SecondaryY => c.secondary = range,
            }
        }
    }

    fn set_point_count(&mut self, chart: WidgetId, count: usize) {
        self.record(Call::SetPointCount(chart, count));
        if let Some(c) = self.chart_mut(chart) {
            c.point_count = count;
            for s in &mut c.series {
                s.points.resize(count, None);
                s.cursor = 0;
            }
        }
    }

    fn clear_values(&mut self, chart: WidgetId, series: SeriesId) {
        self.record(Call::ClearValues(series));
        if let Some(s) = self
            .chart_mut(chart)
            .and_then(|c| c.series.get_mut(series.index))
        {
            s.points.iter_mut().for_each(|p| *p = None);
            s.cursor = 0;
        }
    }

    fn set_next_value(&mut self, chart: WidgetId, series: SeriesId, value: i32) {
        self.record(Call::SetNextValue(series, value));
        let Some(c) = self.chart_mut(chart) else {
            return;
        };
        let mode = c.mode;
        let Some(s) = c.series.get_mut(series.index) else {
            return;
        };
        if s.points.is_empty() {
            return;
        }
        match mode {
            UpdateMode::Shift => {
                s.points.pop_front();
                s.points.push_back(Some(value));
            }
            UpdateMode::Circular => {
                s.points[s.cursor] = Some(value);
                s.cursor = (s.cursor + 1) % s.points.len();
            }
        }
    }

    fn refresh(&mut self, chart: WidgetId) {
        self.record(Call::Refresh(chart));
        if let Some(c) = self.chart_mut(chart) {
            c.refreshes += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chart_with_series(backend: &mut RecordingBackend) -> (WidgetId, SeriesId) {
        let w = backend
            .create_line_chart(&(), Geometry::default())
            .unwrap();
        let s = backend.add_series(w, Color::CYAN, Axis::PrimaryY).unwrap();
        (w, s)
    }

    #[test]
    fn shift_mode_drops_oldest() {
        let mut b = RecordingBackend::new();
        let (w, s) = chart_with_series(&mut b);
        b.set_point_count(w, 3);
        for v in 1..=5 {
            b.set_next_value(w, s, v);
        }
        assert_eq!(b.points(s), vec![3, 4, 5]);
    }

    #[test]
    fn circular_mode_wraps() {
        let mut b = RecordingBackend::new();
        let (w, s) = chart_with_series(&mut b);
        b.set_update_mode(w, UpdateMode::Circular);
        b.set_point_count(w, 3);
        for v in 1..=4 {
            b.set_next_value(w, s, v);
        }
        assert_eq!(b.points(s), vec![4, 2, 3]);
    }

    #[test]
    fn clear_blanks_points() {
        let mut b = RecordingBackend::new();
        let (w, s) = chart_with_series(&mut b);
        b.set_next_value(w, s, 7);
        b.clear_values(w, s);
        assert!(b.points(s).is_empty());
        assert_eq!(b.chart(w).unwrap().series[0].points.len(), DEFAULT_POINT_COUNT);
    }

    #[test]
    fn rejects_empty_geometry() {
        let mut b = RecordingBackend::new();
        let geometry = Geometry { width: 0, ..Geometry::default() };
        assert!(matches!(
            b.create_line_chart(&(), geometry),
            Err(ChartError::Backend(_))
        ));
        assert_eq!(b.chart_count(), 0);
    }
}
