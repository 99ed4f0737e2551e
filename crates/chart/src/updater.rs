use tracing::{debug, warn};
use trend_config::ChartConfig;
use trend_core::{Axis, ChartHandle, ChartType, Geometry, Result, SkipReason, UpdateMode, UpdateStatus};
use trend_theme::{ChartStyle, Color};

use crate::backend::ChartBackend;
use crate::history::SampleHistory;
use crate::scaling::Scaling;
use crate::smoothing::Ema;

/// Handle type produced by [`ChartUpdater::initialize`] for backend `B`.
pub type HandleFor<B> = ChartHandle<<B as ChartBackend>::Widget, <B as ChartBackend>::Series>;

/// Turns a window of samples into a smoothed, auto-scaled line on a chart
/// widget.
///
/// Holds only tuning; widgets live in the caller-owned [`ChartHandle`]s, so
/// one updater can drive any number of charts.
#[derive(Debug, Clone)]
pub struct ChartUpdater {
    ema:     Ema,
    scaling: Scaling,
    style:   ChartStyle,
}

impl ChartUpdater {
    pub fn new(ema: Ema, scaling: Scaling, style: ChartStyle) -> Self {
        Self { ema, scaling, style }
    }

    pub fn from_config(cfg: &ChartConfig) -> Self {
        Self::new(
            Ema::new(cfg.smoothing.alpha),
            Scaling::from_config(&cfg.scaling),
            ChartStyle::from_config(&cfg.style),
        )
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Create a minimal-looking line chart with one series on the primary axis.
    ///
    /// Every call creates a new widget.  If the toolkit refuses the series,
    /// the returned handle has none and later updates are skipped.
    pub fn initialize<B: ChartBackend>(
        &self,
        backend: &mut B,
        parent: &B::Parent,
        geometry: Geometry,
        color: Color,
    ) -> Result<HandleFor<B>> {
        let chart = backend.create_line_chart(parent, geometry)?;

        let style = &self.style;
        backend.set_background(chart, style.background, style.background_opacity);
        backend.set_border_width(chart, style.border_width);
        backend.set_line_width(chart, style.line_width);
        backend.set_point_size(chart, style.point_size);
        backend.set_div_line_count(chart, style.h_div_lines, style.v_div_lines);
        backend.set_chart_type(chart, ChartType::Line);
        backend.set_update_mode(chart, UpdateMode::Shift);

        let series = backend.add_series(chart, color, Axis::PrimaryY);
        if series.is_none() {
            warn!(?chart, "toolkit refused to create a chart series; updates will be skipped");
        }

        Ok(ChartHandle::new(chart, series))
    }

    /// Redraw `handle` with `samples`, scaled for data observed within
    /// `[observed_min, observed_max]`.
    ///
    /// Issues, in order: set range, set point count, clear, one push per
    /// sample, refresh.  Smoothing restarts from `samples[0]` on every call.
    pub fn update<B: ChartBackend>(
        &self,
        backend: &mut B,
        handle: &HandleFor<B>,
        samples: &[f32],
        observed_min: f32,
        observed_max: f32,
    ) -> UpdateStatus {
        let Some(series) = handle.series else {
            warn!(widget = ?handle.widget, "chart update skipped: handle has no series");
            return UpdateStatus::Skipped(SkipReason::InvalidHandle);
        };
        if samples.is_empty() {
            return UpdateStatus::Skipped(SkipReason::EmptyInput);
        }

        let range = self.scaling.axis_range(observed_min, observed_max);
        let points = self.ema.smooth_points(samples);
        let chart = handle.widget;

        backend.set_range(chart, Axis::PrimaryY, range);
        backend.set_point_count(chart, points.len());
        backend.clear_values(chart, series);
        for &value in &points {
            backend.set_next_value(chart, series, value);
        }
        backend.refresh(chart);

        debug!(?chart, points = points.len(), min = range.min, max = range.max, "chart updated");
        UpdateStatus::Applied { points: points.len(), range }
    }

    /// [`update`](Self::update) with the history's window and bounds.
    pub fn update_history<B: ChartBackend>(
        &self,
        backend: &mut B,
        handle: &HandleFor<B>,
        history: &mut SampleHistory,
    ) -> UpdateStatus {
        let (lo, hi) = history.bounds().unwrap_or((0.0, 0.0));
        self.update(backend, handle, history.as_slice(), lo, hi)
    }
}

impl Default for ChartUpdater {
    fn default() -> Self {
        Self::from_config(&ChartConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recorder::{Call, RecordingBackend};
    use trend_core::AxisRange;

    fn setup(cfg: &ChartConfig) -> (ChartUpdater, RecordingBackend, HandleFor<RecordingBackend>) {
        let updater = ChartUpdater::from_config(cfg);
        let mut backend = RecordingBackend::new();
        let handle = updater
            .initialize(&mut backend, &(), Geometry::default(), Color::from_rgb_u32(0x00ff88))
            .unwrap();
        backend.take_calls();
        (updater, backend, handle)
    }

    fn pushed(calls: &[Call]) -> Vec<i32> {
        calls
            .iter()
            .filter_map(|c| match c {
                Call::SetNextValue(_, v) => Some(*v),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn initialize_applies_minimal_style() {
        let updater = ChartUpdater::default();
        let mut backend = RecordingBackend::new();
        let handle = updater
            .initialize(&mut backend, &(), Geometry { width: 240, height: 60, x: 10, y: 20 }, Color::CYAN)
            .unwrap();

        assert!(handle.is_complete());
        let chart = backend.chart(handle.widget).unwrap();
        assert_eq!(chart.geometry, Geometry { width: 240, height: 60, x: 10, y: 20 });
        assert_eq!(chart.bg_opacity, 0);
        assert_eq!(chart.border_width, 0);
        assert_eq!(chart.point_size, 0);
        assert_eq!(chart.div_lines, (0, 0));
        assert_eq!(chart.kind, ChartType::Line);
        assert_eq!(chart.mode, UpdateMode::Shift);
        assert_eq!(chart.series.len(), 1);
        assert_eq!(chart.series[0].color, Color::CYAN);
        assert_eq!(chart.series[0].axis, Axis::PrimaryY);
    }

    #[test]
    fn initialize_twice_creates_two_charts() {
        let updater = ChartUpdater::default();
        let mut backend = RecordingBackend::new();
        let a = updater.initialize(&mut backend, &(), Geometry::default(), Color::CYAN).unwrap();
        let b = updater.initialize(&mut backend, &(), Geometry::default(), Color::WHITE).unwrap();
        assert_ne!(a.widget, b.widget);
        assert_eq!(backend.chart_count(), 2);
    }

    #[test]
    fn initialize_propagates_widget_failure() {
        let updater = ChartUpdater::default();
        let mut backend = RecordingBackend::new();
        let geometry = Geometry { height: 0, ..Geometry::default() };
        assert!(updater.initialize(&mut backend, &(), geometry, Color::CYAN).is_err());
    }

    #[test]
    fn pushes_every_sample_in_order() {
        let (updater, mut backend, handle) = setup(&ChartConfig::passthrough());
        let samples = [3.7, 9.1, -4.2, 12.0, 0.5];

        let status = updater.update(&mut backend, &handle, &samples, -4.2, 12.0);

        assert_eq!(status, UpdateStatus::Applied { points: 5, range: AxisRange::new(-4, 12) });
        assert_eq!(pushed(backend.calls()), vec![3, 9, -4, 12, 0]);
        assert_eq!(backend.points(handle.series.unwrap()), vec![3, 9, -4, 12, 0]);
    }

    #[test]
    fn calls_are_issued_in_fixed_order() {
        let (updater, mut backend, handle) = setup(&ChartConfig::default());
        let series = handle.series.unwrap();
        let w = handle.widget;

        let _ = updater.update(&mut backend, &handle, &[1.0, 2.0], 0.0, 100.0);

        assert_eq!(
            backend.calls(),
            &[
                Call::SetRange(w, Axis::PrimaryY, AxisRange::new(-15, 115)),
                Call::SetPointCount(w, 2),
                Call::ClearValues(series),
                Call::SetNextValue(series, 1),
                Call::SetNextValue(series, 1),
                Call::Refresh(w),
            ]
        );
    }

    #[test]
    fn equal_bounds_use_default_range() {
        let (updater, mut backend, handle) = setup(&ChartConfig::default());
        let _ = updater.update(&mut backend, &handle, &[500.0, 510.0], 37.0, 37.0);
        assert_eq!(
            backend.chart(handle.widget).unwrap().range(Axis::PrimaryY),
            AxisRange::new(0, 100)
        );
    }

    #[test]
    fn constant_samples_plot_flat() {
        let (updater, mut backend, handle) = setup(&ChartConfig::default());
        let _ = updater.update(&mut backend, &handle, &[10.0; 30], 10.0, 10.0);
        assert_eq!(pushed(backend.calls()), vec![10; 30]);
    }

    #[test]
    fn first_point_is_first_sample() {
        let (updater, mut backend, handle) = setup(&ChartConfig::default());
        let _ = updater.update(&mut backend, &handle, &[73.0, 0.0, 0.0, 0.0], 0.0, 73.0);
        assert_eq!(pushed(backend.calls())[0], 73);
    }

    #[test]
    fn small_span_keeps_nonzero_axis() {
        let (updater, mut backend, handle) = setup(&ChartConfig::default());
        let status = updater.update(&mut backend, &handle, &[0.0, 0.5], 0.0, 0.5);
        assert_eq!(status, UpdateStatus::Applied { points: 2, range: AxisRange::new(0, 1) });
    }

    #[test]
    fn smoothing_restarts_each_update() {
        let (updater, mut backend, handle) = setup(&ChartConfig::default());
        let _ = updater.update(&mut backend, &handle, &[0.0, 0.0, 0.0], 0.0, 100.0);
        backend.take_calls();

        let _ = updater.update(&mut backend, &handle, &[100.0, 100.0], 0.0, 100.0);
        assert_eq!(pushed(backend.calls()), vec![100, 100]);
    }

    #[test]
    fn empty_samples_touch_nothing() {
        let (updater, mut backend, handle) = setup(&ChartConfig::default());
        let _ = updater.update(&mut backend, &handle, &[4.0, 5.0], 4.0, 5.0);
        let before = backend.chart(handle.widget).unwrap().range(Axis::PrimaryY);
        backend.take_calls();

        let status = updater.update(&mut backend, &handle, &[], 0.0, 1000.0);

        assert_eq!(status, UpdateStatus::Skipped(SkipReason::EmptyInput));
        assert!(backend.calls().is_empty());
        assert_eq!(backend.chart(handle.widget).unwrap().range(Axis::PrimaryY), before);
        assert_eq!(backend.points(handle.series.unwrap()), vec![4, 4]);
    }

    #[test]
    fn missing_series_touches_nothing() {
        let updater = ChartUpdater::default();
        let mut backend = RecordingBackend::new().refuse_series(true);
        let handle = updater
            .initialize(&mut backend, &(), Geometry::default(), Color::CYAN)
            .unwrap();
        assert!(!handle.is_complete());
        backend.take_calls();

        let status = updater.update(&mut backend, &handle, &[1.0, 2.0, 3.0], 1.0, 3.0);

        assert_eq!(status, UpdateStatus::Skipped(SkipReason::InvalidHandle));
        assert!(backend.calls().is_empty());
    }

    #[test]
    fn bad_reading_does_not_flatten_window() {
        let (updater, mut backend, handle) = setup(&ChartConfig::default());
        let mut history = SampleHistory::new(8);
        history.extend([50.0, f32::NAN, 50.0, 50.0, 50.0]);

        let status = updater.update_history(&mut backend, &handle, &mut history);

        assert_eq!(status, UpdateStatus::Applied { points: 5, range: AxisRange::new(0, 100) });
        assert_eq!(backend.points(handle.series.unwrap()), vec![50; 5]);
    }

    #[test]
    fn history_window_scrolls() {
        let (updater, mut backend, handle) = setup(&ChartConfig::passthrough());
        let mut history = SampleHistory::new(3);

        assert_eq!(
            updater.update_history(&mut backend, &handle, &mut history),
            UpdateStatus::Skipped(SkipReason::EmptyInput)
        );

        history.extend([10.0, 20.0, 30.0, 40.0]);
        let status = updater.update_history(&mut backend, &handle, &mut history);

        assert_eq!(status, UpdateStatus::Applied { points: 3, range: AxisRange::new(20, 40) });
        assert_eq!(backend.points(handle.series.unwrap()), vec![20, 30, 40]);
    }
}
