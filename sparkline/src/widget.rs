//! Standalone sparkline widget with background, border and tick gridlines.

use serde_json::Value;

use crate::config::RenderConfig;
use crate::draw::{paint_sequence, DrawContext};
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect, Size};
use crate::layout::{compute_points, PointSequence};
use crate::series::ValueSeries;
use crate::theme::{Color, Style};
use crate::view::{self, props, SparklineView, PREFERRED_HEIGHT};

/// Number of bands the tick gridlines split the height into.
pub const NTICKS: u32 = 4;

#[derive(Clone, Debug, Default)]
pub struct SparklineWidget {
    series: ValueSeries,
    config: RenderConfig,
    /// Flat `[r, g, b, r, g, b, ..]` per-series colours in `0.0..=1.0`.
    rgb: Vec<f64>,
    style: Style,
    redraw_pending: bool,
}

impl SparklineWidget {
    pub const TYPE_NAME: &'static str = "Sparkline";

    const PROPERTIES: &'static [&'static str] = &[
        props::DATA_ARRAY,
        props::FILLED,
        props::REVERSED,
        props::NUM_SETS,
        props::RGB,
        props::VALUE_SCALE,
        props::CLAMP,
        props::BREAK_AT_ZERO,
    ];

    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the data and ask the host for a repaint.
    pub fn set_data_array(&mut self, values: &[f64]) {
        self.series.replace(values);
        self.queue_draw();
    }

    pub fn data_array(&self) -> &[f64] {
        self.series.values()
    }

    pub fn set_filled(&mut self, filled: bool) {
        self.config.filled = filled;
        self.queue_draw();
    }

    pub fn filled(&self) -> bool {
        self.config.filled
    }

    pub fn set_reversed(&mut self, reversed: bool) {
        self.config.reversed = reversed;
        self.queue_draw();
    }

    pub fn reversed(&self) -> bool {
        self.config.reversed
    }

    /// Zero is rejected and the previous count kept.
    pub fn set_num_sets(&mut self, num_sets: usize) -> Result<()> {
        self.config.set_num_sets(num_sets)?;
        self.queue_draw();
        Ok(())
    }

    pub fn num_sets(&self) -> usize {
        self.config.num_sets().get()
    }

    pub fn points_per_series(&self) -> usize {
        self.series.points_per_series(self.config.num_sets())
    }

    /// Explicit series colours. Only used when it holds exactly three
    /// components per series; otherwise the style palette applies.
    pub fn set_rgb(&mut self, rgb: &[f64]) {
        self.rgb = rgb.to_vec();
        self.queue_draw();
    }

    pub fn rgb(&self) -> &[f64] {
        &self.rgb
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config;
        self.queue_draw();
    }

    pub fn queue_draw(&mut self) {
        self.redraw_pending = true;
    }

    pub fn series_color(&self, series: usize) -> Color {
        if self.rgb.len() == self.num_sets() * 3 {
            let c = &self.rgb[series * 3..series * 3 + 3];
            return Color::from_unit(c[0], c[1], c[2]);
        }
        self.style.series_color(series)
    }

    fn paint_frame(&self, ctx: &mut dyn DrawContext, area: Rect) {
        let inner = Rect::new(area.x, area.y, area.width - 1.0, area.height - 1.0);
        ctx.fill_rect(inner, self.style.mid);
        ctx.stroke_rect(
            Rect::new(area.x + 0.5, area.y + 0.5, inner.width, inner.height),
            self.style.fg,
            1.0,
        );

        let band = (area.height / NTICKS as f32).floor();
        for k in 1..NTICKS {
            let y = area.y + band * k as f32;
            ctx.draw_line(
                Point::new(area.x + 1.0, y),
                Point::new(area.right() - 2.0, y),
                self.style.dark,
                1.0,
            );
        }
    }
}

impl SparklineView for SparklineWidget {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn preferred_size(&self) -> Size {
        let width = u32::try_from(self.points_per_series()).unwrap_or(u32::MAX);
        Size::new(width, PREFERRED_HEIGHT)
    }

    fn layout(&self, allocation: Rect) -> Vec<PointSequence> {
        compute_points(&self.series, &self.config, allocation)
    }

    fn paint(&self, ctx: &mut dyn DrawContext, allocation: Rect) {
        if allocation.is_empty() || self.series.is_empty() {
            return;
        }
        tracing::trace!(
            points = self.series.len(),
            num_sets = self.num_sets(),
            ?allocation,
            "paint sparkline widget"
        );

        ctx.push_clip(allocation);
        self.paint_frame(ctx, allocation);
        for seq in self.layout(allocation) {
            let color = self.series_color(seq.series);
            paint_sequence(ctx, &seq, &self.config, allocation, color);
        }
        ctx.pop_clip();
    }

    fn set_style(&mut self, style: Style) {
        self.style = style;
        self.queue_draw();
    }

    fn property_names(&self) -> &'static [&'static str] {
        Self::PROPERTIES
    }

    fn set_property(&mut self, name: &str, value: &Value) -> Result<()> {
        match name {
            props::NUM_SETS => {
                let n = view::expect_count(props::NUM_SETS, value)?;
                return self.set_num_sets(n);
            }
            props::RGB => {
                let rgb = view::expect_numbers(props::RGB, value)?;
                self.set_rgb(&rgb);
                return Ok(());
            }
            _ => {}
        }
        if view::set_common(&mut self.series, &mut self.config, name, value)? {
            self.queue_draw();
            return Ok(());
        }
        Err(Error::UnknownProperty {
            widget: Self::TYPE_NAME,
            property: name.to_string(),
        })
    }

    fn property(&self, name: &str) -> Result<Value> {
        match name {
            props::NUM_SETS => return Ok(Value::from(self.num_sets())),
            props::RGB => return Ok(view::numbers(&self.rgb)),
            _ => {}
        }
        view::get_common(&self.series, &self.config, name).ok_or_else(|| Error::UnknownProperty {
            widget: Self::TYPE_NAME,
            property: name.to_string(),
        })
    }

    fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{DrawOp, Recorder};
    use crate::theme::{BLACK, MID_GRAY};
    use serde_json::json;

    fn lines(rec: &Recorder) -> Vec<(Point, Point)> {
        rec.ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Line { from, to, .. } => Some((*from, *to)),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn defaults() {
        let w = SparklineWidget::new();
        assert!(w.filled());
        assert!(!w.reversed());
        assert_eq!(w.num_sets(), 1);
        assert!(w.data_array().is_empty());
        assert_eq!(w.preferred_size(), Size::new(0, 20));
    }

    #[test]
    fn preferred_width_is_points_per_series() {
        let mut w = SparklineWidget::new();
        w.set_data_array(&[0.0; 9]);
        w.set_num_sets(2).unwrap();
        assert_eq!(w.preferred_size(), Size::new(4, 20));
    }

    #[test]
    fn data_array_is_copied_on_set() {
        let mut w = SparklineWidget::new();
        let mut input = vec![0.1, 0.9, 0.4];
        w.set_data_array(&input);
        input[1] = 0.0;
        input.push(1.0);
        assert_eq!(w.data_array(), &[0.1, 0.9, 0.4]);
        assert_eq!(w.property("data_array").unwrap(), json!([0.1, 0.9, 0.4]));
    }

    #[test]
    fn data_write_requests_one_redraw() {
        let mut w = SparklineWidget::new();
        assert!(!w.take_redraw_request());
        w.set_data_array(&[0.1, 0.2]);
        assert!(w.take_redraw_request());
        assert!(!w.take_redraw_request());
    }

    #[test]
    fn rejected_num_sets_keeps_previous() {
        let mut w = SparklineWidget::new();
        w.set_num_sets(2).unwrap();
        w.take_redraw_request();
        let err = w.set_property("num_sets", &json!(0)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfiguration(_)));
        assert_eq!(w.num_sets(), 2);
        assert!(!w.take_redraw_request());
    }

    #[test]
    fn frame_and_ticks() {
        let mut w = SparklineWidget::new();
        w.set_data_array(&[0.0, 1.0]);
        let mut rec = Recorder::new();
        w.paint(&mut rec, Rect::new(0.0, 0.0, 40.0, 20.0));

        let style = Style::default();
        assert_eq!(rec.ops()[0], DrawOp::PushClip(Rect::new(0.0, 0.0, 40.0, 20.0)));
        assert_eq!(
            rec.ops()[1],
            DrawOp::FillRect {
                rect: Rect::new(0.0, 0.0, 39.0, 19.0),
                color: style.mid,
            }
        );
        assert_eq!(
            rec.ops()[2],
            DrawOp::StrokeRect {
                rect: Rect::new(0.5, 0.5, 39.0, 19.0),
                color: style.fg,
                width: 1.0,
            }
        );
        assert_eq!(
            lines(&rec),
            vec![
                (Point::new(1.0, 5.0), Point::new(38.0, 5.0)),
                (Point::new(1.0, 10.0), Point::new(38.0, 10.0)),
                (Point::new(1.0, 15.0), Point::new(38.0, 15.0)),
            ]
        );
        assert_eq!(rec.ops().last(), Some(&DrawOp::PopClip));
    }

    #[test]
    fn tick_spacing_truncates_band_height() {
        let mut w = SparklineWidget::new();
        w.set_data_array(&[0.5]);
        let mut rec = Recorder::new();
        w.paint(&mut rec, Rect::new(0.0, 0.0, 10.0, 22.0));
        let ys: Vec<f32> = lines(&rec).iter().map(|(a, _)| a.y).collect();
        assert_eq!(ys, vec![5.0, 10.0, 15.0]);
    }

    #[test]
    fn series_use_palette_colors() {
        let mut w = SparklineWidget::new();
        w.set_data_array(&[0.0, 1.0, 1.0, 0.0]);
        w.set_num_sets(2).unwrap();
        let mut rec = Recorder::new();
        w.paint(&mut rec, Rect::from_size(10.0, 20.0));

        let colors: Vec<Color> = rec
            .ops()
            .iter()
            .filter_map(|op| match op {
                DrawOp::Polygon { color, .. } => Some(*color),
                _ => None,
            })
            .collect();
        assert_eq!(colors, vec![BLACK, MID_GRAY]);
    }

    #[test]
    fn rgb_overrides_palette_only_when_complete() {
        let mut w = SparklineWidget::new();
        w.set_num_sets(2).unwrap();
        w.set_rgb(&[1.0, 0.0, 0.0, 0.0, 0.0, 1.0]);
        assert_eq!(w.series_color(0), Color::rgb(255, 0, 0));
        assert_eq!(w.series_color(1), Color::rgb(0, 0, 255));

        w.set_rgb(&[1.0, 0.0, 0.0]);
        assert_eq!(w.series_color(0), BLACK);
        assert_eq!(w.series_color(1), MID_GRAY);
    }

    #[test]
    fn outline_mode_strokes_each_series() {
        let mut w = SparklineWidget::new();
        w.set_filled(false);
        w.set_data_array(&[0.0, 1.0, 0.0, 1.0]);
        w.set_num_sets(2).unwrap();
        let mut rec = Recorder::new();
        w.paint(&mut rec, Rect::from_size(10.0, 20.0));

        let polylines: Vec<&[Point]> = rec.polylines().collect();
        assert_eq!(polylines.len(), 2);
        for line in polylines {
            assert_eq!(line, &[Point::new(0.0, 20.0), Point::new(10.0, 0.0)]);
        }
        assert_eq!(rec.polygons().count(), 0);
    }

    #[test]
    fn empty_series_is_a_noop() {
        let w = SparklineWidget::new();
        let mut rec = Recorder::new();
        w.paint(&mut rec, Rect::from_size(40.0, 20.0));
        assert!(rec.ops().is_empty());
    }

    #[test]
    fn empty_allocation_is_a_noop() {
        let mut w = SparklineWidget::new();
        w.set_data_array(&[0.5, 0.5]);
        let mut rec = Recorder::new();
        w.paint(&mut rec, Rect::from_size(0.0, 20.0));
        assert!(rec.ops().is_empty());
    }

    #[test]
    fn dynamic_properties() {
        let mut w = SparklineWidget::new();
        w.set_property("data_array", &json!([0.1, 0.2, 0.3, 0.4])).unwrap();
        w.set_property("num_sets", &json!(2)).unwrap();
        w.set_property("reversed", &json!(true)).unwrap();
        w.set_property("rgb", &json!([0, 0, 0, 1, 1, 1])).unwrap();

        assert_eq!(w.property("num_sets").unwrap(), json!(2));
        assert_eq!(w.property("reversed").unwrap(), json!(true));
        assert_eq!(w.property("data_array").unwrap(), json!([0.1, 0.2, 0.3, 0.4]));
        assert_eq!(w.property("rgb").unwrap(), json!([0.0, 0.0, 0.0, 1.0, 1.0, 1.0]));
        assert!(matches!(
            w.property("xalign"),
            Err(Error::UnknownProperty { widget: "Sparkline", .. })
        ));
        assert!(matches!(
            w.set_property("filled", &json!(1)),
            Err(Error::PropertyType { property: "filled", .. })
        ));
    }
}
