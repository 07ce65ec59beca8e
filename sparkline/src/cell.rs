//! Sparkline drawn inside a list or tree cell.

use serde_json::Value;

use crate::config::RenderConfig;
use crate::draw::{paint_sequence, DrawContext};
use crate::error::{Error, Result};
use crate::geometry::{Rect, Size};
use crate::layout::{compute_points, PointSequence};
use crate::series::ValueSeries;
use crate::theme::Style;
use crate::view::{self, props, SparklineView, PREFERRED_HEIGHT};

/// Single-series sparkline for cells; no background, border or ticks.
#[derive(Clone, Debug, Default)]
pub struct CellRendererSparkline {
    series: ValueSeries,
    config: RenderConfig,
    style: Style,
}

impl CellRendererSparkline {
    pub const TYPE_NAME: &'static str = "CellRendererSparkline";

    const PROPERTIES: &'static [&'static str] = &[
        props::DATA_ARRAY,
        props::FILLED,
        props::REVERSED,
        props::VALUE_SCALE,
        props::CLAMP,
        props::BREAK_AT_ZERO,
    ];

    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_data_array(&mut self, values: &[f64]) {
        self.series.replace(values);
    }

    pub fn data_array(&self) -> &[f64] {
        self.series.values()
    }

    pub fn set_filled(&mut self, filled: bool) {
        self.config.filled = filled;
    }

    pub fn filled(&self) -> bool {
        self.config.filled
    }

    pub fn set_reversed(&mut self, reversed: bool) {
        self.config.reversed = reversed;
    }

    pub fn reversed(&self) -> bool {
        self.config.reversed
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Replace the whole configuration. The series count is ignored; a cell
    /// always draws one series.
    pub fn set_config(&mut self, config: RenderConfig) {
        self.config = config.with_num_sets(std::num::NonZeroUsize::MIN);
    }
}

impl SparklineView for CellRendererSparkline {
    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    /// One pixel per sample, regardless of how the samples are grouped.
    fn preferred_size(&self) -> Size {
        let width = u32::try_from(self.series.len()).unwrap_or(u32::MAX);
        Size::new(width, PREFERRED_HEIGHT)
    }

    fn layout(&self, cell: Rect) -> Vec<PointSequence> {
        compute_points(&self.series, &self.config, cell)
    }

    fn paint(&self, ctx: &mut dyn DrawContext, cell: Rect) {
        if self.series.is_empty() || cell.is_empty() {
            return;
        }
        tracing::trace!(points = self.series.len(), ?cell, "paint cell sparkline");

        ctx.push_clip(cell);
        for seq in self.layout(cell) {
            paint_sequence(ctx, &seq, &self.config, cell, self.style.text);
        }
        ctx.pop_clip();
    }

    fn set_style(&mut self, style: Style) {
        self.style = style;
    }

    fn property_names(&self) -> &'static [&'static str] {
        Self::PROPERTIES
    }

    fn set_property(&mut self, name: &str, value: &Value) -> Result<()> {
        if view::set_common(&mut self.series, &mut self.config, name, value)? {
            return Ok(());
        }
        Err(Error::UnknownProperty {
            widget: Self::TYPE_NAME,
            property: name.to_string(),
        })
    }

    fn property(&self, name: &str) -> Result<Value> {
        view::get_common(&self.series, &self.config, name).ok_or_else(|| Error::UnknownProperty {
            widget: Self::TYPE_NAME,
            property: name.to_string(),
        })
    }
}
