//! Capability interface the host holds every sparkline variant through,
//! plus the dynamic property plumbing shared by the variants.

use serde_json::Value;

use crate::config::{RenderConfig, ValueScale};
use crate::draw::DrawContext;
use crate::error::{Error, Result};
use crate::geometry::{Rect, Size};
use crate::layout::PointSequence;
use crate::series::ValueSeries;
use crate::theme::Style;

/// Height every sparkline asks for, whatever its data.
pub const PREFERRED_HEIGHT: u32 = 20;

pub mod props {
    pub const DATA_ARRAY: &str = "data_array";
    pub const FILLED: &str = "filled";
    pub const REVERSED: &str = "reversed";
    pub const NUM_SETS: &str = "num_sets";
    pub const RGB: &str = "rgb";
    pub const VALUE_SCALE: &str = "value_scale";
    pub const CLAMP: &str = "clamp";
    pub const BREAK_AT_ZERO: &str = "break_at_zero";
}

/// A sparkline as seen by the host toolkit.
pub trait SparklineView {
    /// Name the type is registered under.
    fn type_name(&self) -> &'static str;
    /// Size to request during layout negotiation.
    fn preferred_size(&self) -> Size;
    /// Point layout `paint` would draw into `area`.
    fn layout(&self, area: Rect) -> Vec<PointSequence>;
    /// Draw into `area`. Must not touch pixels outside it.
    fn paint(&self, ctx: &mut dyn DrawContext, area: Rect);
    fn set_style(&mut self, style: Style);

    fn property_names(&self) -> &'static [&'static str];
    fn set_property(&mut self, name: &str, value: &Value) -> Result<()>;
    fn property(&self, name: &str) -> Result<Value>;

    /// Consume a pending redraw request raised by a property write.
    fn take_redraw_request(&mut self) -> bool {
        false
    }
}

pub(crate) fn expect_bool(property: &'static str, value: &Value) -> Result<bool> {
    value.as_bool().ok_or(Error::PropertyType {
        property,
        expected: "a boolean",
    })
}

pub(crate) fn expect_count(property: &'static str, value: &Value) -> Result<usize> {
    value
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or(Error::PropertyType {
            property,
            expected: "a non-negative integer",
        })
}

pub(crate) fn expect_numbers(property: &'static str, value: &Value) -> Result<Vec<f64>> {
    let err = || Error::PropertyType {
        property,
        expected: "an array of numbers",
    };
    value
        .as_array()
        .ok_or_else(err)?
        .iter()
        .map(|v| v.as_f64().ok_or_else(err))
        .collect()
}

pub(crate) fn numbers(values: &[f64]) -> Value {
    Value::Array(values.iter().map(|&v| Value::from(v)).collect())
}

/// Apply a property both variants understand. `Ok(false)` means the name is
/// not one of them.
pub(crate) fn set_common(
    series: &mut ValueSeries,
    config: &mut RenderConfig,
    name: &str,
    value: &Value,
) -> Result<bool> {
    match name {
        props::DATA_ARRAY => {
            let values = expect_numbers(props::DATA_ARRAY, value)?;
            series.replace(&values);
        }
        props::FILLED => config.filled = expect_bool(props::FILLED, value)?,
        props::REVERSED => config.reversed = expect_bool(props::REVERSED, value)?,
        props::CLAMP => config.clamp = expect_bool(props::CLAMP, value)?,
        props::BREAK_AT_ZERO => config.break_at_zero = expect_bool(props::BREAK_AT_ZERO, value)?,
        props::VALUE_SCALE => {
            config.scale = value
                .as_str()
                .and_then(ValueScale::parse)
                .ok_or(Error::PropertyType {
                    property: props::VALUE_SCALE,
                    expected: "\"fraction\" or \"percent\"",
                })?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}

pub(crate) fn get_common(series: &ValueSeries, config: &RenderConfig, name: &str) -> Option<Value> {
    let value = match name {
        props::DATA_ARRAY => numbers(series.values()),
        props::FILLED => Value::Bool(config.filled),
        props::REVERSED => Value::Bool(config.reversed),
        props::CLAMP => Value::Bool(config.clamp),
        props::BREAK_AT_ZERO => Value::Bool(config.break_at_zero),
        props::VALUE_SCALE => Value::from(config.scale.as_str()),
        _ => return None,
    };
    Some(value)
}
