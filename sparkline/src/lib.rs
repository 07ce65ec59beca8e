//! Sparklines: small inline line/area charts for table cells and dashboards.
//!
//! A [`ValueSeries`] plus a [`RenderConfig`] is laid out by
//! [`compute_points`] into one [`PointSequence`] per interleaved series. Two
//! presentation variants draw those sequences through any [`DrawContext`]:
//!
//! - [`CellRendererSparkline`]: a bare single-series line for list cells.
//! - [`SparklineWidget`]: a framed, multi-series widget with tick gridlines.
//!
//! Hosts hold both as `dyn` [`SparklineView`] and can construct them by name
//! from a [`WidgetRegistry`].

pub mod cell;
pub mod config;
pub mod draw;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod recording;
pub mod registry;
pub mod renderer;
pub mod series;
pub mod theme;
pub mod view;
pub mod widget;

pub use cell::CellRendererSparkline;
pub use config::{RenderConfig, ValueScale};
pub use draw::DrawContext;
pub use error::{Error, Result};
pub use geometry::{Point, Rect, Size};
pub use layout::{compute_points, FillPolicy, PointSequence};
pub use recording::{DrawOp, Recorder};
pub use registry::WidgetRegistry;
pub use renderer::Renderer;
pub use series::ValueSeries;
pub use theme::{Color, Style};
pub use view::SparklineView;
pub use widget::SparklineWidget;
