//! The drawing surface a host hands to `paint`, and the shared series painter.

use crate::config::RenderConfig;
use crate::geometry::{Point, Rect};
use crate::layout::{FillPolicy, PointSequence};
use crate::theme::Color;

/// Line width used for sparkline strokes.
pub const LINE_WIDTH: f32 = 0.5;

/// 2D drawing primitives sparklines need from a host toolkit.
///
/// Clip regions nest: every `push_clip` intersects with the current clip and
/// must be balanced by a `pop_clip`.
pub trait DrawContext {
    fn push_clip(&mut self, area: Rect);
    fn pop_clip(&mut self);

    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32);
    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32);
    /// Open polyline; fewer than two points draws nothing.
    fn draw_polyline(&mut self, points: &[Point], color: Color, width: f32);
    /// Closed polygon filled with the nonzero rule.
    fn fill_polygon(&mut self, points: &[Point], color: Color);
}

/// Fill or stroke one computed series inside `area`.
pub(crate) fn paint_sequence(
    ctx: &mut dyn DrawContext,
    seq: &PointSequence,
    config: &RenderConfig,
    area: Rect,
    color: Color,
) {
    let baseline = area.bottom();
    match seq.fill {
        FillPolicy::Closed => {
            let outline = seq.fill_outline(baseline, area.x);
            ctx.fill_polygon(&outline, color);
        }
        FillPolicy::Open => {
            for segment in seq.stroke_segments(baseline, config.break_at_zero) {
                ctx.draw_polyline(segment, color, LINE_WIDTH);
            }
        }
    }
}
