//! Drawing context that records primitives instead of rasterising them.
//!
//! Hosts whose toolkit is not tiny-skia can paint into a [`Recorder`] and
//! replay the ops against their own context.

use serde::Serialize;

use crate::draw::DrawContext;
use crate::geometry::{Point, Rect};
use crate::theme::Color;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    PushClip(Rect),
    PopClip,
    FillRect { rect: Rect, color: Color },
    StrokeRect { rect: Rect, color: Color, width: f32 },
    Line { from: Point, to: Point, color: Color, width: f32 },
    Polyline { points: Vec<Point>, color: Color, width: f32 },
    Polygon { points: Vec<Point>, color: Color },
}

#[derive(Debug, Default)]
pub struct Recorder {
    ops: Vec<DrawOp>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn polylines(&self) -> impl Iterator<Item = &[Point]> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Polyline { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    pub fn polygons(&self) -> impl Iterator<Item = &[Point]> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Polygon { points, .. } => Some(points.as_slice()),
            _ => None,
        })
    }

    /// Replay every recorded op onto another context.
    pub fn replay(&self, ctx: &mut dyn DrawContext) {
        for op in &self.ops {
            match op {
                DrawOp::PushClip(area) => ctx.push_clip(*area),
                DrawOp::PopClip => ctx.pop_clip(),
                DrawOp::FillRect { rect, color } => ctx.fill_rect(*rect, *color),
                DrawOp::StrokeRect { rect, color, width } => ctx.stroke_rect(*rect, *color, *width),
                DrawOp::Line {
                    from,
                    to,
                    color,
                    width,
                } => ctx.draw_line(*from, *to, *color, *width),
                DrawOp::Polyline {
                    points,
                    color,
                    width,
                } => ctx.draw_polyline(points, *color, *width),
                DrawOp::Polygon { points, color } => ctx.fill_polygon(points, *color),
            }
        }
    }
}

impl DrawContext for Recorder {
    fn push_clip(&mut self, area: Rect) {
        self.ops.push(DrawOp::PushClip(area));
    }

    fn pop_clip(&mut self) {
        self.ops.push(DrawOp::PopClip);
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(DrawOp::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        self.ops.push(DrawOp::StrokeRect { rect, color, width });
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        self.ops.push(DrawOp::Line {
            from,
            to,
            color,
            width,
        });
    }

    fn draw_polyline(&mut self, points: &[Point], color: Color, width: f32) {
        self.ops.push(DrawOp::Polyline {
            points: points.to_vec(),
            color,
            width,
        });
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        self.ops.push(DrawOp::Polygon {
            points: points.to_vec(),
            color,
        });
    }
}
