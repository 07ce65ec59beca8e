//! Raster drawing context backed by a tiny-skia pixmap.

use std::path::Path;

use tiny_skia::{
    FillRule, LineCap, Mask, Paint, PathBuilder, Pixmap, Stroke, Transform,
};

use crate::draw::DrawContext;
use crate::error::{Error, Result};
use crate::geometry::{Point, Rect};
use crate::theme::Color;

pub struct Renderer {
    pub pixmap: Pixmap,
    clips: Vec<Rect>,
    mask: Option<Mask>,
}

impl Renderer {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixmap = Pixmap::new(width, height).ok_or(Error::Surface { width, height })?;
        Ok(Self {
            pixmap,
            clips: Vec::new(),
            mask: None,
        })
    }

    pub fn clear(&mut self, color: Color) {
        self.pixmap.fill(color.to_skia());
    }

    /// Unpremultiplied colour at a pixel, `None` outside the surface.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        let p = self.pixmap.pixel(x, y)?.demultiply();
        Some(Color::rgba(p.red(), p.green(), p.blue(), p.alpha()))
    }

    pub fn save_png(&self, path: impl AsRef<Path>) -> Result<()> {
        self.pixmap
            .save_png(path)
            .map_err(|e| Error::Encode(e.to_string()))
    }

    fn paint(color: Color, anti_alias: bool) -> Paint<'static> {
        let mut paint = Paint::default();
        paint.set_color(color.to_skia());
        paint.anti_alias = anti_alias;
        paint
    }

    fn stroke(width: f32) -> Stroke {
        let mut stroke = Stroke::default();
        stroke.width = width;
        stroke.line_cap = LineCap::Round;
        stroke
    }

    fn rebuild_mask(&mut self) {
        let Some(first) = self.clips.first() else {
            self.mask = None;
            return;
        };
        let clip = self.clips[1..]
            .iter()
            .try_fold(*first, |acc, r| acc.intersect(r));

        let mut mask = match Mask::new(self.pixmap.width(), self.pixmap.height()) {
            Some(mask) => mask,
            None => {
                self.mask = None;
                return;
            }
        };
        if let Some(rect) = clip.and_then(to_skia_rect) {
            let path = PathBuilder::from_rect(rect);
            mask.fill_path(&path, FillRule::Winding, false, Transform::identity());
        }
        // An empty intersection leaves the mask cleared, hiding everything.
        self.mask = Some(mask);
    }
}

impl DrawContext for Renderer {
    fn push_clip(&mut self, area: Rect) {
        self.clips.push(area);
        self.rebuild_mask();
    }

    fn pop_clip(&mut self) {
        self.clips.pop();
        self.rebuild_mask();
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        let paint = Self::paint(color, false);
        if let Some(rect) = to_skia_rect(rect) {
            self.pixmap
                .fill_rect(rect, &paint, Transform::identity(), self.mask.as_ref());
        }
    }

    fn stroke_rect(&mut self, rect: Rect, color: Color, width: f32) {
        let paint = Self::paint(color, false);
        let mut stroke = Stroke::default();
        stroke.width = width;
        if let Some(rect) = to_skia_rect(rect) {
            let path = PathBuilder::from_rect(rect);
            self.pixmap.stroke_path(
                &path,
                &paint,
                &stroke,
                Transform::identity(),
                self.mask.as_ref(),
            );
        }
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color, width: f32) {
        let paint = Self::paint(color, false);
        let mut stroke = Stroke::default();
        stroke.width = width;

        let mut pb = PathBuilder::new();
        pb.move_to(from.x, from.y);
        pb.line_to(to.x, to.y);
        if let Some(path) = pb.finish() {
            self.pixmap.stroke_path(
                &path,
                &paint,
                &stroke,
                Transform::identity(),
                self.mask.as_ref(),
            );
        }
    }

    fn draw_polyline(&mut self, points: &[Point], color: Color, width: f32) {
        if points.len() < 2 {
            return;
        }
        let paint = Self::paint(color, true);
        let stroke = Self::stroke(width);

        let mut pb = PathBuilder::new();
        pb.move_to(points[0].x, points[0].y);
        for p in &points[1..] {
            pb.line_to(p.x, p.y);
        }
        if let Some(path) = pb.finish() {
            self.pixmap.stroke_path(
                &path,
                &paint,
                &stroke,
                Transform::identity(),
                self.mask.as_ref(),
            );
        }
    }

    fn fill_polygon(&mut self, points: &[Point], color: Color) {
        if points.len() < 3 {
            return;
        }
        let paint = Self::paint(color, true);

        let mut pb = PathBuilder::new();
        pb.move_to(points[0].x, points[0].y);
        for p in &points[1..] {
            pb.line_to(p.x, p.y);
        }
        pb.close();
        if let Some(path) = pb.finish() {
            self.pixmap.fill_path(
                &path,
                &paint,
                FillRule::Winding,
                Transform::identity(),
                self.mask.as_ref(),
            );
        }
    }
}

fn to_skia_rect(rect: Rect) -> Option<tiny_skia::Rect> {
    tiny_skia::Rect::from_xywh(rect.x, rect.y, rect.width, rect.height)
}
