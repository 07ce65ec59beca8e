//! Layout engine: maps a value series onto pixel positions inside an area.

use serde::Serialize;

use crate::config::RenderConfig;
use crate::geometry::{Point, Rect};
use crate::series::ValueSeries;

/// Distance from the baseline under which a point counts as a zero sample.
const BASELINE_EPSILON: f32 = 1e-3;

/// How a computed polyline is turned into pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FillPolicy {
    /// Stroke the polyline only.
    Open,
    /// Close the polyline down to the baseline and fill it.
    Closed,
}

/// Positions for one series, recomputed on every paint.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PointSequence {
    pub series: usize,
    pub points: Vec<Point>,
    /// Index into the flat value buffer consumed by each point.
    pub source_indices: Vec<usize>,
    pub fill: FillPolicy,
}

impl PointSequence {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Closed outline for filling: the polyline, then down to `baseline`
    /// under the last point, then back to `left` along the baseline.
    pub fn fill_outline(&self, baseline: f32, left: f32) -> Vec<Point> {
        let Some(last) = self.points.last() else {
            return Vec::new();
        };
        let mut outline = Vec::with_capacity(self.points.len() + 2);
        outline.extend_from_slice(&self.points);
        outline.push(Point::new(last.x, baseline));
        outline.push(Point::new(left, baseline));
        outline
    }

    /// Runs of the polyline to stroke. With `break_at_zero`, any step whose
    /// two ends both sit on `baseline` is skipped.
    pub fn stroke_segments(&self, baseline: f32, break_at_zero: bool) -> Vec<&[Point]> {
        if !break_at_zero {
            return if self.points.len() >= 2 {
                vec![&self.points[..]]
            } else {
                Vec::new()
            };
        }

        let on_baseline = |p: &Point| (p.y - baseline).abs() <= BASELINE_EPSILON;
        let mut segments = Vec::new();
        let mut start = 0;
        for i in 1..self.points.len() {
            if on_baseline(&self.points[i - 1]) && on_baseline(&self.points[i]) {
                if i - start >= 2 {
                    segments.push(&self.points[start..i]);
                }
                start = i;
            }
        }
        if self.points.len() - start >= 2 {
            segments.push(&self.points[start..]);
        }
        segments
    }
}

/// Compute one point sequence per interleaved series.
///
/// Each series gets `len / num_sets` points; leftover values are ignored.
/// A series of a single point is placed at the left edge, and a series of
/// zero points yields no output at all.
pub fn compute_points(
    series: &ValueSeries,
    config: &RenderConfig,
    area: Rect,
) -> Vec<PointSequence> {
    let num_sets = config.num_sets();
    let per_series = series.points_per_series(num_sets);
    if per_series == 0 {
        return Vec::new();
    }

    let dropped = series.remainder(num_sets);
    if dropped > 0 {
        tracing::debug!(
            len = series.len(),
            num_sets = num_sets.get(),
            dropped,
            "value count not divisible by num_sets, ignoring trailing values"
        );
    }

    let pixels_per_point = if per_series > 1 {
        area.width / (per_series - 1) as f32
    } else {
        0.0
    };
    let baseline = area.bottom();
    let fill = if config.filled {
        FillPolicy::Closed
    } else {
        FillPolicy::Open
    };
    let values = series.values();

    (0..num_sets.get())
        .map(|set| {
            let offset = set * per_series;
            let mut points = Vec::with_capacity(per_series);
            let mut source_indices = Vec::with_capacity(per_series);
            for i in 0..per_series {
                let local = if config.reversed { per_series - 1 - i } else { i };
                let n = offset + local;
                let v = config.normalize(values[n]) as f32;
                let px = area.x + i as f32 * pixels_per_point;
                let py = baseline - area.height * v;
                points.push(Point::new(px, py));
                source_indices.push(n);
            }
            PointSequence {
                series: set,
                points,
                source_indices,
                fill,
            }
        })
        .collect()
}
