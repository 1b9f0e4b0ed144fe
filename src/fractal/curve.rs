// Hilbert-style space-filling curve.
//
// A level is an ordered walk that starts at the top-right corner of its
// bounding square and ends at the top-left one. The next level shrinks that
// walk to a quarter of its size around the origin and lays four copies out in
// a 2x2 grid, joined end to end:
//
//   top-left:     rotated -90, reversed     top-right:    rotated +90, reversed
//   bottom-left:  as is                     bottom-right: as is
//
// Walk order is top-right, bottom-right, bottom-left, top-left.

use super::Canvas;
use crate::geometry::Point;
use crate::primitive::PrimitiveSink;
use crate::types::Color;

/// Segment length at or below which the current level is drawn.
const MIN_SEGMENT: f32 = 5.0;
/// Margin trimmed off the smaller canvas dimension for the seed square.
const MARGIN: f32 = 10.0;

#[derive(Debug, Clone)]
pub struct HilbertCurve {
    canvas: Canvas,
    color: Color,
}

impl HilbertCurve {
    pub fn new(canvas: Canvas, color: Color) -> Self {
        Self { canvas, color }
    }

    /// Seed level: the four corners of the centered square, clockwise from top-right.
    pub fn generate(&self, sink: &mut dyn PrimitiveSink) {
        let center = self.canvas.center();
        let half = (self.canvas.size().min_component() - MARGIN).max(0.0) / 2.0;
        let seed = vec![
            center + Point::new(half, -half),
            center + Point::new(half, half),
            center + Point::new(-half, half),
            center + Point::new(-half, -half),
        ];
        self.subdivide(seed, sink);
    }

    fn subdivide(&self, points: Vec<Point>, sink: &mut dyn PrimitiveSink) {
        let distance = points[0].distance(points[1]);
        if distance <= MIN_SEGMENT {
            sink.draw_polyline(&points, false, self.color);
            return;
        }
        self.subdivide(self.next_level(&points, distance), sink);
    }

    fn next_level(&self, points: &[Point], distance: f32) -> Vec<Point> {
        let center = self.canvas.center();
        let origin = Point::default();
        let new_dist = distance / 4.0;

        let scaled: Vec<Point> = points.iter().map(|&p| (p - center) / 4.0).collect();
        // Side of one quarter copy plus the gap that joins neighbours.
        let pad = scaled[0].distance(scaled[scaled.len() - 1]) + new_dist;

        let mut next = Vec::with_capacity(scaled.len() * 4);
        next.extend(scaled.iter().map(|p| p.rotate(origin, -90.0) + Point::new(0.0, -pad)));
        next.extend(scaled.iter().rev().copied());
        next.extend(scaled.iter().rev().map(|&p| p + Point::new(pad, 0.0)));
        next.extend(scaled.iter().map(|p| p.rotate(origin, 90.0) + Point::new(pad, -pad)));
        next.reverse();

        let shift = center - Point::new(pad, -pad) / 2.0;
        for p in &mut next {
            *p = *p + shift;
        }
        next
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::approx_eq;
    use crate::primitive::Primitive;
    use std::collections::HashSet;

    fn curve(size: Point) -> Vec<Point> {
        let curve = HilbertCurve::new(Canvas::new(size).unwrap(), Color::WHITE);
        let mut out: Vec<Primitive> = Vec::new();
        curve.generate(&mut out);
        assert_eq!(out.len(), 1, "only the final level is drawn");
        match out.remove(0) {
            Primitive::Polyline { points, closed: false, .. } => points,
            other => panic!("curve emitted {other:?}"),
        }
    }

    fn near(a: Point, b: Point) -> bool {
        (a.x - b.x).abs() < 1e-2 && (a.y - b.y).abs() < 1e-2
    }

    fn levels(side: f32) -> u32 {
        (side / MIN_SEGMENT).log(4.0).ceil().max(0.0) as u32
    }

    fn bounds(points: &[Point]) -> (Point, Point) {
        points.iter().fold(
            (Point::new(f32::MAX, f32::MAX), Point::new(f32::MIN, f32::MIN)),
            |(lo, hi), p| {
                (Point::new(lo.x.min(p.x), lo.y.min(p.y)), Point::new(hi.x.max(p.x), hi.y.max(p.y)))
            },
        )
    }

    #[test]
    fn tiny_seed_is_drawn_as_is() {
        // 15 - 10 = 5, already at the threshold.
        let points = curve(Point::new(15.0, 15.0));
        assert_eq!(points.len(), 4);
        assert!(approx_eq(points[0], Point::new(10.0, 5.0)));
        assert!(approx_eq(points[1], Point::new(10.0, 10.0)));
        assert!(approx_eq(points[2], Point::new(5.0, 10.0)));
        assert!(approx_eq(points[3], Point::new(5.0, 5.0)));
    }

    #[test]
    fn one_level_is_the_sixteen_point_hilbert_walk() {
        // side 20, one subdivision to segment 5
        let points = curve(Point::new(30.0, 30.0));
        assert_eq!(levels(20.0), 1);

        let c = Point::new(15.0, 15.0);
        let lattice = |x: f32, y: f32| c + Point::new(x, y) * 2.5;
        let expected = [
            lattice(3.0, -3.0),
            lattice(1.0, -3.0),
            lattice(1.0, -1.0),
            lattice(3.0, -1.0),
            lattice(3.0, 1.0),
            lattice(3.0, 3.0),
            lattice(1.0, 3.0),
            lattice(1.0, 1.0),
            lattice(-1.0, 1.0),
            lattice(-1.0, 3.0),
            lattice(-3.0, 3.0),
            lattice(-3.0, 1.0),
            lattice(-3.0, -1.0),
            lattice(-1.0, -1.0),
            lattice(-1.0, -3.0),
            lattice(-3.0, -3.0),
        ];
        assert_eq!(points.len(), expected.len());
        for (got, want) in points.iter().zip(expected) {
            assert!(approx_eq(*got, want), "{got:?} != {want:?}");
        }
    }

    #[test]
    fn segment_length_quarters_each_level() {
        // Canvas 750: seed side 740, four levels until 740 / 4^4 <= 5.
        let side = 740.0;
        let depth = levels(side);
        assert_eq!(depth, 4);

        let points = curve(Point::new(750.0, 750.0));
        assert_eq!(points.len(), 4usize.pow(depth + 1));

        let step = side / 4f32.powi(depth as i32);
        for pair in points.windows(2) {
            let d = pair[0].distance(pair[1]);
            assert!((d - step).abs() < 1e-2, "segment {d} != {step}");
        }
    }

    #[test]
    fn walk_visits_every_lattice_point_once() {
        let points = curve(Point::new(750.0, 750.0));
        let step = 740.0 / 256.0;
        let (lo, _) = bounds(&points);

        let mut seen = HashSet::new();
        for p in &points {
            let cell = (*p - lo) / step;
            let key = (cell.x.round() as i32, cell.y.round() as i32);
            assert!((0..32).contains(&key.0) && (0..32).contains(&key.1), "{key:?}");
            assert!(seen.insert(key), "revisited {key:?}");
        }
        assert_eq!(seen.len(), 32 * 32);
    }

    #[test]
    fn composite_stays_centered_and_starts_top_right() {
        let points = curve(Point::new(1400.0, 750.0));
        let (lo, hi) = bounds(&points);
        assert!(near((lo + hi) / 2.0, Point::new(700.0, 375.0)));

        let first = points[0];
        let last = points[points.len() - 1];
        assert!(near(first, Point::new(hi.x, lo.y)));
        assert!(near(last, Point::new(lo.x, lo.y)));
    }

    #[test]
    fn canvas_smaller_than_margin_collapses_to_a_point() {
        let points = curve(Point::new(8.0, 8.0));
        assert_eq!(points.len(), 4);
        assert!(points.iter().all(|&p| approx_eq(p, Point::new(4.0, 4.0))));
    }
}
