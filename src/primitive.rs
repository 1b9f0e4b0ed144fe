//! Drawable primitives and the sink fractals emit them into.
//!
//! Generators never touch pixels. They call a [`PrimitiveSink`] in emission
//! order; the sink decides what "drawing" means (rasterize into a
//! framebuffer, or record for inspection).

use crate::geometry::{Point, Rect};
use crate::types::Color;

/// Capability a fractal writes to. Nothing is read back.
pub trait PrimitiveSink {
    /// Rectangle outline, one pixel wide.
    fn draw_rect(&mut self, rect: Rect, color: Color);

    fn draw_line(&mut self, p0: Point, p1: Point, color: Color);

    /// Connected segments through `points`; `closed` adds the last-to-first edge.
    fn draw_polyline(&mut self, points: &[Point], closed: bool, color: Color);
}

/// One recorded draw call.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect(Rect, Color),
    Line(Point, Point, Color),
    Polyline { points: Vec<Point>, closed: bool, color: Color },
}

/// Recording sink: keeps every primitive in emission order.
impl PrimitiveSink for Vec<Primitive> {
    fn draw_rect(&mut self, rect: Rect, color: Color) {
        self.push(Primitive::Rect(rect, color));
    }

    fn draw_line(&mut self, p0: Point, p1: Point, color: Color) {
        self.push(Primitive::Line(p0, p1, color));
    }

    fn draw_polyline(&mut self, points: &[Point], closed: bool, color: Color) {
        self.push(Primitive::Polyline { points: points.to_vec(), closed, color });
    }
}
