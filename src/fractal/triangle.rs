// Sierpinski triangle by midpoint subdivision.

use super::Canvas;
use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::primitive::PrimitiveSink;
use crate::types::Color;

/// Edge midpoints of a triangle, each vertex paired with its cyclic predecessor:
/// `[mid(p2, p0), mid(p0, p1), mid(p1, p2)]`.
pub fn midpoints(points: &[Point]) -> Result<[Point; 3]> {
    let &[p0, p1, p2] = points else {
        return Err(Error::InvalidArgumentCount { expected: 3, actual: points.len() });
    };
    Ok([p2.midpoint(p0), p0.midpoint(p1), p1.midpoint(p2)])
}

#[derive(Debug, Clone)]
pub struct SierpinskiTriangle {
    canvas: Canvas,
    color: Color,
}

impl SierpinskiTriangle {
    pub fn new(canvas: Canvas, color: Color) -> Self {
        Self { canvas, color }
    }

    /// Apex at the top center, base one pixel above the bottom edge,
    /// spanning a third of the width either side of center.
    pub fn generate(&self, sink: &mut dyn PrimitiveSink) -> Result<()> {
        let size = self.canvas.size();
        let center = self.canvas.center();
        let third = size.x / 3.0;
        let base_y = size.y - 1.0;

        let triangle = [
            Point::new(center.x, 0.0),
            Point::new(center.x - third, base_y),
            Point::new(center.x + third, base_y),
        ];
        sink.draw_polyline(&triangle, true, self.color);
        self.subdivide(triangle, sink)
    }

    // Only the p1-p2 edge is tested against the threshold.
    fn subdivide(&self, triangle: [Point; 3], sink: &mut dyn PrimitiveSink) -> Result<()> {
        let [_, p1, p2] = triangle;
        if p1.distance(p2) <= 1.0 {
            return Ok(());
        }

        let inner = midpoints(&triangle)?;
        sink.draw_polyline(&inner, true, self.color);

        for k in 0..3 {
            let corner = triangle[k];
            let a = triangle[(k + 1) % 3];
            let b = triangle[(k + 2) % 3];
            self.subdivide([corner, corner.midpoint(a), corner.midpoint(b)], sink)?;
        }
        Ok(())
    }
}
