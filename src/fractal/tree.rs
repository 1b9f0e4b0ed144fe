// Binary tree of line segments.
//
// Children always branch at 45 and 135 degrees absolute, not relative to
// their parent, and lengths halve with integer truncation.

use super::Canvas;
use crate::geometry::Point;
use crate::primitive::PrimitiveSink;
use crate::types::Color;

const TRUNK_ANGLE: f32 = 90.0;
const BRANCH_ANGLES: [f32; 2] = [45.0, 135.0];

#[derive(Debug, Clone)]
pub struct FractalTree {
    canvas: Canvas,
    color: Color,
}

impl FractalTree {
    pub fn new(canvas: Canvas, color: Color) -> Self {
        Self { canvas, color }
    }

    /// Trunk grows straight up from the bottom center, a third of the height long.
    pub fn generate(&self, sink: &mut dyn PrimitiveSink) {
        let size = self.canvas.size();
        let root = Point::new(size.x / 2.0, size.y);
        let length = (size.y / 3.0) as u32;
        self.branch(root, length, TRUNK_ANGLE, sink);
    }

    fn branch(&self, origin: Point, length: u32, angle: f32, sink: &mut dyn PrimitiveSink) {
        let (sin, cos) = angle.to_radians().sin_cos();
        let end = origin - Point::new(cos, sin) * length as f32;
        sink.draw_line(origin, end, self.color);

        let length = length / 2;
        if length <= 1 {
            return;
        }
        for angle in BRANCH_ANGLES {
            self.branch(end, length, angle, sink);
        }
    }
}
