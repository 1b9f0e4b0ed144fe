// Sierpinski carpet: a square split into a 3x3 grid, recursing into every
// cell but the middle one.

use super::Canvas;
use crate::geometry::{Point, Rect};
use crate::primitive::PrimitiveSink;
use crate::types::Color;

#[derive(Debug, Clone)]
pub struct SquareFractal {
    canvas: Canvas,
    color: Color,
}

impl SquareFractal {
    pub fn new(canvas: Canvas, color: Color) -> Self {
        Self { canvas, color }
    }

    /// Largest square that fits, centered on the canvas.
    pub fn generate(&self, sink: &mut dyn PrimitiveSink) {
        let side = self.canvas.size().min_component();
        let rect = Rect::from_center(self.canvas.center(), Point::new(side, side));
        self.subdivide(rect, sink);
    }

    fn subdivide(&self, rect: Rect, sink: &mut dyn PrimitiveSink) {
        sink.draw_rect(rect, self.color);

        let new_size = rect.size / 3.0;
        if new_size.x <= 1.0 {
            return;
        }

        let pos = rect.top_left();
        for i in 0..3 {
            for j in 0..3 {
                if i == 1 && j == 1 {
                    continue;
                }
                let cell = Point::new(i as f32, j as f32);
                self.subdivide(Rect::new(pos + cell * new_size, new_size), sink);
            }
        }
    }
}
