// Window + software drawing utilities.
// Visual effects provided here:
// 1) A window that shows the current fractal.
// 2) A rasterizer that turns rects/lines/polylines into 1-pixel outlines.
// 3) A tiny 5x7 bitmap font to render the HUD on top of the fractal.

use crate::error::Error;
use crate::geometry::{Point, Rect};
use crate::primitive::PrimitiveSink;
use crate::types::{Color, FrameBuffer};
use minifb::{Key, KeyRepeat, Window, WindowOptions};

pub struct Drawer {
    window: Window, // the on-screen window you see
}

impl Drawer {
    /// Create a window sized to the canvas.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize) -> Result<Self, Error> {
        let mut window = Window::new(title, width, height, WindowOptions::default())
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(60);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// Space advances to the next fractal, once per key press.
    pub fn space_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::Space, KeyRepeat::No)
    }
}

/* ---------- Rasterizer: fractal primitives onto the framebuffer ---------- */

// Pixel that contains the canvas coordinate.
#[inline]
fn to_px(v: f32) -> i32 {
    v.floor() as i32
}

impl PrimitiveSink for FrameBuffer {
    /// Outline covering [x, x+w) by [y, y+h), like a 1-pixel border.
    fn draw_rect(&mut self, rect: Rect, color: Color) {
        let x0 = to_px(rect.origin.x);
        let y0 = to_px(rect.origin.y);
        let x1 = (to_px(rect.origin.x + rect.size.x) - 1).max(x0);
        let y1 = (to_px(rect.origin.y + rect.size.y) - 1).max(y0);
        let c = color.to_pixel();

        draw_line(self, x0, y0, x1, y0, c);
        draw_line(self, x1, y0, x1, y1, c);
        draw_line(self, x1, y1, x0, y1, c);
        draw_line(self, x0, y1, x0, y0, c);
    }

    fn draw_line(&mut self, p0: Point, p1: Point, color: Color) {
        draw_line(self, to_px(p0.x), to_px(p0.y), to_px(p1.x), to_px(p1.y), color.to_pixel());
    }

    fn draw_polyline(&mut self, points: &[Point], closed: bool, color: Color) {
        for pair in points.windows(2) {
            PrimitiveSink::draw_line(self, pair[0], pair[1], color);
        }
        if closed && points.len() > 2 {
            PrimitiveSink::draw_line(self, points[points.len() - 1], points[0], color);
        }
    }
}

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/// Draw a thin line between (x0,y0) and (x1,y1) using Bresenham.
fn draw_line(fb: &mut FrameBuffer, x0: i32, y0: i32, x1: i32, y1: i32, color: u32) {
    let (mut x0, mut y0) = (x0, y0);
    let dx = (x1 - x0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let dy = -(y1 - y0).abs();
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        put_pixel(fb, x0, y0, color);
        if x0 == x1 && y0 == y1 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x0 += sx; }
        if e2 <= dx { err += dx; y0 += sy; }
    }
}

/* ---------- 5x7 bitmap font (uppercase, digits, a little punctuation) ---------- */

/// Return a 5x7 glyph bitmap. Lowercase letters map to uppercase.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'B' => g!(0b11110,0b10001,0b10001,0b11110,0b10001,0b10001,0b11110),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'G' => g!(0b01110,0b10001,0b10000,0b10111,0b10001,0b10001,0b01111),
        'H' => g!(0b10001,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'J' => g!(0b00111,0b00010,0b00010,0b00010,0b00010,0b10010,0b01100),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b10001,0b11001,0b10101,0b10011,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'Q' => g!(0b01110,0b10001,0b10001,0b10001,0b10101,0b10010,0b01101),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'U' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),
        'W' => g!(0b10001,0b10001,0b10001,0b10101,0b10101,0b10101,0b01010),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),
        'Z' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b10000,0b11111),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),
        '/' => g!(0b00001,0b00010,0b00010,0b00100,0b01000,0b01000,0b10000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y) with a 1-pixel black shadow for contrast.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        for (offset, c) in [(1, Color::BLACK.to_pixel()), (0, color)] {
            for (ry, rowbits) in rows.iter().enumerate() {
                for rx in 0..5 {
                    if (rowbits & (1 << (4 - rx))) != 0 {
                        put_pixel(fb, x + rx + offset, y + ry as i32 + offset, c);
                    }
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs, 1-pixel spacing.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const W: u32 = 0x00_FF_FF_FF;

    fn lit(fb: &FrameBuffer) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for y in 0..fb.height {
            for x in 0..fb.width {
                if fb.pixels[y * fb.width + x] != 0 {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn horizontal_line_covers_both_endpoints() {
        let mut fb = FrameBuffer::new(8, 3);
        PrimitiveSink::draw_line(&mut fb, Point::new(1.0, 1.0), Point::new(5.0, 1.0), Color::WHITE);
        assert_eq!(lit(&fb), vec![(1, 1), (2, 1), (3, 1), (4, 1), (5, 1)]);
    }

    #[test]
    fn out_of_bounds_pixels_are_clipped() {
        let mut fb = FrameBuffer::new(4, 4);
        PrimitiveSink::draw_line(&mut fb, Point::new(-10.0, 2.0), Point::new(10.0, 2.0), Color::WHITE);
        assert_eq!(lit(&fb), vec![(0, 2), (1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn rect_is_an_outline() {
        let mut fb = FrameBuffer::new(6, 6);
        fb.draw_rect(Rect::new(Point::new(1.0, 1.0), Point::new(4.0, 4.0)), Color::WHITE);
        assert_eq!(fb.pixel(1, 1), Some(W));
        assert_eq!(fb.pixel(4, 4), Some(W));
        assert_eq!(fb.pixel(4, 1), Some(W));
        assert_eq!(fb.pixel(2, 2), Some(0));
        assert_eq!(fb.pixel(5, 5), Some(0));
        assert_eq!(lit(&fb).len(), 12);
    }

    #[test]
    fn closed_polyline_joins_last_to_first() {
        let pts = [Point::new(0.0, 0.0), Point::new(4.0, 0.0), Point::new(4.0, 4.0)];

        let mut open = FrameBuffer::new(5, 5);
        open.draw_polyline(&pts, false, Color::WHITE);
        assert_eq!(open.pixel(2, 2), Some(0));

        let mut closed = FrameBuffer::new(5, 5);
        closed.draw_polyline(&pts, true, Color::WHITE);
        assert_eq!(closed.pixel(2, 2), Some(W));
    }

    #[test]
    fn text_draws_known_glyphs_and_skips_unknown() {
        let mut fb = FrameBuffer::new(20, 10);
        draw_text_5x7(&mut fb, 0, 0, "~", W);
        assert!(lit(&fb).is_empty());

        draw_text_5x7(&mut fb, 0, 0, "l", W);
        // 'L' is a left column plus a bottom row.
        assert_eq!(fb.pixel(0, 0), Some(W));
        assert_eq!(fb.pixel(4, 6), Some(W));
        assert_eq!(fb.pixel(4, 0), Some(0));
    }
}
