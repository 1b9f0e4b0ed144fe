// Core pixel types shared by the rasterizer, the window and the exporter.

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the canvas is on screen (pixels)
    pub height: usize,     // how tall the canvas is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }

    /// Paint every pixel with one color (start of a frame).
    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color.to_pixel());
    }

    /// Pixel at (x,y), or None when outside the buffer.
    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}

/// Opaque RGB color, fixed per fractal.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pack as 0x00RRGGBB.
    #[inline]
    pub const fn to_pixel(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    #[inline]
    pub const fn from_pixel(px: u32) -> Self {
        Self::new(((px >> 16) & 0xFF) as u8, ((px >> 8) & 0xFF) as u8, (px & 0xFF) as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_packs_as_minifb_pixel() {
        assert_eq!(Color::new(0x12, 0x34, 0x56).to_pixel(), 0x00_12_34_56);
        assert_eq!(Color::from_pixel(0x00_FF_80_01), Color::new(0xFF, 0x80, 0x01));
    }

    #[test]
    fn clear_fills_every_pixel() {
        let mut fb = FrameBuffer::new(4, 3);
        fb.clear(Color::WHITE);
        assert!(fb.pixels.iter().all(|&p| p == 0x00_FF_FF_FF));
        assert_eq!(fb.pixel(3, 2), Some(0x00_FF_FF_FF));
        assert_eq!(fb.pixel(4, 0), None);
    }
}
