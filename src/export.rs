// Headless rendering: every fractal into a PNG, no window needed.

use crate::error::Result;
use crate::fractal::Fractal;
use crate::types::{Color, FrameBuffer};
use image::{ImageBuffer, Rgb, RgbImage};
use std::path::{Path, PathBuf};

/// Rasterize one fractal onto a fresh `background` canvas.
pub fn render(fractal: &Fractal, width: usize, height: usize, background: Color) -> Result<FrameBuffer> {
    let mut fb = FrameBuffer::new(width, height);
    fb.clear(background);
    fractal.generate(&mut fb)?;
    Ok(fb)
}

/// Convert 0x00RRGGBB pixels into an RGB image.
pub fn to_image(fb: &FrameBuffer) -> RgbImage {
    ImageBuffer::from_fn(fb.width as u32, fb.height as u32, |x, y| {
        let c = Color::from_pixel(fb.pixels[y as usize * fb.width + x as usize]);
        Rgb([c.r, c.g, c.b])
    })
}

/// Writes `<dir>/<slug>.png` for each fractal and returns the paths in order.
pub fn export_all(
    fractals: &[Fractal],
    width: usize,
    height: usize,
    background: Color,
    dir: &Path,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(fractals.len());
    for fractal in fractals {
        let fb = render(fractal, width, height, background)?;
        let path = dir.join(format!("{}.png", fractal.kind().slug()));
        to_image(&fb).save(&path)?;
        log::info!("exported {} to {}", fractal.name(), path.display());
        written.push(path);
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fractal::FractalKind;
    use crate::geometry::Point;

    fn fractal(kind: FractalKind) -> Fractal {
        Fractal::new(kind, Point::new(60.0, 60.0), Color::WHITE).unwrap()
    }

    #[test]
    fn render_paints_fractal_over_background() {
        let fb = render(&fractal(FractalKind::Square), 60, 60, Color::BLACK).unwrap();
        // Outer square border and the untouched middle cell.
        assert_eq!(fb.pixel(0, 0), Some(Color::WHITE.to_pixel()));
        assert_eq!(fb.pixel(59, 59), Some(Color::WHITE.to_pixel()));
        assert_eq!(fb.pixel(30, 30), Some(Color::BLACK.to_pixel()));
    }

    #[test]
    fn image_keeps_pixel_colors() {
        let mut fb = FrameBuffer::new(2, 1);
        fb.pixels = vec![0x00_10_20_30, 0x00_FF_00_80];
        let img = to_image(&fb);
        assert_eq!(img.dimensions(), (2, 1));
        assert_eq!(img.get_pixel(0, 0), &Rgb([0x10, 0x20, 0x30]));
        assert_eq!(img.get_pixel(1, 0), &Rgb([0xFF, 0x00, 0x80]));
    }

    #[test]
    fn export_writes_one_png_per_fractal() {
        let dir = std::env::temp_dir().join(format!("fractals-export-{}", std::process::id()));
        let fractals: Vec<_> = FractalKind::ALL.iter().map(|&k| fractal(k)).collect();

        let written = export_all(&fractals, 60, 60, Color::BLACK, &dir).unwrap();
        let names: Vec<_> = written
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, ["square.png", "triangle.png", "tree.png", "curve.png"]);
        assert!(written.iter().all(|p| p.is_file()));

        let decoded = image::open(&written[0]).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (60, 60));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
