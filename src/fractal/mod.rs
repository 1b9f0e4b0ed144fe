//! The four fractal families and the canvas they are laid out on.
//!
//! Every generator owns its canvas and color, fixed at construction.
//! `generate` re-derives the full primitive sequence from scratch on each call
//! and emits it, depth first, into a [`PrimitiveSink`].

mod curve;
mod square;
mod tree;
mod triangle;

pub use curve::HilbertCurve;
pub use square::SquareFractal;
pub use tree::FractalTree;
pub use triangle::SierpinskiTriangle;

use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::primitive::PrimitiveSink;
use crate::types::Color;

/// Canvas size plus its cached center.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Canvas {
    size: Point,
    center: Point,
}

impl Canvas {
    /// Fails fast on sizes that would make every initial shape meaningless.
    pub fn new(size: Point) -> Result<Self> {
        if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 {
            return Err(Error::DegenerateGeometry { width: size.x, height: size.y });
        }
        Ok(Self { size, center: size / 2.0 })
    }

    #[inline]
    pub fn size(&self) -> Point {
        self.size
    }

    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }
}

/// Which family a [`Fractal`] belongs to, in display order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, clap::ValueEnum)]
pub enum FractalKind {
    Square,
    Triangle,
    Tree,
    Curve,
}

impl FractalKind {
    pub const ALL: [FractalKind; 4] = [
        FractalKind::Square,
        FractalKind::Triangle,
        FractalKind::Tree,
        FractalKind::Curve,
    ];

    /// Human-readable name, shown in the HUD.
    pub fn name(self) -> &'static str {
        match self {
            FractalKind::Square => "Square",
            FractalKind::Triangle => "Sierpinski Triangle",
            FractalKind::Tree => "Fractal Tree",
            FractalKind::Curve => "Hilbert Curve",
        }
    }

    /// File-name friendly identifier.
    pub fn slug(self) -> &'static str {
        match self {
            FractalKind::Square => "square",
            FractalKind::Triangle => "triangle",
            FractalKind::Tree => "tree",
            FractalKind::Curve => "curve",
        }
    }
}

/// Closed set of generators.
#[derive(Debug, Clone)]
pub enum Fractal {
    Square(SquareFractal),
    Triangle(SierpinskiTriangle),
    Tree(FractalTree),
    Curve(HilbertCurve),
}

impl Fractal {
    pub fn new(kind: FractalKind, size: Point, color: Color) -> Result<Self> {
        let canvas = Canvas::new(size)?;
        Ok(match kind {
            FractalKind::Square => Fractal::Square(SquareFractal::new(canvas, color)),
            FractalKind::Triangle => Fractal::Triangle(SierpinskiTriangle::new(canvas, color)),
            FractalKind::Tree => Fractal::Tree(FractalTree::new(canvas, color)),
            FractalKind::Curve => Fractal::Curve(HilbertCurve::new(canvas, color)),
        })
    }

    /// One generator per family, in [`FractalKind::ALL`] order.
    pub fn all(size: Point, color: Color) -> Result<Vec<Self>> {
        FractalKind::ALL.iter().map(|&kind| Fractal::new(kind, size, color)).collect()
    }

    pub fn kind(&self) -> FractalKind {
        match self {
            Fractal::Square(_) => FractalKind::Square,
            Fractal::Triangle(_) => FractalKind::Triangle,
            Fractal::Tree(_) => FractalKind::Tree,
            Fractal::Curve(_) => FractalKind::Curve,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Emits this frame's full primitive sequence into `sink`.
    pub fn generate(&self, sink: &mut dyn PrimitiveSink) -> Result<()> {
        match self {
            Fractal::Square(f) => f.generate(sink),
            Fractal::Triangle(f) => f.generate(sink)?,
            Fractal::Tree(f) => f.generate(sink),
            Fractal::Curve(f) => f.generate(sink),
        }
        Ok(())
    }
}
