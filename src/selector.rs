use crate::error::{Error, Result};
use crate::fractal::{Fractal, FractalKind};

/// Ordered fractals plus the one currently on screen.
pub struct Selector {
    fractals: Vec<Fractal>,
    index: usize,
}

impl Selector {
    pub fn new(fractals: Vec<Fractal>) -> Result<Self> {
        if fractals.is_empty() {
            return Err(Error::EmptySelection);
        }
        Ok(Self { fractals, index: 0 })
    }

    /// Starts on the first fractal of `kind`, or the first one if absent.
    pub fn starting_at(fractals: Vec<Fractal>, kind: FractalKind) -> Result<Self> {
        let mut selector = Self::new(fractals)?;
        selector.index = selector.fractals.iter().position(|f| f.kind() == kind).unwrap_or(0);
        Ok(selector)
    }

    pub fn active(&self) -> &Fractal {
        &self.fractals[self.index]
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.fractals.len()
    }

    /// Advances to the next fractal, wrapping to the first.
    pub fn next(&mut self) -> &Fractal {
        self.index = (self.index + 1) % self.fractals.len();
        self.active()
    }
}
