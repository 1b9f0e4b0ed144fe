// Point/rect math shared by every fractal.
// Canvas space: origin top-left, +X right, +Y down.

use core::ops::{Add, Div, Mul, Sub};

/// 2D point (or vector) in canvas pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    #[inline]
    pub fn min_component(self) -> f32 {
        self.x.min(self.y)
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    #[inline]
    pub fn midpoint(self, other: Point) -> Point {
        (self + other) / 2.0
    }

    /// Rotates about `origin` by `degrees`.
    ///
    /// Uses `(x cos - y sin, x sin + y cos)`; with +Y pointing down a positive
    /// angle turns clockwise on screen.
    pub fn rotate(self, origin: Point, degrees: f32) -> Point {
        let (sin, cos) = degrees.to_radians().sin_cos();
        let d = self - origin;
        origin + Point::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos)
    }
}

impl Add for Point {
    type Output = Point;
    #[inline]
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: f32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl Mul for Point {
    type Output = Point;
    #[inline]
    fn mul(self, rhs: Point) -> Point {
        Point::new(self.x * rhs.x, self.y * rhs.y)
    }
}

impl Div<f32> for Point {
    type Output = Point;
    #[inline]
    fn div(self, rhs: f32) -> Point {
        Point::new(self.x / rhs, self.y / rhs)
    }
}

impl Div for Point {
    type Output = Point;
    #[inline]
    fn div(self, rhs: Point) -> Point {
        Point::new(self.x / rhs.x, self.y / rhs.y)
    }
}

/// Axis-aligned rectangle: top-left origin plus size.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Point,
}

impl Rect {
    #[inline]
    pub const fn new(origin: Point, size: Point) -> Self {
        Self { origin, size }
    }

    #[inline]
    pub fn from_center(center: Point, size: Point) -> Self {
        Self::new(center - size / 2.0, size)
    }

    #[inline]
    pub fn top_left(self) -> Point {
        self.origin
    }

    #[inline]
    pub fn center(self) -> Point {
        self.origin + self.size / 2.0
    }
}

#[cfg(test)]
pub(crate) fn approx_eq(a: Point, b: Point) -> bool {
    (a.x - b.x).abs() < 1e-3 && (a.y - b.y).abs() < 1e-3
}
