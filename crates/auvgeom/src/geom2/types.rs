//! Closed-form 2D primitives.
//!
//! - `Point`: plain coordinate pair with Euclidean distances.
//! - `Line`: two points; length and distance from a point to the carrier line.
//! - `Triangle`: three points; area by Heron's formula.
//! - `Circle`: radius only.

use nalgebra::Vector2;

use crate::error::InvalidGeometry;

/// A point in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
    #[inline]
    pub fn origin() -> Self {
        Self::default()
    }
    #[inline]
    pub fn to_vec(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }
    /// Euclidean norm `sqrt(x² + y²)`.
    #[inline]
    pub fn distance_to_origin(&self) -> f64 {
        self.to_vec().norm()
    }
    /// Euclidean distance to `other`; symmetric and zero for equal points.
    #[inline]
    pub fn distance_to_point(&self, other: &Point) -> f64 {
        (self.to_vec() - other.to_vec()).norm()
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self::new(v.x, v.y)
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        p.to_vec()
    }
}

/// Segment between two points. Endpoints may coincide; only
/// `distance_to_point` needs them distinct.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Line {
    pub p1: Point,
    pub p2: Point,
}

impl Line {
    #[inline]
    pub fn new(p1: Point, p2: Point) -> Self {
        Self { p1, p2 }
    }
    #[inline]
    pub fn length(&self) -> f64 {
        self.p1.distance_to_point(&self.p2)
    }
    /// Perpendicular distance from `p` to the infinite line through `p1`, `p2`.
    ///
    /// Errors with `DegenerateLine` when the endpoints coincide.
    pub fn distance_to_point(&self, p: &Point) -> Result<f64, InvalidGeometry> {
        let len = self.length();
        if len == 0.0 {
            return Err(InvalidGeometry::DegenerateLine);
        }
        let (a, b) = (self.p1, self.p2);
        let numerator = ((b.x - a.x) * (a.y - p.y) - (a.x - p.x) * (b.y - a.y)).abs();
        Ok(numerator / len)
    }
}

/// Triangle given by its three vertices (any winding, collinear allowed).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Triangle {
    pub p1: Point,
    pub p2: Point,
    pub p3: Point,
}

impl Triangle {
    #[inline]
    pub fn new(p1: Point, p2: Point, p3: Point) -> Self {
        Self { p1, p2, p3 }
    }
    /// Side lengths `[|p1p2|, |p2p3|, |p3p1|]`.
    #[inline]
    pub fn sides(&self) -> [f64; 3] {
        [
            self.p1.distance_to_point(&self.p2),
            self.p2.distance_to_point(&self.p3),
            self.p3.distance_to_point(&self.p1),
        ]
    }
    #[inline]
    pub fn perimeter(&self) -> f64 {
        self.sides().iter().sum()
    }
    /// Area by Heron's formula.
    ///
    /// Sides are sorted `a >= b >= c` and the radicand is evaluated as
    /// `(a+(b+c))(c-(a-b))(c+(a-b))(a+(b-c))`, which keeps collinear input at
    /// exactly zero. A negative radicand from rounding is clamped to zero.
    pub fn area(&self) -> f64 {
        let mut s = self.sides();
        s.sort_by(|u, v| v.partial_cmp(u).unwrap_or(std::cmp::Ordering::Equal));
        let [a, b, c] = s;
        let radicand = (a + (b + c)) * (c - (a - b)) * (c + (a - b)) * (a + (b - c));
        0.25 * radicand.max(0.0).sqrt()
    }
}

/// Circle described by its radius alone. Negative radii are accepted as-is.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Circle {
    pub radius: f64,
}

impl Circle {
    #[inline]
    pub fn new(radius: f64) -> Self {
        Self { radius }
    }
    #[inline]
    pub fn area(&self) -> f64 {
        std::f64::consts::PI * self.radius.powi(2)
    }
}
