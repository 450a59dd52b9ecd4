//! Convex polygon as a bearing-ordered vertex list.
//!
//! Ordering
//! - Vertices are sorted by their compass bearing from the centroid,
//!   `atan2(x - cx, y - cy)`: 0 points north (+y) and the key grows toward
//!   east (+x). In standard axes this is a clockwise walk starting at
//!   south. Callers rely on this winding; `signed_area` is negative after
//!   ordering.
//! - The sort is stable. Vertices sharing a bearing keep their prior relative
//!   order and none are dropped, so re-ordering is idempotent.
//!
//! Measurements
//! - `area`: fan of triangles from the first vertex (Heron per triangle).
//!   Convexity is assumed, not checked.
//! - `perimeter`: consecutive edge lengths, closing last → first.

use std::cmp::Ordering;

use super::cfg::MIN_POLYGON_POINTS;
use super::types::{Point, Triangle};
use crate::error::InvalidGeometry;

/// Convex polygon; vertices are kept in bearing order (see module docs).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    points: Vec<Point>,
}

impl Polygon {
    /// Take ownership of `points` in any order and sort them by bearing.
    pub fn new(points: Vec<Point>) -> Self {
        let mut poly = Self { points };
        poly.order_points();
        poly
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }
    #[inline]
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Arithmetic mean of the vertices; `None` for an empty polygon.
    ///
    /// Summed in lexicographic (x, y) order, so the result is bit-identical
    /// for any permutation of the same vertices.
    pub fn centroid(&self) -> Option<Point> {
        if self.points.is_empty() {
            return None;
        }
        let mut sorted = self.points.clone();
        sorted.sort_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)));
        let n = sorted.len() as f64;
        let sum = sorted
            .iter()
            .fold(nalgebra::Vector2::<f64>::zeros(), |acc, p| acc + p.to_vec());
        Some(Point::from(sum / n))
    }

    /// Re-sort the vertices by bearing from the centroid (stable, no dedup).
    pub fn order_points(&mut self) {
        let Some(c) = self.centroid() else {
            return;
        };
        let mut keyed: Vec<(f64, Point)> = self
            .points
            .iter()
            .map(|p| (bearing(c, *p), *p))
            .collect();
        keyed.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(Ordering::Equal));
        self.points = keyed.into_iter().map(|(_, p)| p).collect();
    }

    /// Fan-triangulated area from `points[0]`.
    pub fn area(&self) -> Result<f64, InvalidGeometry> {
        self.check_len()?;
        let p0 = self.points[0];
        Ok(self
            .points
            .windows(2)
            .skip(1)
            .map(|w| Triangle::new(p0, w[0], w[1]).area())
            .sum())
    }

    /// Sum of edge lengths including the closing edge.
    pub fn perimeter(&self) -> Result<f64, InvalidGeometry> {
        self.check_len()?;
        let n = self.points.len();
        Ok((0..n)
            .map(|i| self.points[i].distance_to_point(&self.points[(i + 1) % n]))
            .sum())
    }

    /// Shoelace area; positive for counterclockwise winding, negative for
    /// the clockwise order `order_points` produces.
    pub fn signed_area(&self) -> Result<f64, InvalidGeometry> {
        self.check_len()?;
        let n = self.points.len();
        let twice: f64 = (0..n)
            .map(|i| {
                let a = self.points[i];
                let b = self.points[(i + 1) % n];
                a.x * b.y - a.y * b.x
            })
            .sum();
        Ok(0.5 * twice)
    }

    #[inline]
    fn check_len(&self) -> Result<(), InvalidGeometry> {
        if self.points.len() < MIN_POLYGON_POINTS {
            return Err(InvalidGeometry::TooFewPoints {
                count: self.points.len(),
            });
        }
        Ok(())
    }
}

/// Compass bearing of `p` seen from `c`: `atan2(dx, dy)`, in (-π, π].
#[inline]
fn bearing(c: Point, p: Point) -> f64 {
    (p.x - c.x).atan2(p.y - c.y)
}
