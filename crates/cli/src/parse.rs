//! Parsers for comma/semicolon separated numeric flags.

use anyhow::{bail, Context, Result};
use auvgeom::geom2::Point;
use nalgebra::Vector3;

fn parse_floats(s: &str) -> Result<Vec<f64>> {
    s.split(',')
        .map(|t| {
            let t = t.trim();
            t.parse::<f64>()
                .with_context(|| format!("invalid number {t:?} in {s:?}"))
        })
        .collect()
}

/// `"x,y"` → `Point`.
pub fn point(s: &str) -> Result<Point> {
    match parse_floats(s)?.as_slice() {
        [x, y] => Ok(Point::new(*x, *y)),
        v => bail!("expected 2 components in {s:?}, got {}", v.len()),
    }
}

/// `"x,y,z"` → `Vector3`.
pub fn vec3(s: &str) -> Result<Vector3<f64>> {
    match parse_floats(s)?.as_slice() {
        [x, y, z] => Ok(Vector3::new(*x, *y, *z)),
        v => bail!("expected 3 components in {s:?}, got {}", v.len()),
    }
}

/// `"x,y;x,y;..."` → points. Empty segments (e.g. a trailing `;`) are skipped.
pub fn points(s: &str) -> Result<Vec<Point>> {
    s.split(';')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(point)
        .collect()
}
