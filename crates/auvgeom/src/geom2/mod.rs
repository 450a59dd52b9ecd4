//! Value-type 2D geometry.
//!
//! Purpose
//! - Small closed-form primitives: `Point`, `Line`, `Triangle`, `Circle`.
//! - `Polygon`: convex vertex list kept in bearing order around its centroid,
//!   with fan-triangulated area and wrap-around perimeter.
//!
//! Conventions
//! - All coordinates are `f64`. Arithmetic goes through `nalgebra::Vector2`.
//! - Measurements that can hit a degenerate case return `InvalidGeometry`
//!   instead of producing NaN or infinity.

mod cfg;
pub mod polygon;
pub mod rand;
mod types;

pub use cfg::MIN_POLYGON_POINTS;
pub use polygon::Polygon;
pub use types::{Circle, Line, Point, Triangle};
