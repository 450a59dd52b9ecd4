//! Plane geometry primitives and a kinematic AUV model.
//!
//! Layout
//! - `geom2`: value-type points, lines, triangles, circles and convex polygons
//!   (bearing-ordered, fan-triangulated area).
//! - `auv`: rigid-body vehicle state advanced by explicit Euler steps.
//!
//! API Policy
//! - Types are plain values (`Copy` where possible, structural `PartialEq`).
//! - Fallible measurements return `Result<f64, InvalidGeometry>`; nothing panics
//!   on degenerate input.

pub mod auv;
pub mod error;
pub mod geom2;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::InvalidGeometry;
pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::auv::{simulate, Auv, Controls, Trajectory};
    pub use crate::error::InvalidGeometry;
    pub use crate::geom2::rand::{draw_convex_points, ConvexCfg, ReplayToken};
    pub use crate::geom2::{Circle, Line, Point, Polygon, Triangle};
    pub use nalgebra::{Vector2 as Vec2, Vector3 as Vec3};
}
