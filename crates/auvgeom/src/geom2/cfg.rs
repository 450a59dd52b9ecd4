//! Fixed constants for 2D geometry (internal).
//!
//! Policy
//! - Constants rather than a runtime config; the primitives are closed-form
//!   and have no tolerances to tune.

/// Smallest vertex count for which polygon area and perimeter are defined.
pub const MIN_POLYGON_POINTS: usize = 3;
