//! Error type for measurements on degenerate geometry.

use thiserror::Error;

/// A measurement was requested on geometry that cannot support it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidGeometry {
    /// Both endpoints of a line coincide, so it has no direction.
    #[error("degenerate line: endpoints coincide")]
    DegenerateLine,

    /// A polygon needs at least three points for area and perimeter.
    #[error("polygon has {count} point(s), need at least 3")]
    TooFewPoints {
        /// Number of points the polygon holds.
        count: usize,
    },
}
