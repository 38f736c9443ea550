//! Physics error types
//!
//! Only the triangulator and random sampling can fail. Numerical degenerate
//! cases (zero-length vectors, coincident circles, two immovable bodies) have
//! documented fallback values instead of errors so the tick stays total.

use std::fmt;

/// Unified error type for geometry and physics operations.
#[derive(Clone, Debug, PartialEq)]
pub enum PhysicsError {
    /// Polygon has fewer than three vertices.
    TooFewVertices {
        /// Number of vertices supplied
        count: usize,
    },
    /// Polygon exceeds the triangulator's vertex limit.
    TooManyVertices {
        /// Number of vertices supplied
        count: usize,
        /// Largest accepted vertex count
        max: usize,
    },
    /// Ear clipping stalled: the polygon is self-intersecting or degenerate.
    NonSimplePolygon {
        /// Vertices left unclipped when no ear could be found
        remaining: usize,
    },
    /// A sampling range that is inverted, or empty where a half-open range is drawn from.
    InvalidRange { min: f32, max: f32 },
}

impl fmt::Display for PhysicsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooFewVertices { count } => {
                write!(f, "polygon needs at least 3 vertices (got {count})")
            }
            Self::TooManyVertices { count, max } => {
                write!(f, "polygon has {count} vertices (limit={max})")
            }
            Self::NonSimplePolygon { remaining } => {
                write!(
                    f,
                    "no ear found with {remaining} vertices remaining; polygon is not simple"
                )
            }
            Self::InvalidRange { min, max } => {
                write!(f, "invalid range: min {min}, max {max}")
            }
        }
    }
}

impl std::error::Error for PhysicsError {}

/// Result alias for fallible physics operations.
pub type Result<T> = std::result::Result<T, PhysicsError>;
