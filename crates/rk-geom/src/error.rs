//! Error type shared by the vector, fitting and triangle operations

use thiserror::Error;

use crate::vector::Vector3;

/// Geometry-related errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeomError {
    #[error("Insufficient points: need at least {required}, got {actual}")]
    InsufficientPoints { required: usize, actual: usize },

    #[error("Degenerate fit: {0}")]
    DegenerateFit(String),

    #[error("Degenerate vector: zero length has no direction")]
    DegenerateVector,

    #[error("Degenerate triangle: points are collinear")]
    DegenerateTriangle,

    #[error("Non-finite input: coordinates must be finite numbers")]
    NonFinite,
}

/// Result type for geometry operations
pub type GeomResult<T> = Result<T, GeomError>;

impl GeomError {
    /// Check the point count against an operation's minimum
    pub(crate) fn require_points(required: usize, actual: usize) -> GeomResult<()> {
        if actual < required {
            return Err(GeomError::InsufficientPoints { required, actual });
        }
        Ok(())
    }

    /// Reject NaN or infinite coordinates
    pub(crate) fn require_finite(points: &[Vector3]) -> GeomResult<()> {
        if points.iter().all(|p| p.is_finite()) {
            Ok(())
        } else {
            Err(GeomError::NonFinite)
        }
    }
}
