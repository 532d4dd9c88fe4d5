//! Plane fitting

use crate::constants::MIN_PLANE_POINTS;
use crate::error::{GeomError, GeomResult};
use crate::vector::Vector3;

use super::{Fitter, PlaneFit, scatter};

impl Fitter {
    /// Fit a plane through points
    ///
    /// The normal is the direction of least variance of the centered
    /// points, so the plane passes through the centroid and minimizes the
    /// squared perpendicular distances. Collinear or coincident points fail
    /// with [`GeomError::DegenerateFit`].
    pub fn fit_plane(&self, points: &[Vector3]) -> GeomResult<PlaneFit> {
        GeomError::require_points(MIN_PLANE_POINTS, points.len())?;
        GeomError::require_finite(points)?;

        let tolerance = self.config.determinant_tolerance;
        let (centroid, moments) = scatter(points, tolerance)?;
        let scale = moments.trace();

        // Rank-one scatter: every plane through the line fits equally well.
        // The cofactor sum is about (width / length)² · trace², so the bound
        // only catches widths at rounding level.
        if moments.cofactor_sum() <= tolerance * scale * scale {
            tracing::debug!("Plane fit rejected: {} points are collinear", points.len());
            return Err(GeomError::DegenerateFit("points are collinear".to_string()));
        }

        let [smallest, _, _] = moments.eigenvalues();
        let (normal, axis) = moments
            .shifted(smallest)
            .null_vector(scale, tolerance)
            .ok_or_else(|| GeomError::DegenerateFit("no unique plane normal".to_string()))?;
        tracing::trace!("Plane fit eliminated with {:?} fixed", axis);

        Ok(PlaneFit {
            normal: normal.normalize()?,
            centroid,
        })
    }
}
