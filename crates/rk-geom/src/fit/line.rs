//! Line fitting in 2D and 3D

use crate::constants::MIN_LINE_POINTS;
use crate::error::{GeomError, GeomResult};
use crate::vector::Vector3;

use super::{Fitter, LineFit, scatter};

impl Fitter {
    /// Fit a line `y = a x + b` through points in the XY plane
    ///
    /// Ordinary least squares of y on x; z is ignored. The result has
    /// `point = (0, b, 0)` and `direction = (1, a, 0)`, so the slope is
    /// `direction.y`. Points sharing a single x value have no such line
    /// and fail with [`GeomError::DegenerateFit`].
    pub fn fit_line_2d(&self, points: &[Vector3]) -> GeomResult<LineFit> {
        GeomError::require_points(MIN_LINE_POINTS, points.len())?;
        GeomError::require_finite(points)?;

        // Offsets from the first point keep equal x values exactly equal
        let n = points.len() as f64;
        let (x0, y0) = (points[0].x, points[0].y);
        let (mut sx, mut sy) = (0.0, 0.0);
        for p in points {
            sx += p.x - x0;
            sy += p.y - y0;
        }
        let (cx, cy) = (sx / n, sy / n);

        let (mut xx, mut xy, mut magnitude) = (0.0, 0.0, 0.0);
        for p in points {
            let dx = p.x - x0 - cx;
            let dy = p.y - y0 - cy;
            xx += dx * dx;
            xy += dx * dy;
            magnitude += p.x * p.x;
        }

        // det = n Σ(x - x̄)², zero up to rounding in the coordinates
        let tolerance = self.config.determinant_tolerance;
        if xx <= tolerance * tolerance * magnitude {
            tracing::debug!("2D line fit rejected: all {} points share x", points.len());
            return Err(GeomError::DegenerateFit(
                "points share the same x coordinate".to_string(),
            ));
        }

        let a = xy / xx;
        let b = (y0 + cy) - a * (x0 + cx);
        Ok(LineFit {
            point: Vector3::new(0.0, b, 0.0),
            direction: Vector3::new(1.0, a, 0.0),
        })
    }

    /// Fit a 3D line through points
    ///
    /// Minimizes the total squared perpendicular distance. The direction
    /// is the principal axis of the centered point scatter, with unit
    /// length, rather than a solve on raw moments about the origin. The
    /// anchor point is the full 3D centroid, not the mean along a single
    /// eliminated axis; the least-squares line always passes through it.
    pub fn fit_line_3d(&self, points: &[Vector3]) -> GeomResult<LineFit> {
        GeomError::require_points(MIN_LINE_POINTS, points.len())?;
        GeomError::require_finite(points)?;

        let (center, moments) = scatter(points, self.config.determinant_tolerance)?;
        let [_, _, largest] = moments.eigenvalues();

        let (direction, axis) = moments
            .shifted(largest)
            .null_vector(moments.trace(), self.config.determinant_tolerance)
            .ok_or_else(|| {
                tracing::debug!(
                    "3D line fit rejected: no principal direction in {} points",
                    points.len()
                );
                GeomError::DegenerateFit("points have no unique principal direction".to_string())
            })?;
        tracing::trace!("3D line fit eliminated with {:?} fixed", axis);

        Ok(LineFit {
            point: center,
            direction: direction.normalize()?,
        })
    }
}
