//! Least-Squares Fitting
//!
//! Closed-form line and plane fits through point clouds. All fits are
//! pure: the same input always produces bit-identical output.

mod line;
mod moments;
mod plane;

use serde::{Deserialize, Serialize};

use crate::config::FitConfig;
use crate::error::{GeomError, GeomResult};
use crate::triangle;
use crate::vector::Vector3;

use moments::Moments;

/// A fitted line
///
/// For 2D fits `direction` is `(1, slope, 0)` and is not normalized;
/// for 3D fits it has unit length.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineFit {
    /// A point the line passes through
    pub point: Vector3,
    /// Direction of the line
    pub direction: Vector3,
}

impl LineFit {
    /// Point at parameter `t` along the direction
    pub fn point_at(&self, t: f64) -> Vector3 {
        self.point + self.direction * t
    }

    /// Slope `dy/dx` of the direction
    pub fn slope(&self) -> GeomResult<f64> {
        self.direction.slope()
    }

    /// Perpendicular distance from `p` to the infinite line
    pub fn distance_to(&self, p: Vector3) -> GeomResult<f64> {
        let direction = self.direction.normalize()?;
        Ok((p - self.point).cross(direction).norm())
    }
}

/// A fitted plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlaneFit {
    /// Unit normal
    pub normal: Vector3,
    /// Mean of the fitted points
    pub centroid: Vector3,
}

impl PlaneFit {
    /// Signed distance from `p`, positive on the side the normal points to
    pub fn signed_distance(&self, p: Vector3) -> f64 {
        (p - self.centroid).dot(self.normal)
    }

    /// Orthogonal projection of `p` onto the plane
    pub fn project(&self, p: Vector3) -> Vector3 {
        p - self.normal * self.signed_distance(p)
    }
}

/// Least-squares fitter with configurable degeneracy tolerances
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fitter {
    config: FitConfig,
}

impl Fitter {
    /// Create a fitter with default tolerances
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a fitter from a configuration
    pub fn with_config(config: FitConfig) -> Self {
        Self { config }
    }

    /// Set the determinant tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.config = self.config.with_determinant_tolerance(tolerance);
        self
    }

    /// Tolerances in use
    pub fn config(&self) -> &FitConfig {
        &self.config
    }

    /// Circumradius of the triangle `p1 p2 p3`
    pub fn circumradius(&self, p1: Vector3, p2: Vector3, p3: Vector3) -> GeomResult<f64> {
        triangle::circumradius_with_tolerance(p1, p2, p3, self.config.area_tolerance)
    }
}

/// Fit a line `y = a x + b` through points in the XY plane
pub fn fit_line_2d(points: &[Vector3]) -> GeomResult<LineFit> {
    Fitter::new().fit_line_2d(points)
}

/// Fit a 3D line through points
pub fn fit_line_3d(points: &[Vector3]) -> GeomResult<LineFit> {
    Fitter::new().fit_line_3d(points)
}

/// Fit a plane through points
pub fn fit_plane(points: &[Vector3]) -> GeomResult<PlaneFit> {
    Fitter::new().fit_plane(points)
}

/// Mean of the points
///
/// Summed as offsets from the first point, so identical points give
/// exactly that point back.
fn centroid(points: &[Vector3]) -> Vector3 {
    let Some(&origin) = points.first() else {
        return Vector3::ZERO;
    };
    origin + points.iter().map(|p| *p - origin).sum::<Vector3>() / points.len() as f64
}

/// Centroid and centered moments, rejecting point sets that coincide
///
/// The points coincide when their spread is within `tolerance` of the
/// coordinates' magnitude, i.e. the centered trace is below
/// `tolerance² · Σ|p|²`.
fn scatter(points: &[Vector3], tolerance: f64) -> GeomResult<(Vector3, Moments)> {
    let center = centroid(points);
    let moments = Moments::about(points, center);
    let magnitude: f64 = points.iter().map(|p| p.norm_squared()).sum();

    if moments.trace() <= tolerance * tolerance * magnitude {
        tracing::debug!("Fit rejected: all {} points coincide", points.len());
        return Err(GeomError::DegenerateFit("points coincide".to_string()));
    }
    Ok((center, moments))
}
