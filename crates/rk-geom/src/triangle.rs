//! Triangle measures

use crate::constants::DEFAULT_AREA_TOLERANCE;
use crate::error::{GeomError, GeomResult};
use crate::vector::Vector3;

/// Area of the triangle `p1 p2 p3` by Heron's formula
pub fn triangle_area(p1: Vector3, p2: Vector3, p3: Vector3) -> f64 {
    let mut sides = [p1.distance(p2), p2.distance(p3), p3.distance(p1)];
    sides.sort_by(|l, r| r.total_cmp(l));
    heron_area(sides)
}

/// Radius of the circle through three points
///
/// Fails with [`GeomError::DegenerateTriangle`] when the points are
/// collinear or coincide, and with [`GeomError::NonFinite`] for NaN or
/// infinite coordinates.
pub fn circumradius(p1: Vector3, p2: Vector3, p3: Vector3) -> GeomResult<f64> {
    circumradius_with_tolerance(p1, p2, p3, DEFAULT_AREA_TOLERANCE)
}

/// [`circumradius`] with an explicit relative area tolerance
pub(crate) fn circumradius_with_tolerance(
    p1: Vector3,
    p2: Vector3,
    p3: Vector3,
    tolerance: f64,
) -> GeomResult<f64> {
    GeomError::require_finite(&[p1, p2, p3])?;

    let (a, b, c) = (p1.distance(p2), p2.distance(p3), p3.distance(p1));
    let mut sides = [a, b, c];
    sides.sort_by(|l, r| r.total_cmp(l));

    let area = heron_area(sides);
    let longest = sides[0];
    if area <= tolerance * longest * longest {
        tracing::debug!("Circumradius rejected: triangle area {} is ~0", area);
        return Err(GeomError::DegenerateTriangle);
    }

    Ok(a * b * c / (4.0 * area))
}

/// Heron's formula for sides sorted longest first
///
/// Evaluated as `sqrt(s (s-a) (s-b) (s-c))` rearranged so that no factor
/// loses precision to cancellation.
fn heron_area([a, b, c]: [f64; 3]) -> f64 {
    let product = (a + (b + c)) * (c - (a - b)) * (c + (a - b)) * (a + (b - c));
    0.25 * product.max(0.0).sqrt()
}
