//! Global constants for rk-geom

/// Minimum number of points for a line fit
pub const MIN_LINE_POINTS: usize = 2;

/// Minimum number of points for a plane fit
pub const MIN_PLANE_POINTS: usize = 3;

/// Relative rounding tolerance for the fit degeneracy checks
///
/// A point spread counts as zero below this fraction of the coordinates'
/// magnitude, and a moment cofactor below this fraction of its natural
/// scale. Leaves headroom over `f64::EPSILON` for rounding accumulated
/// over a few thousand points.
pub const DEFAULT_DETERMINANT_TOLERANCE: f64 = 1e-12;

/// Relative tolerance below which a triangle area counts as zero
///
/// Heron's formula resolves the area of a flat triangle only to about
/// `sqrt(eps)` times its longest side squared.
pub const DEFAULT_AREA_TOLERANCE: f64 = 1e-7;
