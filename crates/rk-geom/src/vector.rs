//! 3D Vector Value Type
//!
//! `Vector3` is the leaf type of the crate. It doubles as a point and a
//! direction, and every operation returns a new value.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::Sum;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};
use std::str::FromStr;

use glam::{DVec3, Vec3};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{GeomError, GeomResult};

/// A 3D vector (or point) with `f64` components
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Create a new vector
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Vector in the XY plane from a radius and an angle in radians
    pub fn polar(radius: f64, angle: f64) -> Self {
        Self::polar_at(radius, angle, 0.0)
    }

    /// Polar construction lifted to the given height
    pub fn polar_at(radius: f64, angle: f64, z: f64) -> Self {
        Self::new(radius * angle.cos(), radius * angle.sin(), z)
    }

    /// Dot product
    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Euclidean length
    pub fn norm(self) -> f64 {
        self.norm_squared().sqrt()
    }

    /// Squared length
    pub fn norm_squared(self) -> f64 {
        self.dot(self)
    }

    /// True when every component is exactly zero
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0 && self.z == 0.0
    }

    /// True when no component is NaN or infinite
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Scale to unit length
    pub fn normalize(self) -> GeomResult<Self> {
        self.normalize_to(1.0)
    }

    /// Scale to the given length, keeping the direction
    pub fn normalize_to(self, length: f64) -> GeomResult<Self> {
        let norm = self.norm();
        if norm == 0.0 {
            return Err(GeomError::DegenerateVector);
        }
        Ok(self * length / norm)
    }

    /// Distance between two points
    pub fn distance(self, other: Self) -> f64 {
        (self - other).norm()
    }

    /// Distance from this point to the line through `p1` and `p2`, in the XY plane
    pub fn distance_to_line(self, p1: Self, p2: Self) -> GeomResult<f64> {
        let length = (p2 - p1).norm();
        if length == 0.0 {
            return Err(GeomError::DegenerateVector);
        }
        let area = (p2.y - p1.y) * self.x - (p2.x - p1.x) * self.y + p2.x * p1.y - p2.y * p1.x;
        Ok(area.abs() / length)
    }

    /// Angle from the positive X axis in the XY plane, in `[-pi, pi]`
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }

    /// Ratio `y / x`
    pub fn slope(self) -> GeomResult<f64> {
        if self.x == 0.0 {
            return Err(GeomError::DegenerateVector);
        }
        Ok(self.y / self.x)
    }

    /// Radius and angle of the XY projection
    ///
    /// The radius is the full 3D norm, matching `polar_at` only when `z == 0`.
    pub fn to_polar(self) -> (f64, f64) {
        (self.norm(), self.angle())
    }

    pub fn flip_x(self) -> Self {
        Self::new(-self.x, self.y, self.z)
    }

    pub fn flip_y(self) -> Self {
        Self::new(self.x, -self.y, self.z)
    }

    pub fn flip_z(self) -> Self {
        Self::new(self.x, self.y, -self.z)
    }

    /// Rotate about the Z axis by `angle` radians (counter-clockwise seen from +Z)
    pub fn rotate_z(self, angle: f64) -> Self {
        let (sin_a, cos_a) = angle.sin_cos();
        Self::new(
            self.x * cos_a - self.y * sin_a,
            self.x * sin_a + self.y * cos_a,
            self.z,
        )
    }

    /// Rotate about a Z-parallel axis through `origin`
    pub fn rotate_z_about(self, angle: f64, origin: Self) -> Self {
        (self - origin).rotate_z(angle) + origin
    }

    /// Add `other` rotated about Z by `angle` radians
    pub fn add_rotated(self, angle: f64, other: Self) -> Self {
        self + other.rotate_z(angle)
    }

    /// Rotate about an arbitrary axis through the origin (Rodrigues' formula)
    ///
    /// The axis does not need to be normalized, but it must not be zero.
    pub fn rotate_axis(self, axis: Self, angle: f64) -> GeomResult<Self> {
        let axis = axis.normalize()?;
        let (sin_a, cos_a) = angle.sin_cos();
        Ok(self * cos_a + axis.cross(self) * sin_a + axis * axis.dot(self) * (1.0 - cos_a))
    }

    /// Orthogonal projection onto the plane through `origin` with the given normal
    pub fn project_to_plane(self, origin: Self, normal: Self) -> GeomResult<Self> {
        let normal = normal.normalize()?;
        let d = self - origin;
        Ok(d - normal * d.dot(normal) + origin)
    }

    /// Round each component to `digits` decimal places
    pub fn round_to(self, digits: i32) -> Self {
        let factor = 10f64.powi(digits);
        Self::new(
            (self.x * factor).round() / factor,
            (self.y * factor).round() / factor,
            (self.z * factor).round() / factor,
        )
    }

    pub fn to_array(self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Iterate over the components in x, y, z order
    pub fn iter(self) -> impl Iterator<Item = f64> {
        self.to_array().into_iter()
    }
}

// ============== Operators ==============

impl Add for Vector3 {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }
}

impl Sub for Vector3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self::new(self.x * scalar, self.y * scalar, self.z * scalar)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        v * self
    }
}

impl Div<f64> for Vector3 {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self::new(self.x / scalar, self.y / scalar, self.z / scalar)
    }
}

impl Neg for Vector3 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl Sum for Vector3 {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Vector3> for Vector3 {
    fn sum<I: Iterator<Item = &'a Vector3>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl Index<usize> for Vector3 {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of range: {}", index),
        }
    }
}

impl Hash for Vector3 {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.iter() {
            // -0.0 == 0.0 must hash alike
            let c = if c == 0.0 { 0.0f64 } else { c };
            c.to_bits().hash(state);
        }
    }
}

// ============== Conversions ==============

impl From<[f64; 3]> for Vector3 {
    fn from(v: [f64; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<Vector3> for [f64; 3] {
    fn from(v: Vector3) -> Self {
        v.to_array()
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<DVec3> for Vector3 {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for DVec3 {
    fn from(v: Vector3) -> Self {
        DVec3::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for Vector3 {
    fn from(v: Vec3) -> Self {
        Self::from(v.as_dvec3())
    }
}

impl From<Vector3> for Vec3 {
    fn from(v: Vector3) -> Self {
        DVec3::from(v).as_vec3()
    }
}

// ============== Text ==============

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match f.precision() {
            Some(p) => write!(f, "({:.p$}, {:.p$}, {:.p$})", self.x, self.y, self.z, p = p),
            None => write!(f, "({}, {}, {})", self.x, self.y, self.z),
        }
    }
}

/// Error parsing a `Vector3` from text
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseVectorError {
    #[error("Expected 3 components, found {0}")]
    ComponentCount(usize),

    #[error("Invalid component: '{0}'")]
    InvalidComponent(String),
}

impl FromStr for Vector3 {
    type Err = ParseVectorError;

    /// Parse `"(x, y, z)"`; the parentheses are optional
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('(').unwrap_or(s);
        let s = s.strip_suffix(')').unwrap_or(s);

        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 3 {
            return Err(ParseVectorError::ComponentCount(parts.len()));
        }

        let mut components = [0.0; 3];
        for (component, part) in components.iter_mut().zip(&parts) {
            *component = part
                .parse()
                .map_err(|_| ParseVectorError::InvalidComponent(part.to_string()))?;
        }
        Ok(Self::from(components))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use glam::DQuat;
    use std::collections::hash_map::DefaultHasher;
    use std::f64::consts::{FRAC_PI_2, PI, TAU};

    fn assert_vec_eq(a: Vector3, b: Vector3) {
        assert_relative_eq!(a.x, b.x, epsilon = 1e-9);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
        assert_relative_eq!(a.z, b.z, epsilon = 1e-9);
    }

    fn hash_of(v: Vector3) -> u64 {
        let mut hasher = DefaultHasher::new();
        v.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_arithmetic() {
        let a = Vector3::new(1.0, 2.0, 3.0);
        let b = Vector3::new(4.0, 5.0, 6.0);
        assert_eq!(a + b, Vector3::new(5.0, 7.0, 9.0));
        assert_eq!(b - a, Vector3::new(3.0, 3.0, 3.0));
        assert_eq!(a * 2.0, 2.0 * a);
        assert_eq!(b / 2.0, Vector3::new(2.0, 2.5, 3.0));
        assert_eq!(-a, Vector3::new(-1.0, -2.0, -3.0));
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(Vector3::X.cross(Vector3::Y), Vector3::Z);
        assert_eq!(Vector3::new(3.0, 4.0, 0.0).norm(), 5.0);
    }

    #[test]
    fn test_normalize_unit_and_parallel() {
        for v in [
            Vector3::new(3.0, 4.0, 0.0),
            Vector3::new(-1e-3, 2e-3, 5e-4),
            Vector3::new(1e6, -2e6, 3e6),
        ] {
            let n = v.normalize().unwrap();
            assert_relative_eq!(n.norm(), 1.0, epsilon = 1e-12);
            assert!(n.cross(v).norm() <= 1e-9 * v.norm());
            assert!(n.dot(v) > 0.0);
        }
    }

    #[test]
    fn test_normalize_to_length() {
        let v = Vector3::new(0.0, 2.0, 0.0).normalize_to(5.0).unwrap();
        assert_vec_eq(v, Vector3::new(0.0, 5.0, 0.0));
    }

    #[test]
    fn test_normalize_zero_fails() {
        assert_eq!(Vector3::ZERO.normalize(), Err(GeomError::DegenerateVector));
        assert_eq!(
            Vector3::ZERO.normalize_to(2.0),
            Err(GeomError::DegenerateVector)
        );
    }

    #[test]
    fn test_rotate_axis_full_turns() {
        let v = Vector3::new(1.0, -2.0, 0.5);
        let axis = Vector3::new(0.3, 0.4, 1.2);
        assert_vec_eq(v.rotate_axis(axis, 0.0).unwrap(), v);
        assert_vec_eq(v.rotate_axis(axis, TAU).unwrap(), v);
    }

    #[test]
    fn test_rotate_axis_matches_quaternion() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        let axis = Vector3::new(-1.0, 0.5, 2.0);
        let angle = 0.7;

        let rotated = v.rotate_axis(axis, angle).unwrap();
        let quat = DQuat::from_axis_angle(DVec3::from(axis).normalize(), angle);
        assert_vec_eq(rotated, Vector3::from(quat * DVec3::from(v)));
    }

    #[test]
    fn test_rotate_axis_zero_axis_fails() {
        assert_eq!(
            Vector3::X.rotate_axis(Vector3::ZERO, 1.0),
            Err(GeomError::DegenerateVector)
        );
    }

    #[test]
    fn test_rotate_z() {
        assert_vec_eq(Vector3::X.rotate_z(FRAC_PI_2), Vector3::Y);
        // z is carried through
        assert_vec_eq(
            Vector3::new(1.0, 0.0, 4.0).rotate_z(PI),
            Vector3::new(-1.0, 0.0, 4.0),
        );
        let origin = Vector3::new(1.0, 1.0, 0.0);
        assert_vec_eq(
            Vector3::new(2.0, 1.0, 0.0).rotate_z_about(FRAC_PI_2, origin),
            Vector3::new(1.0, 2.0, 0.0),
        );
        assert_vec_eq(
            Vector3::new(1.0, 1.0, 0.0).add_rotated(FRAC_PI_2, Vector3::X),
            Vector3::new(1.0, 2.0, 0.0),
        );
    }

    #[test]
    fn test_rotate_z_agrees_with_axis_rotation() {
        let v = Vector3::new(0.3, -1.1, 2.0);
        assert_vec_eq(v.rotate_z(1.3), v.rotate_axis(Vector3::Z, 1.3).unwrap());
    }

    #[test]
    fn test_project_to_plane() {
        let origin = Vector3::new(0.0, 0.0, 2.0);
        let p = Vector3::new(1.0, 2.0, 7.0);
        assert_vec_eq(
            p.project_to_plane(origin, Vector3::new(0.0, 0.0, 3.0))
                .unwrap(),
            Vector3::new(1.0, 2.0, 2.0),
        );
        assert!(p.project_to_plane(origin, Vector3::ZERO).is_err());
    }

    #[test]
    fn test_distance_to_line() {
        let p = Vector3::new(0.0, 3.0, 0.0);
        let d = p
            .distance_to_line(Vector3::new(-1.0, 0.0, 0.0), Vector3::new(1.0, 0.0, 0.0))
            .unwrap();
        assert_relative_eq!(d, 3.0);
        assert_eq!(
            p.distance_to_line(Vector3::X, Vector3::X),
            Err(GeomError::DegenerateVector)
        );
        assert_relative_eq!(p.distance(Vector3::new(4.0, 0.0, 0.0)), 5.0);
    }

    #[test]
    fn test_polar() {
        assert_vec_eq(Vector3::polar(2.0, FRAC_PI_2), Vector3::new(0.0, 2.0, 0.0));
        assert_vec_eq(
            Vector3::polar_at(1.0, PI, 3.0),
            Vector3::new(-1.0, 0.0, 3.0),
        );
        let (r, t) = Vector3::new(0.0, -2.0, 0.0).to_polar();
        assert_relative_eq!(r, 2.0);
        assert_relative_eq!(t, -FRAC_PI_2);
    }

    #[test]
    fn test_slope_and_flips() {
        assert_eq!(Vector3::new(2.0, 3.0, 0.0).slope(), Ok(1.5));
        assert_eq!(Vector3::Y.slope(), Err(GeomError::DegenerateVector));
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(v.flip_x(), Vector3::new(-1.0, 2.0, 3.0));
        assert_eq!(v.flip_y(), Vector3::new(1.0, -2.0, 3.0));
        assert_eq!(v.flip_z(), Vector3::new(1.0, 2.0, -3.0));
    }

    #[test]
    fn test_index_and_iter() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!([v[0], v[1], v[2]], [1.0, 2.0, 3.0]);
        assert_eq!(v.iter().sum::<f64>(), 6.0);
        assert!(Vector3::ZERO.is_zero());
        assert!(!v.is_zero());
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range() {
        let _ = Vector3::ZERO[3];
    }

    #[test]
    fn test_hash_follows_equality() {
        assert_eq!(Vector3::new(0.0, 1.0, 2.0), Vector3::new(-0.0, 1.0, 2.0));
        assert_eq!(
            hash_of(Vector3::new(0.0, 1.0, 2.0)),
            hash_of(Vector3::new(-0.0, 1.0, 2.0))
        );
        assert_ne!(
            hash_of(Vector3::new(1.0, 2.0, 3.0)),
            hash_of(Vector3::new(3.0, 2.0, 1.0))
        );
    }

    #[test]
    fn test_round_to() {
        assert_eq!(
            Vector3::new(1.23456, -2.5049, 0.0).round_to(2),
            Vector3::new(1.23, -2.5, 0.0)
        );
    }

    #[test]
    fn test_sum() {
        let points = [Vector3::X, Vector3::Y, Vector3::Z];
        assert_eq!(points.iter().sum::<Vector3>(), Vector3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_display() {
        let v = Vector3::new(1.5, -2.0, 0.25);
        assert_eq!(v.to_string(), "(1.5, -2, 0.25)");
        assert_eq!(format!("{:.2}", v), "(1.50, -2.00, 0.25)");
    }

    #[test]
    fn test_parse() {
        assert_eq!(
            "(1.5, -2, 0.25)".parse::<Vector3>(),
            Ok(Vector3::new(1.5, -2.0, 0.25))
        );
        assert_eq!("1,2,3".parse::<Vector3>(), Ok(Vector3::new(1.0, 2.0, 3.0)));
        assert_eq!(
            "(1, 2)".parse::<Vector3>(),
            Err(ParseVectorError::ComponentCount(2))
        );
        assert_eq!(
            "(1, b, 3)".parse::<Vector3>(),
            Err(ParseVectorError::InvalidComponent("b".to_string()))
        );
    }

    #[test]
    fn test_glam_conversions() {
        let v = Vector3::new(1.0, 2.0, 3.0);
        assert_eq!(Vector3::from(DVec3::from(v)), v);
        assert_eq!(Vec3::from(v), Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vector3::from(Vec3::new(1.0, 2.0, 3.0)), v);
        assert_eq!(Vector3::from((1.0, 2.0, 3.0)), v);
        assert_eq!(<[f64; 3]>::from(v), [1.0, 2.0, 3.0]);
    }
}
