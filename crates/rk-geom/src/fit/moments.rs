//! Second-moment accumulation and closed-form cofactor elimination
//!
//! Both the 3D line fit and the plane fit reduce to finding the null
//! vector of a shifted 3×3 symmetric moment matrix. Instead of a general
//! eigensolver, the eigenvalue is found with the trigonometric formula
//! for symmetric 3×3 matrices and the null vector with the
//! best-conditioned 2×2 principal cofactor.

use std::f64::consts::FRAC_PI_3;

use glam::{DMat3, DVec3};

use crate::vector::Vector3;

/// Symmetric 3×3 matrix of second-moment sums
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Moments {
    pub xx: f64,
    pub xy: f64,
    pub xz: f64,
    pub yy: f64,
    pub yz: f64,
    pub zz: f64,
}

/// Which axis was fixed at 1 when eliminating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EliminationAxis {
    X,
    Y,
    Z,
}

impl Moments {
    /// Sums of products of coordinates taken about `center`
    pub fn about(points: &[Vector3], center: Vector3) -> Self {
        let mut m = Self {
            xx: 0.0,
            xy: 0.0,
            xz: 0.0,
            yy: 0.0,
            yz: 0.0,
            zz: 0.0,
        };
        for p in points {
            let q = *p - center;
            m.xx += q.x * q.x;
            m.xy += q.x * q.y;
            m.xz += q.x * q.z;
            m.yy += q.y * q.y;
            m.yz += q.y * q.z;
            m.zz += q.z * q.z;
        }
        m
    }

    pub fn trace(&self) -> f64 {
        self.xx + self.yy + self.zz
    }

    /// Subtract `lambda` from the diagonal
    pub fn shifted(&self, lambda: f64) -> Self {
        Self {
            xx: self.xx - lambda,
            yy: self.yy - lambda,
            zz: self.zz - lambda,
            ..*self
        }
    }

    fn to_mat3(self) -> DMat3 {
        DMat3::from_cols(
            DVec3::new(self.xx, self.xy, self.xz),
            DVec3::new(self.xy, self.yy, self.yz),
            DVec3::new(self.xz, self.yz, self.zz),
        )
    }

    /// Eigenvalues in ascending order
    ///
    /// Closed-form trigonometric solution; exact up to rounding for any
    /// real symmetric matrix.
    pub fn eigenvalues(&self) -> [f64; 3] {
        let off_diagonal = self.xy * self.xy + self.xz * self.xz + self.yz * self.yz;
        if off_diagonal == 0.0 {
            let mut diagonal = [self.xx, self.yy, self.zz];
            diagonal.sort_by(f64::total_cmp);
            return diagonal;
        }

        let q = self.trace() / 3.0;
        let p2 = (self.xx - q).powi(2)
            + (self.yy - q).powi(2)
            + (self.zz - q).powi(2)
            + 2.0 * off_diagonal;
        let p = (p2 / 6.0).sqrt();

        let b = self.shifted(q).to_mat3() * (1.0 / p);
        let r = (b.determinant() / 2.0).clamp(-1.0, 1.0);
        let phi = r.acos() / 3.0;

        let largest = q + 2.0 * p * phi.cos();
        let smallest = q + 2.0 * p * (phi + 2.0 * FRAC_PI_3).cos();
        let middle = 3.0 * q - largest - smallest;
        [smallest, middle, largest]
    }

    /// The three 2×2 principal cofactor determinants `(det_x, det_y, det_z)`
    pub fn cofactors(&self) -> (f64, f64, f64) {
        (
            self.yy * self.zz - self.yz * self.yz,
            self.xx * self.zz - self.xz * self.xz,
            self.xx * self.yy - self.xy * self.xy,
        )
    }

    /// Sum of the principal cofactors
    ///
    /// For a covariance matrix this is zero exactly when the scatter has
    /// rank one or less (all points on a line).
    pub fn cofactor_sum(&self) -> f64 {
        let (det_x, det_y, det_z) = self.cofactors();
        det_x + det_y + det_z
    }

    /// Null vector of this (singular) matrix by cofactor elimination
    ///
    /// Fixes the axis with the largest-magnitude principal cofactor at 1
    /// and solves the remaining two rows for the other components.
    /// Returns `None` when every cofactor is within `tolerance · scale²`
    /// of zero. The result is not normalized.
    pub fn null_vector(&self, scale: f64, tolerance: f64) -> Option<(Vector3, EliminationAxis)> {
        let (det_x, det_y, det_z) = self.cofactors();
        let det_max = det_x.abs().max(det_y.abs()).max(det_z.abs());
        if det_max.is_nan() || det_max <= tolerance * scale * scale {
            return None;
        }

        let Self {
            xx,
            xy,
            xz,
            yy,
            yz,
            zz,
        } = *self;

        let solved = if det_max == det_x.abs() {
            let a = (xz * yz - xy * zz) / det_x;
            let b = (xy * yz - xz * yy) / det_x;
            (Vector3::new(1.0, a, b), EliminationAxis::X)
        } else if det_max == det_y.abs() {
            let a = (yz * xz - xy * zz) / det_y;
            let b = (xy * xz - yz * xx) / det_y;
            (Vector3::new(a, 1.0, b), EliminationAxis::Y)
        } else {
            let a = (yz * xy - xz * yy) / det_z;
            let b = (xz * xy - yz * xx) / det_z;
            (Vector3::new(a, b, 1.0), EliminationAxis::Z)
        };
        Some(solved)
    }
}
