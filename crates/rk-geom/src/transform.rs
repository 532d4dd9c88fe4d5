//! Affine Transform Helpers
//!
//! Thin constructors over `glam::DAffine3` for the rigid motions used by
//! sketch and feature placement. Compose with ordinary multiplication:
//! `second * first` applies `first`, then `second`.

use glam::{DAffine3, DVec3};

use crate::error::GeomResult;
use crate::vector::Vector3;

/// Translation by `offset`
pub fn translation(offset: Vector3) -> DAffine3 {
    DAffine3::from_translation(offset.into())
}

/// Rotation by `angle` radians about the line through `center` along `axis`
pub fn rotation_about(axis: Vector3, angle: f64, center: Vector3) -> GeomResult<DAffine3> {
    let axis = DVec3::from(axis.normalize()?);
    let center = DVec3::from(center);
    Ok(DAffine3::from_translation(center)
        * DAffine3::from_axis_angle(axis, angle)
        * DAffine3::from_translation(-center))
}

/// Mirror the selected axes through the origin
pub fn flip_axes(x: bool, y: bool, z: bool) -> DAffine3 {
    let sign = |flip: bool| if flip { -1.0 } else { 1.0 };
    DAffine3::from_scale(DVec3::new(sign(x), sign(y), sign(z)))
}

/// Apply `transform` to a point
pub fn transform_point(transform: &DAffine3, p: Vector3) -> Vector3 {
    transform.transform_point3(p.into()).into()
}

/// Apply `transform` to a direction (translation is ignored)
pub fn transform_vector(transform: &DAffine3, v: Vector3) -> Vector3 {
    transform.transform_vector3(v.into()).into()
}
