//! Geometry Helpers for Interactive CAD Commands
//!
//! This crate provides:
//! - `Vector3` value type with rotation, projection and polar helpers
//! - Least-squares line fitting in 2D and 3D
//! - Least-squares plane fitting
//! - Triangle circumradius
//! - Affine transform helpers built on glam
//! - Serializable tolerance configuration

pub mod config;
pub mod constants;
pub mod error;
pub mod fit;
pub mod transform;
pub mod triangle;
pub mod vector;

// Re-exports for convenience
pub use config::{ConfigError, FitConfig};
pub use error::{GeomError, GeomResult};
pub use fit::{Fitter, LineFit, PlaneFit, fit_line_2d, fit_line_3d, fit_plane};
pub use transform::{flip_axes, rotation_about, transform_point, transform_vector, translation};
pub use triangle::{circumradius, triangle_area};
pub use vector::{ParseVectorError, Vector3};
