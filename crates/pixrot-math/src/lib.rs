//! # pixrot-math
//!
//! Math utilities for pixel-buffer rotation.
//!
//! - [`normalize_degrees`], [`normalize_degrees_i32`] - fold angles into `[0, 360)`
//! - [`rotation_about_center`] - output-to-input affine map for arbitrary angles
//!
//! # Design
//!
//! Transforms are [`glam::Affine2`] values: a 2x2 linear block plus a
//! translation. Image space is **y-down**, so a positive angle turns the
//! content clockwise on screen, matching the right-angle rotations in
//! `pixrot-ops`.
//!
//! ```rust
//! use pixrot_math::{normalize_degrees, rotation_about_center};
//! use pixrot_math::glam::Vec2;
//!
//! assert_eq!(normalize_degrees(-90.0), 270.0);
//!
//! let map = rotation_about_center(4, 4, 0.0);
//! let p = map.transform_point2(Vec2::new(1.5, 2.5));
//! assert!((p - Vec2::new(1.5, 2.5)).length() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod affine;
mod angle;

pub use affine::*;
pub use angle::*;

/// Re-export glam types used in public signatures.
pub mod glam {
    pub use ::glam::{Affine2, Vec2};
}
