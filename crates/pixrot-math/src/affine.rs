//! Rotation about the image center.
//!
//! The map is built output-to-input, so a sampler can ask "which source
//! point lands on this output point":
//!
//! ```text
//! M = T(w/2, h/2) * R(-angle) * T(-w/2, -h/2)
//! ```
//!
//! `R(-angle)` undoes a clockwise turn of `angle` degrees in y-down space.
//! Built fresh per pass; nothing is cached.

use glam::{Affine2, Vec2};

/// Center of a `width × height` image in continuous coordinates.
#[inline]
pub fn image_center(width: u32, height: u32) -> Vec2 {
    Vec2::new(width as f32 / 2.0, height as f32 / 2.0)
}

/// Builds the output-to-input map for a clockwise rotation of `degrees`
/// about the center of a `width × height` image.
///
/// ```rust
/// use pixrot_math::rotation_about_center;
/// use pixrot_math::glam::Vec2;
///
/// // 90° clockwise on a 4x4 image: output (0.5, 0.5) reads from the
/// // bottom-left source pixel center.
/// let map = rotation_about_center(4, 4, 90.0);
/// let src = map.transform_point2(Vec2::new(0.5, 0.5));
/// assert!((src - Vec2::new(0.5, 3.5)).length() < 1e-5);
/// ```
pub fn rotation_about_center(width: u32, height: u32, degrees: f32) -> Affine2 {
    let center = image_center(width, height);
    Affine2::from_translation(center)
        * Affine2::from_angle(-degrees.to_radians())
        * Affine2::from_translation(-center)
}
