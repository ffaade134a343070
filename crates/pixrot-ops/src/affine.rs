//! Arbitrary-angle rotation by nearest-neighbor sampling.
//!
//! Each output pixel is mapped backward into the source through
//! [`rotation_about_center`], clamped to the source bounds and sampled.
//! Output size equals input size; corners that rotate in from outside the
//! source replicate the nearest edge pixel instead of wrapping or going
//! transparent.
//!
//! # Sampling Convention
//!
//! Output pixel `(x, y)` is mapped through its center `(x + 0.5, y + 0.5)`.
//! Each axis is then clamped independently (`< 0` becomes `0`,
//! `>= extent` becomes `extent - 1`) and **truncated** to an integer. With
//! this convention angle `0.0` is an exact identity and multiples of 90° on a
//! square image agree with the right-angle path pixel-for-pixel.

use crate::rotate::RotateKernel;
use pixrot_core::{linear_index, Image, Pixel};
use pixrot_math::glam::{Affine2, Vec2};
use pixrot_math::rotation_about_center;

/// Clamps a continuous coordinate to `[0, extent - 1]` and truncates it.
///
/// NaN clamps to `0`.
#[inline]
pub fn clamp_axis(v: f32, extent: u32) -> u32 {
    let max = extent.saturating_sub(1);
    if v.is_nan() || v < 0.0 {
        0
    } else if v >= extent as f32 {
        max
    } else {
        (v as u32).min(max)
    }
}

/// Source pixel coordinate that supplies output pixel `(x, y)`.
///
/// Always inside `[0, width - 1] × [0, height - 1]`.
#[inline]
pub fn source_coordinate(transform: &Affine2, x: u32, y: u32, width: u32, height: u32) -> (u32, u32) {
    let center = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
    let p = transform.transform_point2(center);
    (clamp_axis(p.x, width), clamp_axis(p.y, height))
}

/// Samples the source pixel for output `(x, y)` with no channel changes.
///
/// ```rust
/// use pixrot_core::{Image, Pixel};
/// use pixrot_math::rotation_about_center;
/// use pixrot_ops::affine::sample;
///
/// let img = Image::filled(3, 3, Pixel::new(9, 8, 7, 6));
/// let t = rotation_about_center(3, 3, 33.0);
/// assert_eq!(sample(&img, &t, 0, 0), Pixel::new(9, 8, 7, 6));
/// ```
#[inline]
pub fn sample(src: &Image, transform: &Affine2, x: u32, y: u32) -> Pixel {
    let (sx, sy) = source_coordinate(transform, x, y, src.width(), src.height());
    src.pixel(sx, sy)
}

/// Per-pass sampler for one `width × height` source and angle.
#[derive(Debug, Clone, Copy)]
pub struct AffineSampler {
    transform: Affine2,
    width: u32,
    height: u32,
}

impl AffineSampler {
    /// Builds the transform for a clockwise rotation of `degrees`.
    pub fn new(width: u32, height: u32, degrees: f32) -> Self {
        Self {
            transform: rotation_about_center(width, height, degrees),
            width,
            height,
        }
    }

    /// The output-to-input transform.
    pub fn transform(&self) -> &Affine2 {
        &self.transform
    }

    /// Source coordinate for output `(x, y)`.
    #[inline]
    pub fn source_coordinate(&self, x: u32, y: u32) -> (u32, u32) {
        source_coordinate(&self.transform, x, y, self.width, self.height)
    }
}

impl RotateKernel for AffineSampler {
    #[inline]
    fn output_dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    fn source_index(&self, x: u32, y: u32) -> usize {
        let (sx, sy) = self.source_coordinate(x, y);
        linear_index(sx, sy, self.width)
    }
}
