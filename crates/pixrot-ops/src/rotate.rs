//! Unified rotation: one entry point for any angle.
//!
//! A requested angle is classified once into a [`Rotation`]:
//!
//! - exact multiples of 90° become [`Rotation::Orthogonal`] and use the
//!   closed-form index remapping in [`crate::orthogonal`]
//! - everything else becomes [`Rotation::Arbitrary`] and uses the
//!   nearest-neighbor sampler in [`crate::affine`]
//!
//! Both strategies implement [`RotateKernel`], so output sizing and the
//! byte-order fix live in one place ([`rotate_into`]).
//!
//! # Example
//!
//! ```rust
//! use pixrot_core::{Image, Pixel};
//! use pixrot_ops::{rotate, Rotation};
//!
//! let img = Image::filled(640, 480, Pixel::new(1, 2, 3, 255));
//!
//! let portrait = rotate(&img, Rotation::from_degrees(90.0), false).unwrap();
//! assert_eq!(portrait.dimensions(), (480, 640));
//!
//! let tilted = rotate(&img, Rotation::from_degrees(12.5), true).unwrap();
//! assert_eq!(tilted.dimensions(), (640, 480));
//! assert_eq!(tilted.pixel(0, 0), Pixel::new(3, 2, 1, 255));
//! ```

use crate::affine::AffineSampler;
use crate::cancel::CancelToken;
use crate::dispatch;
use crate::orthogonal::RightAngle;
use crate::OpsResult;
use pixrot_core::Image;
use pixrot_math::normalize_degrees;
use std::fmt;
use std::time::Instant;
use tracing::{debug, trace};

/// Gather-style rotation kernel bound to one source size.
///
/// The unit of work is an output pixel: the kernel says which source pixel
/// supplies it. Implementations must return an index inside the source for
/// every `(x, y)` inside [`output_dimensions`](Self::output_dimensions).
pub trait RotateKernel: Sync {
    /// Output `(width, height)`.
    fn output_dimensions(&self) -> (u32, u32);

    /// Linear source index for output pixel `(x, y)`.
    fn source_index(&self, x: u32, y: u32) -> usize;
}

/// A requested rotation, clockwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rotation {
    /// Exact multiple of 90°; no resampling.
    Orthogonal(RightAngle),
    /// Any other angle in degrees; nearest-neighbor resampling, same size.
    Arbitrary(f32),
}

impl Rotation {
    /// Classifies `degrees` after normalizing it into `[0, 360)`.
    ///
    /// ```rust
    /// use pixrot_ops::{RightAngle, Rotation};
    ///
    /// assert_eq!(Rotation::from_degrees(-90.0), Rotation::Orthogonal(RightAngle::R270));
    /// assert_eq!(Rotation::from_degrees(405.0), Rotation::Arbitrary(45.0));
    /// ```
    pub fn from_degrees(degrees: f32) -> Self {
        let normalized = normalize_degrees(degrees);
        RightAngle::ALL
            .into_iter()
            .find(|angle| angle.degrees() as f32 == normalized)
            .map_or(Self::Arbitrary(normalized), Self::Orthogonal)
    }

    /// Clockwise angle in degrees.
    pub fn degrees(&self) -> f32 {
        match self {
            Self::Orthogonal(angle) => angle.degrees() as f32,
            Self::Arbitrary(degrees) => *degrees,
        }
    }

    /// `true` when the fast index-remapping path applies.
    pub fn is_orthogonal(&self) -> bool {
        matches!(self, Self::Orthogonal(_))
    }

    /// Output `(width, height)` for a `width × height` source.
    pub fn output_dimensions(&self, width: u32, height: u32) -> (u32, u32) {
        match self {
            Self::Orthogonal(angle) => angle.output_dimensions(width, height),
            Self::Arbitrary(_) => (width, height),
        }
    }
}

impl Default for Rotation {
    fn default() -> Self {
        Self::Orthogonal(RightAngle::R0)
    }
}

impl From<RightAngle> for Rotation {
    fn from(angle: RightAngle) -> Self {
        Self::Orthogonal(angle)
    }
}

impl From<i32> for Rotation {
    fn from(degrees: i32) -> Self {
        RightAngle::from_degrees(degrees)
            .map_or_else(|| Self::from_degrees(degrees as f32), Self::Orthogonal)
    }
}

impl From<f32> for Rotation {
    fn from(degrees: f32) -> Self {
        Self::from_degrees(degrees)
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Orthogonal(angle) => write!(f, "{angle}"),
            Self::Arbitrary(degrees) => write!(f, "{degrees}° (resampled)"),
        }
    }
}

/// Rotates `src` into a new image.
pub fn rotate(src: &Image, rotation: Rotation, byte_order_fix: bool) -> OpsResult<Image> {
    let mut dst = Image::default();
    rotate_into(src, rotation, byte_order_fix, &mut dst, &CancelToken::new())?;
    Ok(dst)
}

/// Rotates `src` into `dst`, reshaping `dst` for the rotated size first.
///
/// `dst` keeps its allocation when the pixel count is unchanged. On error the
/// contents of `dst` are unspecified.
///
/// # Errors
///
/// - [`OpsError::Cancelled`](crate::OpsError::Cancelled) if `cancel` trips
///   between rows
/// - [`OpsError::Core`](crate::OpsError::Core) if the output size overflows
pub fn rotate_into(
    src: &Image,
    rotation: Rotation,
    byte_order_fix: bool,
    dst: &mut Image,
    cancel: &CancelToken,
) -> OpsResult<()> {
    let (width, height) = src.dimensions();
    let (out_w, out_h) = rotation.output_dimensions(width, height);
    trace!(width, height, out_w, out_h, %rotation, byte_order_fix, "rotate_into");

    let start = Instant::now();
    dst.reshape(out_w, out_h)?;

    match rotation {
        Rotation::Orthogonal(angle) => {
            run_orthogonal(angle, src, dst, byte_order_fix, cancel)?;
        }
        Rotation::Arbitrary(degrees) => {
            let sampler = AffineSampler::new(width, height, degrees);
            dispatch::gather(&sampler, src.pixels(), dst.pixels_mut(), byte_order_fix, cancel)?;
        }
    }

    debug!(
        width,
        height,
        %rotation,
        elapsed_ms = start.elapsed().as_secs_f64() * 1e3,
        "Rotation pass complete"
    );
    Ok(())
}

#[cfg(feature = "parallel")]
fn run_orthogonal(
    angle: RightAngle,
    src: &Image,
    dst: &mut Image,
    byte_order_fix: bool,
    cancel: &CancelToken,
) -> OpsResult<()> {
    let kernel = crate::orthogonal::OrthogonalKernel::new(angle, src.width(), src.height());
    dispatch::gather(&kernel, src.pixels(), dst.pixels_mut(), byte_order_fix, cancel)
}

#[cfg(not(feature = "parallel"))]
fn run_orthogonal(
    angle: RightAngle,
    src: &Image,
    dst: &mut Image,
    byte_order_fix: bool,
    cancel: &CancelToken,
) -> OpsResult<()> {
    let (width, height) = src.dimensions();
    dispatch::scatter_rows(angle, src.pixels(), width, height, dst.pixels_mut(), byte_order_fix, cancel)
}
