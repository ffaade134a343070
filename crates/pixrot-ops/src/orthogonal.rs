//! Right-angle rotation by closed-form index remapping.
//!
//! Rotations by 0/90/180/270 degrees clockwise need no resampling: every
//! source pixel moves to exactly one destination index. The unit of work is
//! one **source row**; each pixel `(i, r)` of that row, with
//! `s = r * width + i`, is written to:
//!
//! | rotation | out width | out height | target index                  |
//! |----------|-----------|------------|-------------------------------|
//! | 0        | width     | height     | `s`                           |
//! | 90       | height    | width      | `i * height + (height - r - 1)` |
//! | 180      | width     | height     | `width * height - s - 1`      |
//! | 270      | height    | width      | `(width - 1 - i) * height + r` |
//!
//! For a 90° turn a source row becomes an output column read bottom-to-top;
//! for 270° it becomes a column read top-to-bottom from the left edge.
//!
//! # Example
//!
//! ```rust
//! use pixrot_core::Pixel;
//! use pixrot_ops::RightAngle;
//!
//! let [a, b, c, d] = [1, 2, 3, 4].map(|v| Pixel::new(v, 0, 0, 255));
//! let src = [a, b, c, d];
//! let mut dst = [Pixel::TRANSPARENT; 4];
//! RightAngle::R90.rotate_buffer(&src, 2, 2, &mut dst, false).unwrap();
//! assert_eq!(dst, [c, a, d, b]);
//! ```

use crate::rotate::RotateKernel;
use crate::{OpsError, OpsResult};
use pixrot_core::{linear_index, Pixel};
use pixrot_math::normalize_degrees_i32;
use std::fmt;
use tracing::trace;

/// Clockwise rotation by a multiple of 90 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RightAngle {
    /// No rotation.
    #[default]
    R0,
    /// 90 degrees clockwise.
    R90,
    /// 180 degrees.
    R180,
    /// 270 degrees clockwise (90 counter-clockwise).
    R270,
}

impl RightAngle {
    /// All four right angles in ascending order.
    pub const ALL: [Self; 4] = [Self::R0, Self::R90, Self::R180, Self::R270];

    /// Returns the right angle for `degrees` (any integer, normalized into
    /// `[0, 360)`), or `None` if it is not a multiple of 90.
    ///
    /// ```rust
    /// use pixrot_ops::RightAngle;
    ///
    /// assert_eq!(RightAngle::from_degrees(-90), Some(RightAngle::R270));
    /// assert_eq!(RightAngle::from_degrees(45), None);
    /// ```
    pub fn from_degrees(degrees: i32) -> Option<Self> {
        match normalize_degrees_i32(degrees) {
            0 => Some(Self::R0),
            90 => Some(Self::R90),
            180 => Some(Self::R180),
            270 => Some(Self::R270),
            _ => None,
        }
    }

    /// Clockwise angle in degrees.
    #[inline]
    pub const fn degrees(self) -> u32 {
        match self {
            Self::R0 => 0,
            Self::R90 => 90,
            Self::R180 => 180,
            Self::R270 => 270,
        }
    }

    /// The rotation that undoes this one.
    #[inline]
    pub const fn inverse(self) -> Self {
        match self {
            Self::R0 => Self::R0,
            Self::R90 => Self::R270,
            Self::R180 => Self::R180,
            Self::R270 => Self::R90,
        }
    }

    /// `true` for 90 and 270, where output width and height trade places.
    #[inline]
    pub const fn swaps_dimensions(self) -> bool {
        matches!(self, Self::R90 | Self::R270)
    }

    /// Output `(width, height)` for a `width × height` source.
    #[inline]
    pub const fn output_dimensions(self, width: u32, height: u32) -> (u32, u32) {
        if self.swaps_dimensions() {
            (height, width)
        } else {
            (width, height)
        }
    }

    /// Destination index of source pixel `(i, r)` in a `width × height` source.
    #[inline]
    pub fn target_index(self, i: u32, r: u32, width: u32, height: u32) -> usize {
        let (i, r, w, h) = (i as usize, r as usize, width as usize, height as usize);
        match self {
            Self::R0 => r * w + i,
            Self::R90 => i * h + (h - r - 1),
            Self::R180 => w * h - (r * w + i) - 1,
            Self::R270 => (w - 1 - i) * h + r,
        }
    }

    /// Source index that lands on output pixel `(x, y)`.
    ///
    /// Closed-form inverse of [`target_index`](Self::target_index); `width`
    /// and `height` are the **source** dimensions.
    #[inline]
    pub fn source_index(self, x: u32, y: u32, width: u32, height: u32) -> usize {
        match self {
            Self::R0 => linear_index(x, y, width),
            Self::R90 => linear_index(y, height - 1 - x, width),
            Self::R180 => width as usize * height as usize - linear_index(x, y, width) - 1,
            Self::R270 => linear_index(width - 1 - y, x, width),
        }
    }

    /// Writes every pixel of source row `row` into its rotated position.
    ///
    /// `src` is the whole `width × height` source; `dst` is the whole output,
    /// sized for the rotated dimensions. With `byte_order_fix` the red and blue
    /// channels are swapped on the way.
    ///
    /// # Panics
    ///
    /// Panics if `row >= height` or either buffer is not `width * height`
    /// pixels.
    pub fn rotate_row(
        self,
        src: &[Pixel],
        width: u32,
        height: u32,
        row: u32,
        dst: &mut [Pixel],
        byte_order_fix: bool,
    ) {
        let count = width as usize * height as usize;
        assert!(row < height, "row {row} out of range for height {height}");
        assert_eq!(src.len(), count, "source buffer does not match {width}x{height}");
        assert_eq!(dst.len(), count, "output buffer does not match {width}x{height}");

        let start = row as usize * width as usize;
        let src_row = &src[start..start + width as usize];
        for (i, &px) in (0..width).zip(src_row).rev() {
            dst[self.target_index(i, row, width, height)] = px.with_byte_order(byte_order_fix);
        }
    }

    /// Rotates a whole buffer, one source row at a time.
    ///
    /// # Errors
    ///
    /// - [`OpsError::InvalidDimensions`] if `src` is not `width * height` pixels
    /// - [`OpsError::SizeMismatch`] if `dst` is not the same size as `src`
    pub fn rotate_buffer(
        self,
        src: &[Pixel],
        width: u32,
        height: u32,
        dst: &mut [Pixel],
        byte_order_fix: bool,
    ) -> OpsResult<()> {
        let count = pixrot_core::checked_pixel_count(width, height)?;
        if src.len() != count {
            return Err(OpsError::InvalidDimensions(format!(
                "expected {} pixels for {}x{}, got {}",
                count,
                width,
                height,
                src.len()
            )));
        }
        if dst.len() != count {
            let (out_w, out_h) = self.output_dimensions(width, height);
            return Err(OpsError::SizeMismatch(format!(
                "output for {}x{} needs {} pixels, got {}",
                out_w,
                out_h,
                count,
                dst.len()
            )));
        }

        trace!(width, height, degrees = self.degrees(), byte_order_fix, "rotate_buffer");
        for row in 0..height {
            self.rotate_row(src, width, height, row, dst, byte_order_fix);
        }
        Ok(())
    }
}

impl fmt::Display for RightAngle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}°", self.degrees())
    }
}

/// [`RightAngle`] bound to a source size, for gather-style dispatch.
#[derive(Debug, Clone, Copy)]
pub struct OrthogonalKernel {
    angle: RightAngle,
    width: u32,
    height: u32,
}

impl OrthogonalKernel {
    /// Binds `angle` to a `width × height` source.
    pub fn new(angle: RightAngle, width: u32, height: u32) -> Self {
        Self { angle, width, height }
    }
}

impl RotateKernel for OrthogonalKernel {
    #[inline]
    fn output_dimensions(&self) -> (u32, u32) {
        self.angle.output_dimensions(self.width, self.height)
    }

    #[inline]
    fn source_index(&self, x: u32, y: u32) -> usize {
        self.angle.source_index(x, y, self.width, self.height)
    }
}
