//! Stateful rotation filter.
//!
//! [`RotateFilter`] holds the configuration, the bound input and a reusable
//! output buffer. The caller sets what it needs, then runs one full pass with
//! [`RotateFilter::filter`]. The output allocation survives between passes and
//! is only replaced when the input size or rotation changes the pixel count.
//!
//! # Example
//!
//! ```rust
//! use pixrot_core::{Image, Pixel};
//! use pixrot_ops::RotateFilter;
//!
//! let mut filter = RotateFilter::new();
//! filter.set_rotation(90.0);
//! filter.set_input(Image::filled(4, 2, Pixel::new(0, 0, 255, 255)));
//!
//! let out = filter.filter().unwrap();
//! assert_eq!(out.dimensions(), (2, 4));
//! ```
//!
//! Frame sources that deliver packed ints or raw bytes can use
//! [`refresh_packed`](RotateFilter::refresh_packed) (channels untouched) and
//! [`refresh_bytes`](RotateFilter::refresh_bytes) (red/blue swapped).

use crate::cancel::CancelToken;
use crate::config::RotateConfig;
use crate::rotate::{rotate_into, Rotation};
use crate::{OpsError, OpsResult};
use pixrot_core::Image;
use tracing::debug;

/// Geometry the current output buffer was prepared for.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Prepared {
    width: u32,
    height: u32,
    rotation: Rotation,
}

/// Rotation filter with reusable output.
#[derive(Debug, Default)]
pub struct RotateFilter {
    config: RotateConfig,
    input: Option<Image>,
    output: Image,
    prepared: Option<Prepared>,
    cancel: CancelToken,
}

impl RotateFilter {
    /// Creates a filter with no rotation and no byte-order fix.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a filter with the given configuration.
    pub fn with_config(config: RotateConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &RotateConfig {
        &self.config
    }

    /// Replaces the configuration.
    pub fn set_config(&mut self, config: RotateConfig) {
        self.config = config;
    }

    /// Sets the clockwise rotation in degrees.
    pub fn set_rotation(&mut self, degrees: f32) {
        self.config.rotation_degrees = degrees;
    }

    /// Enables or disables the red/blue swap.
    pub fn set_byte_order_fix(&mut self, fix: bool) {
        self.config.byte_order_fix = fix;
    }

    /// Binds the input image for the next pass.
    pub fn set_input(&mut self, image: Image) {
        self.input = Some(image);
    }

    /// Currently bound input, if any.
    pub fn input(&self) -> Option<&Image> {
        self.input.as_ref()
    }

    /// Output of the last pass. Only valid after a successful [`filter`](Self::filter).
    pub fn output(&self) -> &Image {
        &self.output
    }

    /// Consumes the filter and returns the output buffer.
    pub fn into_output(self) -> Image {
        self.output
    }

    /// Token that cancels passes of this filter; clone it to another thread.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Sizes the output buffer for a `width × height` input under the current
    /// rotation. Returns the output dimensions.
    pub fn prepare(&mut self, width: u32, height: u32) -> OpsResult<(u32, u32)> {
        let rotation = self.config.rotation();
        let wanted = Prepared {
            width,
            height,
            rotation,
        };
        let (out_w, out_h) = rotation.output_dimensions(width, height);

        if self.prepared != Some(wanted) {
            debug!(width, height, out_w, out_h, %rotation, "Preparing output buffer");
            self.output.reshape(out_w, out_h)?;
            self.prepared = Some(wanted);
        }
        Ok((out_w, out_h))
    }

    /// Runs one full rotation pass over the bound input.
    ///
    /// # Errors
    ///
    /// - [`OpsError::MissingInput`] if no input was bound
    /// - [`OpsError::Cancelled`] if the cancel token tripped mid-pass
    pub fn filter(&mut self) -> OpsResult<&Image> {
        let (width, height) = self
            .input
            .as_ref()
            .map(Image::dimensions)
            .ok_or(OpsError::MissingInput)?;
        self.prepare(width, height)?;

        let rotation = self.config.rotation();
        let input = self.input.as_ref().ok_or(OpsError::MissingInput)?;
        let result = rotate_into(
            input,
            rotation,
            self.config.byte_order_fix,
            &mut self.output,
            &self.cancel,
        );
        if result.is_err() {
            // Contents are partial; force the next pass to re-prepare.
            self.prepared = None;
        }
        result?;
        Ok(&self.output)
    }

    /// Rotates packed 32-bit pixels without touching channel order.
    ///
    /// Returns the rotated pixels in the same packed form; the output size is
    /// [`Rotation::output_dimensions`] of the configured angle.
    pub fn refresh_packed(
        &mut self,
        packed: &[u32],
        width: u32,
        height: u32,
        degrees: f32,
    ) -> OpsResult<Vec<u32>> {
        self.set_input(Image::from_packed(width, height, packed)?);
        self.set_rotation(degrees);
        self.set_byte_order_fix(false);
        Ok(self.filter()?.to_packed())
    }

    /// Rotates raw 4-byte pixels, swapping red and blue on the way.
    pub fn refresh_bytes(
        &mut self,
        bytes: &[u8],
        width: u32,
        height: u32,
        degrees: f32,
    ) -> OpsResult<&Image> {
        self.set_input(Image::from_bytes(width, height, bytes)?);
        self.set_rotation(degrees);
        self.set_byte_order_fix(true);
        self.filter()
    }
}
