//! Filter configuration.
//!
//! Set by the caller before each pass. Width and height are not part of the
//! configuration; they are always read from the bound input.
//!
//! ```rust
//! use pixrot_ops::{RightAngle, Rotation, RotateConfig};
//!
//! let config = RotateConfig::default()
//!     .with_rotation(270.0)
//!     .with_byte_order_fix(true);
//! assert_eq!(config.rotation(), Rotation::Orthogonal(RightAngle::R270));
//! ```

use crate::rotate::Rotation;

/// Rotation filter settings.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RotateConfig {
    /// Clockwise rotation in degrees. Any value; right-angle multiples take
    /// the fast path.
    pub rotation_degrees: f32,
    /// Swap red and blue on every pixel written.
    pub byte_order_fix: bool,
}

impl RotateConfig {
    /// Sets the rotation in degrees.
    pub fn with_rotation(mut self, degrees: f32) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    /// Sets the byte-order fix flag.
    pub fn with_byte_order_fix(mut self, fix: bool) -> Self {
        self.byte_order_fix = fix;
        self
    }

    /// Classified rotation for the configured angle.
    pub fn rotation(&self) -> Rotation {
        Rotation::from_degrees(self.rotation_degrees)
    }
}
