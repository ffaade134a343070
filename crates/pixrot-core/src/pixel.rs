//! Packed 8-bit RGBA pixel.
//!
//! A [`Pixel`] is four 8-bit channels stored together. The channel order is
//! nominally `[R, G, B, A]`, but nothing in the rotation path depends on it
//! except the optional red/blue swap.
//!
//! # Float View
//!
//! Transform math may view a pixel as four normalized floats:
//!
//! ```text
//! unpack: c / 255.0
//! pack:   round(clamp(v, 0.0, 1.0) * 255.0)
//! ```
//!
//! Packing an unpacked pixel always returns the original bytes.
//!
//! # Memory Layout
//!
//! `#[repr(transparent)]` over `[u8; 4]`, so a `&[Pixel]` can be viewed as
//! `&[u8]` (and back) with [`bytemuck`] at zero cost.
//!
//! ```
//! use pixrot_core::Pixel;
//!
//! let px = Pixel::new(255, 128, 0, 255);
//! let unit = px.to_unit();
//! assert_eq!(Pixel::from_unit(unit), px);
//! assert_eq!(px.swap_red_blue(), Pixel::new(0, 128, 255, 255));
//! ```

use bytemuck::{Pod, Zeroable};
use std::fmt;

/// Maximum 8-bit channel value as a float.
pub const CHANNEL_MAX: f32 = 255.0;

/// Index of the red channel.
pub const RED: usize = 0;
/// Index of the green channel.
pub const GREEN: usize = 1;
/// Index of the blue channel.
pub const BLUE: usize = 2;
/// Index of the alpha channel.
pub const ALPHA: usize = 3;

/// Converts an 8-bit channel to a normalized float in `[0.0, 1.0]`.
#[inline]
pub fn unit_from_u8(v: u8) -> f32 {
    v as f32 / CHANNEL_MAX
}

/// Converts a normalized float to an 8-bit channel.
///
/// Clamps to `[0.0, 1.0]` and rounds to nearest. NaN packs to 0.
#[inline]
pub fn u8_from_unit(v: f32) -> u8 {
    (v.clamp(0.0, 1.0) * CHANNEL_MAX).round() as u8
}

/// Four 8-bit channels packed into one unit.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct Pixel(pub [u8; 4]);

impl Pixel {
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self([0, 0, 0, 0]);

    /// Creates a pixel from its four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self([r, g, b, a])
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        self.0[RED]
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        self.0[GREEN]
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        self.0[BLUE]
    }

    /// Alpha channel.
    #[inline]
    pub const fn a(self) -> u8 {
        self.0[ALPHA]
    }

    /// Unpacks to four normalized floats.
    #[inline]
    pub fn to_unit(self) -> [f32; 4] {
        self.0.map(unit_from_u8)
    }

    /// Packs four normalized floats, clamping and rounding each channel.
    #[inline]
    pub fn from_unit(v: [f32; 4]) -> Self {
        Self(v.map(u8_from_unit))
    }

    /// Swaps the red and blue channels. Green and alpha are untouched.
    #[inline]
    pub const fn swap_red_blue(self) -> Self {
        let [r, g, b, a] = self.0;
        Self([b, g, r, a])
    }

    /// Applies the byte-order fix when `fix` is set, otherwise returns `self`.
    #[inline]
    pub const fn with_byte_order(self, fix: bool) -> Self {
        if fix { self.swap_red_blue() } else { self }
    }

    /// Reinterprets a packed 32-bit value using its little-endian bytes.
    #[inline]
    pub const fn from_packed(v: u32) -> Self {
        Self(v.to_le_bytes())
    }

    /// Packs into a 32-bit value using little-endian byte order.
    #[inline]
    pub const fn to_packed(self) -> u32 {
        u32::from_le_bytes(self.0)
    }
}

impl From<[u8; 4]> for Pixel {
    #[inline]
    fn from(v: [u8; 4]) -> Self {
        Self(v)
    }
}

impl From<Pixel> for [u8; 4] {
    #[inline]
    fn from(p: Pixel) -> Self {
        p.0
    }
}

impl fmt::Debug for Pixel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "Pixel({r}, {g}, {b}, {a})")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unpack_range() {
        let unit = Pixel::new(0, 51, 255, 128).to_unit();
        assert_relative_eq!(unit[0], 0.0);
        assert_relative_eq!(unit[1], 0.2);
        assert_relative_eq!(unit[2], 1.0);
        assert_relative_eq!(unit[3], 128.0 / 255.0);
    }

    #[test]
    fn test_pack_clamps() {
        let px = Pixel::from_unit([-0.5, 1.5, 0.5, f32::NAN]);
        assert_eq!(px, Pixel::new(0, 255, 128, 0));
    }

    #[test]
    fn test_unit_round_trip_all_values() {
        for v in 0..=255u8 {
            assert_eq!(u8_from_unit(unit_from_u8(v)), v);
        }
    }

    #[test]
    fn test_swap_red_blue() {
        let px = Pixel::new(10, 20, 30, 40);
        let swapped = px.swap_red_blue();
        assert_eq!(swapped, Pixel::new(30, 20, 10, 40));
        assert_eq!(swapped.swap_red_blue(), px);
    }

    #[test]
    fn test_swap_matches_float_path() {
        // Swapping through the float view must give the same bytes.
        let px = Pixel::new(1, 127, 254, 200);
        let mut unit = px.to_unit();
        unit.swap(RED, BLUE);
        assert_eq!(Pixel::from_unit(unit), px.swap_red_blue());
    }

    #[test]
    fn test_with_byte_order() {
        let px = Pixel::new(1, 2, 3, 4);
        assert_eq!(px.with_byte_order(false), px);
        assert_eq!(px.with_byte_order(true), Pixel::new(3, 2, 1, 4));
    }

    #[test]
    fn test_packed_little_endian() {
        // 0xAARRGGBB in memory is [BB, GG, RR, AA].
        let px = Pixel::from_packed(0xFF11_2233);
        assert_eq!(px, Pixel::new(0x33, 0x22, 0x11, 0xFF));
        assert_eq!(px.to_packed(), 0xFF11_2233);
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Pixel::new(1, 2, 3, 4)), "Pixel(1, 2, 3, 4)");
    }
}
