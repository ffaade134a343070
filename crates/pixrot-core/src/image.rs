//! Flat RGBA image buffer.
//!
//! # Memory Layout
//!
//! Pixels are stored **row-major**, top-to-bottom, one [`Pixel`] per cell:
//!
//! ```text
//! index(x, y) = y * width + x
//!
//! [P(0,0) P(1,0) P(2,0) ...]  ← Row 0
//! [P(0,1) P(1,1) P(2,1) ...]  ← Row 1
//! ```
//!
//! The buffer lives in an [`Arc<Vec<Pixel>>`], so clones are cheap and a
//! mutation through [`Image::pixels_mut`] copies only if the data is shared.
//!
//! # Usage
//!
//! ```rust
//! use pixrot_core::{Image, Pixel};
//!
//! let mut img = Image::new(4, 2);
//! img.set_pixel(3, 1, Pixel::new(255, 0, 0, 255));
//! assert_eq!(img.pixel(3, 1).r(), 255);
//! assert_eq!(img.index(3, 1), 7);
//! ```

use crate::{Error, Pixel, Result};
use std::fmt;
use std::sync::Arc;

/// Row-major linear index of `(x, y)` in a buffer `width` pixels wide.
#[inline]
pub const fn linear_index(x: u32, y: u32, width: u32) -> usize {
    y as usize * width as usize + x as usize
}

/// Returns `width * height`, or an error if the product overflows `usize`.
pub fn checked_pixel_count(width: u32, height: u32) -> Result<usize> {
    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| Error::invalid_dimensions(width, height, "pixel count overflows usize"))
}

/// Owned `width × height` buffer of [`Pixel`]s.
#[derive(Clone, PartialEq, Eq)]
pub struct Image {
    data: Arc<Vec<Pixel>>,
    width: u32,
    height: u32,
}

impl Image {
    /// Creates a transparent black image.
    ///
    /// # Panics
    ///
    /// Panics if `width * height` overflows `usize`.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, Pixel::TRANSPARENT)
    }

    /// Creates an image where every pixel is `pixel`.
    pub fn filled(width: u32, height: u32, pixel: Pixel) -> Self {
        let count = width as usize * height as usize;
        Self {
            data: Arc::new(vec![pixel; count]),
            width,
            height,
        }
    }

    /// Wraps existing pixel data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if `data.len() != width * height`.
    ///
    /// ```rust
    /// use pixrot_core::{Image, Pixel};
    ///
    /// let img = Image::from_pixels(2, 1, vec![Pixel::TRANSPARENT; 2]).unwrap();
    /// assert_eq!(img.dimensions(), (2, 1));
    /// ```
    pub fn from_pixels(width: u32, height: u32, data: Vec<Pixel>) -> Result<Self> {
        let expected = checked_pixel_count(width, height)?;
        if data.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} pixels, got {}", expected, data.len()),
            ));
        }
        Ok(Self {
            data: Arc::new(data),
            width,
            height,
        })
    }

    /// Builds an image from packed 32-bit pixels.
    ///
    /// Each value is split into its little-endian bytes, so an ARGB int
    /// (`0xAARRGGBB`) lands as `[B, G, R, A]`. [`Image::to_packed`] reverses it.
    pub fn from_packed(width: u32, height: u32, packed: &[u32]) -> Result<Self> {
        Self::from_pixels(
            width,
            height,
            packed.iter().copied().map(Pixel::from_packed).collect(),
        )
    }

    /// Builds an image from raw 4-byte-per-pixel data.
    ///
    /// # Errors
    ///
    /// [`Error::UnalignedBytes`] if `bytes.len()` is not a multiple of 4,
    /// [`Error::InvalidDimensions`] if the pixel count is wrong.
    pub fn from_bytes(width: u32, height: u32, bytes: &[u8]) -> Result<Self> {
        let pixels: &[Pixel] =
            bytemuck::try_cast_slice(bytes).map_err(|_| Error::UnalignedBytes {
                len: bytes.len(),
                pixel_size: std::mem::size_of::<Pixel>(),
            })?;
        Self::from_pixels(width, height, pixels.to_vec())
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of pixels.
    #[inline]
    pub fn pixel_count(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the image has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Row-major index of `(x, y)` in this image.
    #[inline]
    pub fn index(&self, x: u32, y: u32) -> usize {
        linear_index(x, y, self.width)
    }

    /// Returns the pixel data.
    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.data
    }

    /// Returns mutable pixel data, copying first if the buffer is shared.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        Arc::make_mut(&mut self.data).as_mut_slice()
    }

    /// Views the pixel data as raw bytes (4 per pixel).
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.data.as_slice())
    }

    /// Packs every pixel into a 32-bit value (inverse of [`Image::from_packed`]).
    pub fn to_packed(&self) -> Vec<u32> {
        self.data.iter().map(|p| p.to_packed()).collect()
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> Pixel {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.data[self.index(x, y)]
    }

    /// Returns the pixel at `(x, y)`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfBounds`] if `(x, y)` is outside the image.
    pub fn get_pixel(&self, x: u32, y: u32) -> Result<Pixel> {
        if x < self.width && y < self.height {
            Ok(self.pixel(x, y))
        } else {
            Err(Error::out_of_bounds(x, y, self.width, self.height))
        }
    }

    /// Sets the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if `(x, y)` is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: u32, y: u32, pixel: Pixel) {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        let idx = self.index(x, y);
        self.pixels_mut()[idx] = pixel;
    }

    /// Returns row `y` as a slice.
    #[inline]
    pub fn row(&self, y: u32) -> &[Pixel] {
        debug_assert!(y < self.height, "row out of bounds");
        let start = y as usize * self.width as usize;
        &self.data[start..start + self.width as usize]
    }

    /// Reshapes the buffer to `width × height`.
    ///
    /// The allocation is kept when the pixel count is unchanged; contents are
    /// unspecified afterwards and must be overwritten by the caller.
    pub fn reshape(&mut self, width: u32, height: u32) -> Result<()> {
        let count = checked_pixel_count(width, height)?;
        if count != self.data.len() {
            self.data = Arc::new(vec![Pixel::TRANSPARENT; count]);
        }
        self.width = width;
        self.height = height;
        Ok(())
    }
}

impl Default for Image {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

impl fmt::Debug for Image {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Image")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient(width: u32, height: u32) -> Image {
        let data = (0..height)
            .flat_map(|y| (0..width).map(move |x| Pixel::new(x as u8, y as u8, 0, 255)))
            .collect();
        Image::from_pixels(width, height, data).unwrap()
    }

    #[test]
    fn test_image_new() {
        let img = Image::new(100, 50);
        assert_eq!(img.dimensions(), (100, 50));
        assert_eq!(img.pixel_count(), 5000);
        assert_eq!(img.pixel(99, 49), Pixel::TRANSPARENT);
    }

    #[test]
    fn test_linear_index() {
        assert_eq!(linear_index(0, 0, 7), 0);
        assert_eq!(linear_index(6, 0, 7), 6);
        assert_eq!(linear_index(0, 1, 7), 7);
        assert_eq!(linear_index(3, 2, 7), 17);
    }

    #[test]
    fn test_row_major_layout() {
        let img = gradient(3, 2);
        assert_eq!(img.pixels()[4], Pixel::new(1, 1, 0, 255));
        assert_eq!(img.row(1)[2], Pixel::new(2, 1, 0, 255));
    }

    #[test]
    fn test_from_pixels_wrong_size() {
        let result = Image::from_pixels(10, 10, vec![Pixel::TRANSPARENT; 99]);
        assert!(matches!(result, Err(Error::InvalidDimensions { .. })));
    }

    #[test]
    fn test_from_bytes() {
        let bytes = [1, 2, 3, 4, 5, 6, 7, 8];
        let img = Image::from_bytes(2, 1, &bytes).unwrap();
        assert_eq!(img.pixel(1, 0), Pixel::new(5, 6, 7, 8));
        assert_eq!(img.as_bytes(), &bytes);
    }

    #[test]
    fn test_from_bytes_unaligned() {
        let result = Image::from_bytes(1, 1, &[1, 2, 3]);
        assert!(matches!(result, Err(Error::UnalignedBytes { len: 3, .. })));
    }

    #[test]
    fn test_packed_round_trip() {
        let packed = [0xFF00_00FFu32, 0x8012_3456];
        let img = Image::from_packed(1, 2, &packed).unwrap();
        assert_eq!(img.to_packed(), packed);
    }

    #[test]
    fn test_get_pixel_out_of_bounds() {
        let img = Image::new(4, 4);
        assert!(img.get_pixel(3, 3).is_ok());
        assert!(img.get_pixel(4, 0).unwrap_err().is_bounds_error());
    }

    #[test]
    fn test_reshape_keeps_allocation() {
        let mut img = Image::new(4, 2);
        let before = img.pixels().as_ptr();
        img.reshape(2, 4).unwrap();
        assert_eq!(img.dimensions(), (2, 4));
        assert_eq!(img.pixels().as_ptr(), before);

        img.reshape(3, 3).unwrap();
        assert_eq!(img.pixel_count(), 9);
    }

    #[test]
    fn test_clone_cow() {
        let a = Image::filled(2, 2, Pixel::new(1, 1, 1, 1));
        let mut b = a.clone();
        b.set_pixel(0, 0, Pixel::new(9, 9, 9, 9));
        assert_eq!(a.pixel(0, 0), Pixel::new(1, 1, 1, 1));
        assert_eq!(b.pixel(0, 0), Pixel::new(9, 9, 9, 9));
    }
}
