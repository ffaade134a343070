//! # pixrot-core
//!
//! Core types for pixel-buffer rotation.
//!
//! - [`Pixel`] - four 8-bit channels with a normalized float view
//! - [`Image`] - row-major `width × height` pixel buffer
//! - [`linear_index`] - `(x, y)` to flat buffer index
//! - [`Error`] - buffer construction errors
//!
//! ## Crate Structure
//!
//! ```text
//! pixrot-core (this crate)
//!    ^
//!    |
//!    +-- pixrot-math (angles, affine transform)
//!    +-- pixrot-ops  (rotation kernels, filter driver)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod image;
pub mod pixel;

pub use error::{Error, Result};
pub use image::{checked_pixel_count, linear_index, Image};
pub use pixel::Pixel;
