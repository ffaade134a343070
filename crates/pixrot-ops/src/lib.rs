//! # pixrot-ops
//!
//! Rotation filter for RGBA pixel buffers.
//!
//! Two strategies sit behind one entry point:
//!
//! - [`orthogonal`] - 0/90/180/270° by closed-form index remapping, one
//!   source row per unit of work, no resampling
//! - [`affine`] - any other angle by backward mapping through a center
//!   rotation, edge clamping and nearest-neighbor sampling
//!
//! [`rotate`] picks the strategy from the angle, sizes the output (width and
//! height swap for 90/270) and applies the optional red/blue swap.
//! [`RotateFilter`] wraps that in a stateful, allocation-reusing driver.
//!
//! # Example
//!
//! ```rust
//! use pixrot_core::{Image, Pixel};
//! use pixrot_ops::{rotate, Rotation};
//!
//! let [a, b, c, d] = [1, 2, 3, 4].map(|v| Pixel::new(v, 0, 0, 255));
//! let img = Image::from_pixels(2, 2, vec![a, b, c, d]).unwrap();
//!
//! let out = rotate(&img, Rotation::from(90), false).unwrap();
//! assert_eq!(out.pixels(), &[c, a, d, b]);
//! ```
//!
//! # Feature Flags
//!
//! - `parallel` (default) - spread rows over the rayon thread pool
//! - `serde` - derive `Serialize`/`Deserialize` for [`RotateConfig`]

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod cancel;
mod config;
mod dispatch;
mod error;
mod filter;
pub mod affine;
pub mod orthogonal;
pub mod rotate;

pub use affine::AffineSampler;
pub use cancel::CancelToken;
pub use config::RotateConfig;
pub use error::{OpsError, OpsResult};
pub use filter::RotateFilter;
pub use orthogonal::{OrthogonalKernel, RightAngle};
pub use rotate::{rotate, rotate_into, RotateKernel, Rotation};
