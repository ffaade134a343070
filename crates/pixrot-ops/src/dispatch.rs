//! Row dispatch for rotation passes.
//!
//! The output is split into disjoint rows and each row gathers its pixels
//! from the read-only source through a [`RotateKernel`]. Rows never share an
//! output index, so they can run in any order or in parallel.
//!
//! When the `parallel` feature is enabled rows are spread over the rayon
//! pool. Without it, right-angle passes fall back to the sequential
//! source-row scatter of [`RightAngle::rotate_row`].

use crate::cancel::CancelToken;
use crate::rotate::RotateKernel;
use crate::OpsResult;
use pixrot_core::Pixel;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(not(feature = "parallel"))]
use crate::RightAngle;

/// Fills one output row.
#[inline]
fn gather_row<K: RotateKernel + ?Sized>(
    kernel: &K,
    src: &[Pixel],
    y: u32,
    row: &mut [Pixel],
    byte_order_fix: bool,
) {
    for (x, out) in (0u32..).zip(row.iter_mut()) {
        *out = src[kernel.source_index(x, y)].with_byte_order(byte_order_fix);
    }
}

/// Fills `dst` row by row from `src` (parallel).
#[cfg(feature = "parallel")]
pub(crate) fn gather<K: RotateKernel + ?Sized>(
    kernel: &K,
    src: &[Pixel],
    dst: &mut [Pixel],
    byte_order_fix: bool,
    cancel: &CancelToken,
) -> OpsResult<()> {
    let (out_w, _) = kernel.output_dimensions();
    if dst.is_empty() {
        return Ok(());
    }

    dst.par_chunks_mut(out_w as usize)
        .enumerate()
        .try_for_each(|(y, row)| -> OpsResult<()> {
            cancel.check()?;
            gather_row(kernel, src, y as u32, row, byte_order_fix);
            Ok(())
        })
}

/// Fills `dst` row by row from `src` (single-threaded fallback).
#[cfg(not(feature = "parallel"))]
pub(crate) fn gather<K: RotateKernel + ?Sized>(
    kernel: &K,
    src: &[Pixel],
    dst: &mut [Pixel],
    byte_order_fix: bool,
    cancel: &CancelToken,
) -> OpsResult<()> {
    let (out_w, _) = kernel.output_dimensions();
    if dst.is_empty() {
        return Ok(());
    }

    for (y, row) in dst.chunks_mut(out_w as usize).enumerate() {
        cancel.check()?;
        gather_row(kernel, src, y as u32, row, byte_order_fix);
    }
    Ok(())
}

/// Scatters each source row into `dst` (single-threaded).
#[cfg(not(feature = "parallel"))]
pub(crate) fn scatter_rows(
    angle: RightAngle,
    src: &[Pixel],
    width: u32,
    height: u32,
    dst: &mut [Pixel],
    byte_order_fix: bool,
    cancel: &CancelToken,
) -> OpsResult<()> {
    for row in 0..height {
        cancel.check()?;
        angle.rotate_row(src, width, height, row, dst, byte_order_fix);
    }
    Ok(())
}
