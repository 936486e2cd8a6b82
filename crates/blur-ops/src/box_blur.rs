//! Separable sliding-window box blur for packed ARGB rasters.
//!
//! The blur runs as two 1D passes: rows first into a scratch buffer, then
//! columns from the scratch buffer into the destination. Each pass keeps a
//! running per-channel sum over a `2 * radius + 1` window. The sum is
//! updated by one add and one subtract per pixel, so the cost per pass is
//! `O(width * height)` whatever the radius.
//!
//! # Semantics
//!
//! - Samples outside the line clamp to the nearest edge pixel.
//! - Each output channel is `sum / (2 * radius + 1)` with integer division.
//!   The result truncates, which darkens high-contrast edges by up to one
//!   level per channel.
//! - Output alpha is always `0xFF`; input alpha is ignored.
//! - Radius 0 copies the input with alpha forced.
//!
//! # Example
//!
//! ```rust
//! use blur_ops::box_blur::box_blur;
//!
//! let red = vec![0xFFFF_0000u32; 4 * 4];
//! let out = box_blur(&red, 4, 4, 1).unwrap();
//! assert_eq!(out, red);
//! ```

use blur_core::{pixel_count, with_opaque_alpha, Raster, OPAQUE_ALPHA};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::radius::check_radius;
use crate::{OpsError, OpsResult};

/// Running channel sums for one window.
///
/// Each sum is at most `51 * 255`, well inside `u32`.
#[derive(Debug, Default, Clone, Copy)]
struct WindowSum {
    r: u32,
    g: u32,
    b: u32,
}

impl WindowSum {
    #[inline(always)]
    fn add(&mut self, px: u32) {
        self.r += (px >> 16) & 0xFF;
        self.g += (px >> 8) & 0xFF;
        self.b += px & 0xFF;
    }

    #[inline(always)]
    fn sub(&mut self, px: u32) {
        self.r -= (px >> 16) & 0xFF;
        self.g -= (px >> 8) & 0xFF;
        self.b -= px & 0xFF;
    }

    #[inline(always)]
    fn average(&self, div: u32) -> u32 {
        OPAQUE_ALPHA | (self.r / div) << 16 | (self.g / div) << 8 | self.b / div
    }
}

/// Blurs one line of `len` pixels spaced `stride` apart.
///
/// `src[i * stride]` and `dst[i * stride]` address element `i` of the line.
/// Rows use `stride == 1`; columns use `stride == width`.
pub(crate) fn blur_line(src: &[u32], dst: &mut [u32], len: usize, stride: usize, radius: usize) {
    if len == 0 {
        return;
    }
    let last = len - 1;
    let at = |i: usize| src[i.min(last) * stride];

    // Window [-radius, radius] around element 0; negative indices clamp to 0.
    let mut sum = WindowSum::default();
    for _ in 0..radius {
        sum.add(at(0));
    }
    for i in 0..=radius {
        sum.add(at(i));
    }

    let div = (2 * radius + 1) as u32;
    for x in 0..len {
        dst[x * stride] = sum.average(div);
        // Add before subtract: the outgoing sample is always inside the
        // current window, so the sums never underflow.
        sum.add(at(x + radius + 1));
        sum.sub(at(x.saturating_sub(radius)));
    }
}

/// Horizontal pass: every row of `src` into the same row of `dst`.
pub(crate) fn blur_horizontal(src: &[u32], dst: &mut [u32], width: usize, radius: usize) {
    for (src_row, dst_row) in src.chunks_exact(width).zip(dst.chunks_exact_mut(width)) {
        blur_line(src_row, dst_row, width, 1, radius);
    }
}

/// Vertical pass: every column of `src` into the same column of `dst`.
pub(crate) fn blur_vertical(
    src: &[u32],
    dst: &mut [u32],
    width: usize,
    height: usize,
    radius: usize,
) {
    for x in 0..width {
        blur_line(&src[x..], &mut dst[x..], height, width, radius);
    }
}

/// Radius 0: copy with alpha forced.
pub(crate) fn copy_opaque(src: &[u32], dst: &mut [u32]) {
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = with_opaque_alpha(s);
    }
}

/// Checks the kernel contract and returns the pixel count.
pub(crate) fn validate(len: usize, width: usize, height: usize, radius: usize) -> OpsResult<usize> {
    check_radius(radius)?;
    let expected = pixel_count(width, height)
        .map_err(|_| OpsError::InvalidDimensions(format!("{width}x{height} overflows")))?;
    if len != expected {
        return Err(OpsError::SizeMismatch(format!(
            "{width}x{height} raster needs {expected} pixels, got {len}"
        )));
    }
    Ok(expected)
}

/// Checks that a destination buffer matches the source.
pub(crate) fn validate_dst(src_len: usize, dst_len: usize) -> OpsResult<()> {
    if src_len != dst_len {
        return Err(OpsError::SizeMismatch(format!(
            "destination holds {dst_len} pixels, source {src_len}"
        )));
    }
    Ok(())
}

/// Blurs `src` and returns a new buffer of the same size.
///
/// # Arguments
///
/// * `src` - Packed `0xAARRGGBB` pixels, row-major
/// * `width` - Raster width
/// * `height` - Raster height
/// * `radius` - Window half-width, `0..=25`
///
/// # Errors
///
/// - [`OpsError::SizeMismatch`] if `src.len() != width * height`
/// - [`OpsError::InvalidDimensions`] if `width * height` overflows
/// - [`OpsError::RadiusOutOfRange`] if `radius > 25`
///
/// # Example
///
/// ```rust
/// use blur_ops::box_blur::box_blur;
///
/// let row = vec![0xFF00_0000, 0xFF00_0000, 0xFF00_0064];
/// assert_eq!(box_blur(&row, 3, 1, 1).unwrap(), vec![0xFF00_0000, 0xFF00_0021, 0xFF00_0042]);
/// ```
pub fn box_blur(src: &[u32], width: usize, height: usize, radius: usize) -> OpsResult<Vec<u32>> {
    let count = validate(src.len(), width, height, radius)?;
    let mut dst = vec![0u32; count];
    run(src, &mut dst, width, height, radius);
    Ok(dst)
}

/// Blurs `src` into a caller-owned `dst`.
///
/// `dst` is only written once every check has passed. The intermediate
/// row-pass result lives in a scratch buffer, never in `dst`.
///
/// # Errors
///
/// As [`box_blur`], plus [`OpsError::SizeMismatch`] if
/// `dst.len() != src.len()`.
pub fn box_blur_into(
    src: &[u32],
    dst: &mut [u32],
    width: usize,
    height: usize,
    radius: usize,
) -> OpsResult<()> {
    validate(src.len(), width, height, radius)?;
    validate_dst(src.len(), dst.len())?;
    run(src, dst, width, height, radius);
    Ok(())
}

/// Blurs a [`Raster`] into a new raster of the same size.
pub fn box_blur_raster(src: &Raster, radius: usize) -> OpsResult<Raster> {
    let (width, height) = src.dimensions();
    let pixels = box_blur(src.pixels(), width, height, radius)?;
    Ok(Raster::from_pixels(width, height, pixels)?)
}

/// Blurs a [`Raster`], writing the final pass back into it.
///
/// The row pass reads the raster into a scratch buffer before the column
/// pass overwrites it, so no pixel is read after it was rewritten.
pub fn box_blur_in_place(raster: &mut Raster, radius: usize) -> OpsResult<()> {
    check_radius(radius)?;
    let (width, height) = raster.dimensions();
    trace!(width, height, radius, "box_blur_in_place");
    if raster.is_empty() {
        return Ok(());
    }
    if radius == 0 {
        raster.pixels_mut().iter_mut().for_each(|p| *p = with_opaque_alpha(*p));
        return Ok(());
    }
    let mut temp = vec![0u32; raster.len()];
    blur_horizontal(raster.pixels(), &mut temp, width, radius);
    blur_vertical(&temp, raster.pixels_mut(), width, height, radius);
    Ok(())
}

/// Runs both passes on validated buffers.
fn run(src: &[u32], dst: &mut [u32], width: usize, height: usize, radius: usize) {
    trace!(width, height, radius, "box_blur");
    if src.is_empty() {
        return;
    }
    if radius == 0 {
        copy_opaque(src, dst);
        return;
    }
    let mut temp = vec![0u32; src.len()];
    blur_horizontal(src, &mut temp, width, radius);
    blur_vertical(&temp, dst, width, height, radius);
}
