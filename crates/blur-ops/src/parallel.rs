//! Parallel box blur using Rayon.
//!
//! Same kernel as [`crate::box_blur`], spread over the rayon pool:
//!
//! - the row pass hands each worker a disjoint output row;
//! - the column pass transposes, blurs the transposed rows, and transposes
//!   back, so workers again write disjoint rows.
//!
//! Every line is blurred by the same routine as the sequential kernel, so
//! the output is bit-identical to it for any thread count.
//!
//! # Example
//!
//! ```rust
//! use blur_ops::parallel;
//!
//! let src = vec![0xFF80_4020u32; 256 * 256];
//! let blurred = parallel::box_blur(&src, 256, 256, 8).unwrap();
//! assert_eq!(blurred, src);
//! ```

use blur_core::{with_opaque_alpha, Raster};
use rayon::prelude::*;
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::box_blur::{blur_line, validate, validate_dst};
use crate::radius::check_radius;
use crate::OpsResult;

/// Parallel box blur returning a new buffer.
///
/// Same contract and errors as [`crate::box_blur::box_blur`].
pub fn box_blur(src: &[u32], width: usize, height: usize, radius: usize) -> OpsResult<Vec<u32>> {
    let count = validate(src.len(), width, height, radius)?;
    let mut dst = vec![0u32; count];
    run_par(src, &mut dst, width, height, radius);
    Ok(dst)
}

/// Parallel box blur into a caller-owned buffer.
///
/// Same contract and errors as [`crate::box_blur::box_blur_into`].
pub fn box_blur_into(
    src: &[u32],
    dst: &mut [u32],
    width: usize,
    height: usize,
    radius: usize,
) -> OpsResult<()> {
    validate(src.len(), width, height, radius)?;
    validate_dst(src.len(), dst.len())?;
    run_par(src, dst, width, height, radius);
    Ok(())
}

/// Parallel in-place blur of a [`Raster`].
pub fn box_blur_in_place(raster: &mut Raster, radius: usize) -> OpsResult<()> {
    check_radius(radius)?;
    if raster.is_empty() {
        return Ok(());
    }
    let (width, height) = raster.dimensions();
    let src = raster.pixels().to_vec();
    run_par(&src, raster.pixels_mut(), width, height, radius);
    Ok(())
}

fn run_par(src: &[u32], dst: &mut [u32], width: usize, height: usize, radius: usize) {
    trace!(width, height, radius, threads = rayon::current_num_threads(), "parallel::box_blur");
    if src.is_empty() {
        return;
    }
    if radius == 0 {
        dst.par_iter_mut()
            .zip(src.par_iter())
            .for_each(|(d, &s)| *d = with_opaque_alpha(s));
        return;
    }
    let mut temp = vec![0u32; src.len()];
    blur_horizontal_par(src, &mut temp, width, radius);
    blur_vertical_par(&temp, dst, width, height, radius);
}

/// Parallel horizontal pass.
fn blur_horizontal_par(src: &[u32], dst: &mut [u32], width: usize, radius: usize) {
    dst.par_chunks_mut(width)
        .zip(src.par_chunks(width))
        .for_each(|(dst_row, src_row)| blur_line(src_row, dst_row, width, 1, radius));
}

/// Parallel vertical pass.
///
/// Uses transpose-blur-transpose so each worker owns whole output rows.
fn blur_vertical_par(src: &[u32], dst: &mut [u32], width: usize, height: usize, radius: usize) {
    let mut transposed = vec![0u32; src.len()];
    transpose_into(src, &mut transposed, width, height);

    let mut blurred = vec![0u32; src.len()];
    blur_horizontal_par(&transposed, &mut blurred, height, radius);

    transpose_into(&blurred, dst, height, width);
}

/// Transposes a `width x height` raster into `dst` (`height x width`).
///
/// Row `x` of `dst` is column `x` of `src`.
fn transpose_into(src: &[u32], dst: &mut [u32], width: usize, height: usize) {
    dst.par_chunks_mut(height)
        .enumerate()
        .for_each(|(x, col)| {
            for (y, px) in col.iter_mut().enumerate() {
                *px = src[y * width + x];
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpsError;

    fn noise(len: usize, seed: u32) -> Vec<u32> {
        let mut state = seed;
        (0..len)
            .map(|_| {
                state = state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
                state
            })
            .collect()
    }

    #[test]
    fn test_parallel_blur_constant() {
        let src = vec![0xFF33_6699u32; 64 * 64];
        let result = box_blur(&src, 64, 64, 5).unwrap();
        assert_eq!(result, src);
    }

    #[test]
    fn test_matches_sequential() {
        for &(w, h) in &[(1, 1), (1, 17), (23, 1), (31, 19), (64, 40)] {
            let src = noise(w * h, (w * 31 + h) as u32);
            for radius in [0, 1, 4, 25] {
                let seq = crate::box_blur::box_blur(&src, w, h, radius).unwrap();
                let par = box_blur(&src, w, h, radius).unwrap();
                assert_eq!(seq, par, "{w}x{h} radius {radius}");
            }
        }
    }

    #[test]
    fn test_transpose() {
        // 3x2 -> 2x3
        let src = [1, 2, 3, 4, 5, 6];
        let mut dst = [0u32; 6];
        transpose_into(&src, &mut dst, 3, 2);
        assert_eq!(dst, [1, 4, 2, 5, 3, 6]);
    }

    #[test]
    fn test_in_place_matches_sequential() {
        let src = noise(20 * 12, 7);
        let expected = crate::box_blur::box_blur(&src, 20, 12, 3).unwrap();
        let mut raster = Raster::from_pixels(20, 12, src).unwrap();
        box_blur_in_place(&mut raster, 3).unwrap();
        assert_eq!(raster.pixels(), expected.as_slice());
    }

    #[test]
    fn test_errors() {
        assert!(matches!(box_blur(&[0; 3], 2, 2, 1), Err(OpsError::SizeMismatch(_))));
        assert!(matches!(
            box_blur(&[0; 4], 2, 2, 99),
            Err(OpsError::RadiusOutOfRange { radius: 99, .. })
        ));
        let mut dst = [0u32; 3];
        assert!(box_blur_into(&[0; 4], &mut dst, 2, 2, 1).is_err());
    }
}
