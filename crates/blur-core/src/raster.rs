//! Packed-pixel raster buffer.
//!
//! A [`Raster`] owns `width * height` packed `0xAARRGGBB` pixels in
//! row-major order with the origin at the top-left:
//!
//! ```text
//! index(x, y) = y * width + x
//! ```
//!
//! The length invariant is checked by every constructor, so code holding a
//! `Raster` never has to re-validate it. Zero-area rasters (either
//! dimension 0) are valid and hold no pixels.
//!
//! # Example
//!
//! ```rust
//! use blur_core::Raster;
//!
//! let mut raster = Raster::new(3, 2).unwrap();
//! raster.set_pixel(2, 1, 0xFF00_FF00);
//! assert_eq!(raster.pixels()[5], 0xFF00_FF00);
//! assert_eq!(raster.row(1), &[0, 0, 0xFF00_FF00]);
//! ```

use crate::error::{Error, Result};

/// Returns `width * height`, or [`Error::DimensionOverflow`].
#[inline]
pub fn pixel_count(width: usize, height: usize) -> Result<usize> {
    width
        .checked_mul(height)
        .ok_or(Error::DimensionOverflow { width, height })
}

/// Owned row-major buffer of packed ARGB pixels.
#[derive(Clone, PartialEq, Eq)]
pub struct Raster {
    pixels: Vec<u32>,
    width: usize,
    height: usize,
}

impl Raster {
    /// Creates a raster of transparent black pixels.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        Self::filled(width, height, 0)
    }

    /// Creates a raster where every pixel is `px`.
    pub fn filled(width: usize, height: usize, px: u32) -> Result<Self> {
        let count = pixel_count(width, height)?;
        Ok(Self {
            pixels: vec![px; count],
            width,
            height,
        })
    }

    /// Wraps an existing pixel buffer.
    ///
    /// # Errors
    ///
    /// [`Error::LengthMismatch`] if `pixels.len() != width * height`,
    /// [`Error::DimensionOverflow`] if the product overflows.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<u32>) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(Error::length_mismatch(width, height, pixels.len()));
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Number of pixels.
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// `true` for zero-area rasters.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Raw pixel slice.
    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Mutable raw pixel slice. The length cannot change through it.
    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Consumes the raster, returning its buffer.
    #[inline]
    pub fn into_pixels(self) -> Vec<u32> {
        self.pixels
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y * self.width + x]
    }

    /// Pixel at `(x, y)`, or `None` when out of bounds.
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> Option<u32> {
        (x < self.width && y < self.height).then(|| self.pixels[y * self.width + x])
    }

    /// Sets the pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, px: u32) {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        self.pixels[y * self.width + x] = px;
    }

    /// Fills every pixel with `px`.
    pub fn fill(&mut self, px: u32) {
        self.pixels.fill(px);
    }

    /// Row `y` as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: usize) -> &[u32] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }

    /// `true` if both rasters have the same width and height.
    #[inline]
    pub fn same_dimensions(&self, other: &Raster) -> bool {
        self.dimensions() == other.dimensions()
    }

    /// Copies `other` into `self`.
    ///
    /// # Errors
    ///
    /// [`Error::DimensionMismatch`] if the sizes differ.
    pub fn copy_from(&mut self, other: &Raster) -> Result<()> {
        if !self.same_dimensions(other) {
            return Err(Error::dimension_mismatch(self.dimensions(), other.dimensions()));
        }
        self.pixels.copy_from_slice(&other.pixels);
        Ok(())
    }
}

impl std::fmt::Debug for Raster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Raster")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish_non_exhaustive()
    }
}
