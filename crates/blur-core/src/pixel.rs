//! Packed ARGB pixel helpers.
//!
//! Rasters store each pixel as a single `u32` laid out as `0xAARRGGBB`:
//!
//! ```text
//! bits 31..24  alpha
//! bits 23..16  red
//! bits 15..8   green
//! bits  7..0   blue
//! ```
//!
//! [`Argb`] is the unpacked form, used where individual channels are
//! easier to read than shifts and masks.

/// Alpha bits of a fully opaque pixel.
pub const OPAQUE_ALPHA: u32 = 0xFF00_0000;

/// Unpacked 8-bit ARGB pixel.
///
/// # Example
///
/// ```rust
/// use blur_core::Argb;
///
/// let px = Argb::from_packed(0x80FF_8040);
/// assert_eq!(px.a, 0x80);
/// assert_eq!(px.r, 0xFF);
/// assert_eq!(px.opaque().packed(), 0xFFFF_8040);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Argb {
    /// Alpha channel.
    pub a: u8,
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Argb {
    /// Creates a pixel from its four channels.
    #[inline]
    pub const fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Unpacks a `0xAARRGGBB` value.
    #[inline]
    pub const fn from_packed(px: u32) -> Self {
        Self {
            a: (px >> 24) as u8,
            r: (px >> 16) as u8,
            g: (px >> 8) as u8,
            b: px as u8,
        }
    }

    /// Packs into `0xAARRGGBB`.
    #[inline]
    pub const fn packed(self) -> u32 {
        (self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
    }

    /// Same colour with alpha forced to 0xFF.
    #[inline]
    pub const fn opaque(self) -> Self {
        Self { a: 0xFF, ..self }
    }

    /// Builds a pixel from straight RGBA bytes (PNG order).
    #[inline]
    pub const fn from_rgba([r, g, b, a]: [u8; 4]) -> Self {
        Self { a, r, g, b }
    }

    /// Returns straight RGBA bytes (PNG order).
    #[inline]
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<u32> for Argb {
    #[inline]
    fn from(px: u32) -> Self {
        Self::from_packed(px)
    }
}

impl From<Argb> for u32 {
    #[inline]
    fn from(px: Argb) -> Self {
        px.packed()
    }
}

/// Forces the alpha bits of a packed pixel to 0xFF.
#[inline]
pub const fn with_opaque_alpha(px: u32) -> u32 {
    px | OPAQUE_ALPHA
}
