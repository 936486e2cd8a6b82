//! Blur strength to kernel radius mapping.
//!
//! The blur layer exposes a continuous "strength" (conceptually 1-100) to
//! its users. The box blur kernel wants a small integer half-width. The
//! mapping is:
//!
//! ```text
//! radius = clamp(round(strength * 0.25), 0, 25)
//! ```
//!
//! Any `f32` is accepted. Negative strength, NaN and `-inf` map to 0;
//! anything at or beyond the cap saturates at [`MAX_RADIUS`].
//!
//! # Example
//!
//! ```rust
//! use blur_ops::radius::{radius_for_strength, MAX_RADIUS};
//!
//! assert_eq!(radius_for_strength(1.0), 0);
//! assert_eq!(radius_for_strength(40.0), 10);
//! assert_eq!(radius_for_strength(1000.0), MAX_RADIUS);
//! ```

use crate::{OpsError, OpsResult};

/// Largest radius the box blur kernel accepts (a 51 px window).
pub const MAX_RADIUS: usize = 25;

/// Default strength-to-radius scale factor.
pub const STRENGTH_SCALE: f32 = 0.25;

/// Converts blur strength into a kernel radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadiusMapper {
    scale: f32,
    max_radius: usize,
}

impl Default for RadiusMapper {
    fn default() -> Self {
        Self {
            scale: STRENGTH_SCALE,
            max_radius: MAX_RADIUS,
        }
    }
}

impl RadiusMapper {
    /// Creates a mapper with a custom scale and cap.
    ///
    /// # Errors
    ///
    /// [`OpsError::InvalidParameter`] if `scale` is negative or not finite,
    /// [`OpsError::RadiusOutOfRange`] if `max_radius` exceeds [`MAX_RADIUS`].
    pub fn new(scale: f32, max_radius: usize) -> OpsResult<Self> {
        if !scale.is_finite() || scale < 0.0 {
            return Err(OpsError::InvalidParameter(format!(
                "strength scale must be finite and >= 0, got {scale}"
            )));
        }
        check_radius(max_radius)?;
        Ok(Self { scale, max_radius })
    }

    /// Scale applied to strength before rounding.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Upper bound of [`map`](Self::map).
    #[inline]
    pub fn max_radius(&self) -> usize {
        self.max_radius
    }

    /// Maps strength to a radius in `[0, max_radius]`.
    pub fn map(&self, strength: f32) -> usize {
        let scaled = (strength * self.scale).round();
        if scaled.is_nan() || scaled <= 0.0 {
            0
        } else if scaled >= self.max_radius as f32 {
            self.max_radius
        } else {
            scaled as usize
        }
    }

    /// Unclamped blur radius handed to a hardware blur effect.
    ///
    /// Platform blur effects take a float radius and do their own bounding,
    /// so only the scale is applied. Non-finite or negative results become 0.
    pub fn hardware_radius(&self, strength: f32) -> f32 {
        let scaled = strength * self.scale;
        if scaled.is_finite() && scaled > 0.0 { scaled } else { 0.0 }
    }
}

/// Maps strength to a radius with the default scale and cap.
#[inline]
pub fn radius_for_strength(strength: f32) -> usize {
    RadiusMapper::default().map(strength)
}

/// Rejects radii the kernel does not support.
#[inline]
pub fn check_radius(radius: usize) -> OpsResult<()> {
    if radius > MAX_RADIUS {
        return Err(OpsError::RadiusOutOfRange {
            radius,
            max: MAX_RADIUS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_strengths() {
        assert_eq!(radius_for_strength(1.0), 0);
        assert_eq!(radius_for_strength(100.0), 25);
        assert_eq!(radius_for_strength(-5.0), 0);
        assert_eq!(radius_for_strength(1000.0), 25);
    }

    #[test]
    fn test_rounding() {
        // 0.25 * 2 = 0.5 rounds away from zero
        assert_eq!(radius_for_strength(2.0), 1);
        assert_eq!(radius_for_strength(5.0), 1);
        assert_eq!(radius_for_strength(6.0), 2);
        assert_eq!(radius_for_strength(50.0), 13);
        assert_eq!(radius_for_strength(0.0), 0);
    }

    #[test]
    fn test_non_finite_strength() {
        assert_eq!(radius_for_strength(f32::NAN), 0);
        assert_eq!(radius_for_strength(f32::INFINITY), 25);
        assert_eq!(radius_for_strength(f32::NEG_INFINITY), 0);
    }

    #[test]
    fn test_monotonic() {
        let mut prev = 0;
        for s in 0..=120 {
            let r = radius_for_strength(s as f32);
            assert!(r >= prev);
            assert!(r <= MAX_RADIUS);
            prev = r;
        }
    }

    #[test]
    fn test_custom_mapper() {
        let m = RadiusMapper::new(0.5, 10).unwrap();
        assert_eq!(m.map(4.0), 2);
        assert_eq!(m.map(100.0), 10);
        assert_eq!(m.max_radius(), 10);
    }

    #[test]
    fn test_invalid_mapper() {
        assert!(matches!(
            RadiusMapper::new(f32::NAN, 10),
            Err(OpsError::InvalidParameter(_))
        ));
        assert!(matches!(
            RadiusMapper::new(-1.0, 10),
            Err(OpsError::InvalidParameter(_))
        ));
        assert_eq!(
            RadiusMapper::new(0.25, 26),
            Err(OpsError::RadiusOutOfRange { radius: 26, max: 25 })
        );
    }

    #[test]
    fn test_hardware_radius() {
        let m = RadiusMapper::default();
        assert_eq!(m.hardware_radius(50.0), 12.5);
        assert_eq!(m.hardware_radius(1000.0), 250.0);
        assert_eq!(m.hardware_radius(-8.0), 0.0);
        assert_eq!(m.hardware_radius(f32::NAN), 0.0);
    }

    #[test]
    fn test_check_radius() {
        assert!(check_radius(0).is_ok());
        assert!(check_radius(MAX_RADIUS).is_ok());
        assert!(check_radius(MAX_RADIUS + 1).is_err());
    }
}
