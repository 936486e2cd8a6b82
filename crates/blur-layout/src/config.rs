//! Blur layer configuration.
//!
//! Loaded from YAML; every key is optional and falls back to its default:
//!
//! ```yaml
//! frame_rate: 60        # redraw ticks per second, 1..=1000
//! strength: 50.0        # initial blur strength
//! strength_scale: 0.25  # strength -> radius factor
//! max_radius: 25        # radius cap, at most 25
//! path: auto            # auto | software | hardware
//! parallel: true        # rayon kernel on the software path
//! ```

use std::path::Path;
use std::time::Duration;

use blur_ops::radius::{RadiusMapper, MAX_RADIUS, STRENGTH_SCALE};
use serde::{Deserialize, Serialize};

use crate::path::PathPreference;
use crate::{LayoutError, LayoutResult};

/// Default redraw rate while the blur is active.
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Highest frame rate with a non-zero whole-millisecond tick delay.
pub const MAX_FRAME_RATE: u32 = 1000;

/// Default blur strength.
pub const DEFAULT_STRENGTH: f32 = 50.0;

/// Blur layer settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LayoutConfig {
    /// Redraw ticks per second while active, `1..=1000`.
    pub frame_rate: u32,
    /// Initial blur strength.
    pub strength: f32,
    /// Strength to radius factor.
    pub strength_scale: f32,
    /// Radius cap, at most [`MAX_RADIUS`].
    pub max_radius: usize,
    /// Path preference.
    pub path: PathPreference,
    /// Use the rayon kernel on the software path.
    pub parallel: bool,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            strength: DEFAULT_STRENGTH,
            strength_scale: STRENGTH_SCALE,
            max_radius: MAX_RADIUS,
            path: PathPreference::Auto,
            parallel: true,
        }
    }
}

impl LayoutConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml_str(text: &str) -> LayoutResult<Self> {
        let config: Self = serde_yaml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a YAML file.
    pub fn load(path: impl AsRef<Path>) -> LayoutResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_yaml_str(&text)
    }

    /// Serializes to YAML.
    pub fn to_yaml_string(&self) -> LayoutResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> LayoutResult<()> {
        if self.frame_rate == 0 || self.frame_rate > MAX_FRAME_RATE {
            return Err(LayoutError::InvalidConfig(format!(
                "frame_rate must be in 1..={MAX_FRAME_RATE}, got {}",
                self.frame_rate
            )));
        }
        self.mapper()?;
        Ok(())
    }

    /// Radius mapper for these settings.
    pub fn mapper(&self) -> LayoutResult<RadiusMapper> {
        RadiusMapper::new(self.strength_scale, self.max_radius)
            .map_err(|e| LayoutError::InvalidConfig(e.to_string()))
    }

    /// Delay between redraw ticks: `1000 / frame_rate` whole milliseconds,
    /// never less than 1 ms.
    pub fn frame_delay(&self) -> Duration {
        Duration::from_millis((1000 / u64::from(self.frame_rate.max(1))).max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LayoutConfig::default();
        assert_eq!(config.frame_rate, 60);
        assert_eq!(config.strength, 50.0);
        assert_eq!(config.path, PathPreference::Auto);
        assert!(config.validate().is_ok());
        assert_eq!(config.frame_delay(), Duration::from_millis(16));
    }

    #[test]
    fn test_partial_yaml() {
        let config = LayoutConfig::from_yaml_str("frame_rate: 30\npath: software\n").unwrap();
        assert_eq!(config.frame_rate, 30);
        assert_eq!(config.path, PathPreference::Software);
        assert_eq!(config.max_radius, 25);
        assert_eq!(config.frame_delay(), Duration::from_millis(33));
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(LayoutConfig::from_yaml_str("{}").unwrap(), LayoutConfig::default());
    }

    #[test]
    fn test_rejects_zero_frame_rate() {
        let err = LayoutConfig::from_yaml_str("frame_rate: 0").unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_excessive_frame_rate() {
        let err = LayoutConfig::from_yaml_str("frame_rate: 5000").unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfig(_)));

        let max = LayoutConfig::from_yaml_str("frame_rate: 1000").unwrap();
        assert_eq!(max.frame_delay(), Duration::from_millis(1));

        let unchecked = LayoutConfig {
            frame_rate: 5000,
            ..LayoutConfig::default()
        };
        assert_eq!(unchecked.frame_delay(), Duration::from_millis(1));
    }

    #[test]
    fn test_rejects_large_radius() {
        let err = LayoutConfig::from_yaml_str("max_radius: 40").unwrap_err();
        assert!(matches!(err, LayoutError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_unknown_key() {
        let err = LayoutConfig::from_yaml_str("blur_radius: 3").unwrap_err();
        assert!(matches!(err, LayoutError::Parse(_)));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let config = LayoutConfig {
            strength: 80.0,
            parallel: false,
            ..LayoutConfig::default()
        };
        let text = config.to_yaml_string().unwrap();
        assert_eq!(LayoutConfig::from_yaml_str(&text).unwrap(), config);
    }
}
