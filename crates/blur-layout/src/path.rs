//! Blur path detection and selection.
//!
//! A blur layer can be drawn two ways:
//!
//! - [`BlurPath::Hardware`] - the platform compositor blurs the layer
//!   itself. The host only receives a [`HardwareEffect`] describing it.
//! - [`BlurPath::Software`] - content is captured into an offscreen raster
//!   and run through the box blur kernel.
//!
//! The path is chosen once, when the layer is created, from the platform
//! [`Capabilities`] and the configured [`PathPreference`].

use std::fmt::Write;

use serde::{Deserialize, Serialize};
#[allow(unused_imports)]
use tracing::{debug, warn};

/// Lowest platform API level with a compositor blur effect.
pub const HARDWARE_BLUR_MIN_API: u32 = 31;

/// How the blur is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlurPath {
    /// Box blur kernel on captured rasters.
    Software,
    /// Platform compositor effect.
    Hardware,
}

impl BlurPath {
    /// Check if this path can run with the given capabilities.
    pub fn is_available(&self, caps: &Capabilities) -> bool {
        match self {
            Self::Software => true,
            Self::Hardware => caps.supports_hardware_blur(),
        }
    }

    /// Get human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Software => "software",
            Self::Hardware => "hardware",
        }
    }
}

/// Requested path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PathPreference {
    /// Best available (hardware > software).
    #[default]
    Auto,
    /// Always use the box blur kernel.
    Software,
    /// Use the compositor when supported, otherwise fall back to software.
    Hardware,
}

/// What the host platform can do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    /// Platform API level.
    pub api_level: u32,
}

impl Capabilities {
    /// Capabilities for a platform API level.
    pub const fn new(api_level: u32) -> Self {
        Self { api_level }
    }

    /// `true` when the compositor can blur a layer.
    pub const fn supports_hardware_blur(&self) -> bool {
        self.api_level >= HARDWARE_BLUR_MIN_API
    }
}

/// How a hardware effect samples past the layer bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TileMode {
    /// Repeat the edge pixel, like the software kernel.
    #[default]
    Clamp,
}

/// Compositor blur request handed to the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HardwareEffect {
    /// Horizontal blur radius.
    pub radius_x: f32,
    /// Vertical blur radius.
    pub radius_y: f32,
    /// Edge handling.
    pub tile_mode: TileMode,
}

impl HardwareEffect {
    /// Same radius on both axes, clamped edges.
    pub fn uniform(radius: f32) -> Self {
        Self {
            radius_x: radius,
            radius_y: radius,
            tile_mode: TileMode::Clamp,
        }
    }
}

/// Information about a blur path.
#[derive(Debug, Clone)]
pub struct PathInfo {
    /// Path type.
    pub path: BlurPath,
    /// Human-readable name.
    pub name: &'static str,
    /// Whether the path is available.
    pub available: bool,
    /// Priority for auto-selection (higher = preferred).
    pub priority: u32,
    /// Description.
    pub description: &'static str,
}

/// Detect all blur paths, best first.
pub fn detect_paths(caps: &Capabilities) -> Vec<PathInfo> {
    let hardware = caps.supports_hardware_blur();
    let mut paths = vec![
        PathInfo {
            path: BlurPath::Software,
            name: BlurPath::Software.name(),
            available: true,
            priority: 10,
            description: "Sliding-window box blur on captured rasters",
        },
        PathInfo {
            path: BlurPath::Hardware,
            name: BlurPath::Hardware.name(),
            available: hardware,
            priority: if hardware { 100 } else { 0 },
            description: "Compositor blur effect",
        },
    ];

    paths.sort_by(|a, b| b.priority.cmp(&a.priority));
    paths
}

/// Select the path to use for a preference.
pub fn select_path(caps: &Capabilities, preference: PathPreference) -> BlurPath {
    match preference {
        PathPreference::Software => BlurPath::Software,
        PathPreference::Hardware if caps.supports_hardware_blur() => BlurPath::Hardware,
        PathPreference::Hardware => {
            warn!(
                api_level = caps.api_level,
                min = HARDWARE_BLUR_MIN_API,
                "hardware blur requested but unsupported, using software"
            );
            BlurPath::Software
        }
        PathPreference::Auto => detect_paths(caps)
            .into_iter()
            .filter(|p| p.available)
            .max_by_key(|p| p.priority)
            .map(|p| p.path)
            .unwrap_or(BlurPath::Software),
    }
}

/// Get description of available paths.
pub fn describe_paths(caps: &Capabilities) -> String {
    let mut desc = String::new();

    for info in detect_paths(caps) {
        let status = if info.available { "+" } else { "-" };
        let _ = writeln!(desc, "[{status}] {}: {}", info.name, info.description);
    }

    desc
}
