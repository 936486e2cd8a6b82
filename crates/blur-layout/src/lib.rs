//! # blur-layout
//!
//! Host-side controller for a live, toggleable blur layer.
//!
//! A [`BlurLayout`] decides once, from the platform [`Capabilities`], whether
//! the blur is produced by the compositor ([`BlurPath::Hardware`]) or by the
//! box blur kernel from `blur-ops` on captured rasters
//! ([`BlurPath::Software`]). While the blur is on the host ticks it at the
//! configured frame rate and redraws with whatever [`BlurLayout::render`]
//! returns.
//!
//! # Quick start
//!
//! ```rust
//! use blur_layout::{BlurLayout, BlurPath, Capabilities, LayoutConfig, Presentation};
//!
//! // Modern platform: the compositor does the work.
//! let mut layout = BlurLayout::new(LayoutConfig::default(), &Capabilities::new(33)).unwrap();
//! assert_eq!(layout.path(), BlurPath::Hardware);
//!
//! layout.resize(320, 240);
//! layout.start_blur();
//! match layout.render(|_| unreachable!()).unwrap() {
//!     Presentation::Hardware(Some(effect)) => assert_eq!(effect.radius_x, 12.5),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```
//!
//! # Modules
//!
//! - [`config`] - YAML settings
//! - [`path`] - Path detection and selection
//! - [`layout`] - Blur layer state machine and offscreen buffers
//! - [`error`] - Error types
//!
//! # Feature Flags
//!
//! - `parallel` (default) - rayon kernel on the software path

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod layout;
pub mod path;

pub use config::LayoutConfig;
pub use error::{LayoutError, LayoutResult};
pub use layout::{BlurLayout, Presentation};
pub use path::{
    describe_paths, detect_paths, select_path, BlurPath, Capabilities, HardwareEffect, PathInfo,
    PathPreference, TileMode, HARDWARE_BLUR_MIN_API,
};
