//! # blur-ops
//!
//! Blur operations for packed ARGB rasters.
//!
//! This crate holds the software blur path of the blur layer: a separable
//! sliding-window box blur that approximates a Gaussian at interactive
//! frame rates without GPU help, and the mapping from user-facing blur
//! strength to kernel radius.
//!
//! # Modules
//!
//! - [`box_blur`] - Two-pass sliding-window box blur
//! - [`radius`] - Strength to radius mapping
//! - [`parallel`] - Rayon version of the box blur (feature `parallel`)
//!
//! # Example
//!
//! ```rust
//! use blur_ops::{box_blur::box_blur, radius::radius_for_strength};
//!
//! let pixels = vec![0xFF20_4060u32; 32 * 16];
//! let radius = radius_for_strength(50.0);
//! let blurred = box_blur(&pixels, 32, 16, radius).unwrap();
//! assert_eq!(blurred.len(), pixels.len());
//! ```
//!
//! # Determinism
//!
//! All operations are pure functions of their inputs. Repeated calls, and
//! sequential versus parallel calls, return bit-identical output.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod box_blur;
pub mod radius;

#[cfg(feature = "parallel")]
pub mod parallel;

pub use error::{OpsError, OpsResult};
pub use radius::{radius_for_strength, RadiusMapper, MAX_RADIUS};
