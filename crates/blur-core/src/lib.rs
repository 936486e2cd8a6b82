//! # blur-core
//!
//! Core types for packed-pixel blur processing.
//!
//! This crate provides the foundational types shared by the blur-rs crates:
//!
//! - [`Raster`] - Row-major buffer of packed `0xAARRGGBB` pixels
//! - [`Argb`] - Unpacked view of a single pixel
//! - [`Error`], [`Result`] - Contract violations on raster construction
//!
//! ## Crate Structure
//!
//! ```text
//! blur-core (this crate)
//!    ^
//!    |
//!    +-- blur-ops (box blur kernel, radius mapping)
//!    +-- blur-layout (blur layer controller)
//!    +-- blur-cli (command line tool)
//! ```
//!
//! ## Example
//!
//! ```rust
//! use blur_core::{Argb, Raster};
//!
//! let red = Argb::new(0xFF, 0xFF, 0x00, 0x00).packed();
//! let raster = Raster::filled(4, 4, red).unwrap();
//! assert_eq!(raster.len(), 16);
//! assert_eq!(raster.pixel(3, 3), red);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod pixel;
pub mod raster;

pub use error::{Error, Result};
pub use pixel::{with_opaque_alpha, Argb, OPAQUE_ALPHA};
pub use raster::{pixel_count, Raster};
