//! Blur layer controller.
//!
//! [`BlurLayout`] holds everything a host needs to draw a live blur over
//! some content:
//!
//! - the blur strength and whether the blur is on;
//! - the path chosen at construction ([`BlurPath`]);
//! - for the software path, an offscreen capture raster and a blurred
//!   raster, reallocated only when the view size changes.
//!
//! The host owns timing and drawing. While the blur is on it calls
//! [`BlurLayout::tick`] every [`BlurLayout::frame_delay`] and redraws when a
//! redraw was requested. Each redraw calls [`BlurLayout::render`] with a
//! closure that rasterizes the content, and draws the returned
//! [`Presentation`].
//!
//! # Example
//!
//! ```rust
//! use blur_layout::{BlurLayout, Capabilities, LayoutConfig, PathPreference, Presentation};
//!
//! let config = LayoutConfig { path: PathPreference::Software, ..Default::default() };
//! let mut layout = BlurLayout::new(config, &Capabilities::new(26)).unwrap();
//! layout.resize(8, 8);
//! layout.start_blur();
//!
//! while layout.tick() {
//!     if layout.take_redraw_request() {
//!         let frame = layout.render(|target| target.fill(0xFF00_80FF)).unwrap();
//!         assert!(matches!(frame, Presentation::Raster(r) if r.pixel(0, 0) == 0xFF00_80FF));
//!     }
//!     layout.stop_blur();
//! }
//! ```

use std::time::Duration;

use blur_core::Raster;
use blur_ops::RadiusMapper;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

use crate::config::LayoutConfig;
use crate::path::{select_path, BlurPath, Capabilities, HardwareEffect};
use crate::LayoutResult;

/// What the host should draw for one frame.
#[derive(Debug)]
pub enum Presentation<'a> {
    /// Draw the content directly (zero-area layer).
    Direct,
    /// Draw the content directly with this compositor effect applied, or
    /// with no effect when `None`.
    Hardware(Option<HardwareEffect>),
    /// Draw this raster in place of the content.
    Raster(&'a Raster),
}

/// Offscreen buffers for the software path.
#[derive(Debug)]
struct FrameBuffers {
    capture: Raster,
    blurred: Raster,
}

impl FrameBuffers {
    fn new(width: usize, height: usize) -> LayoutResult<Self> {
        Ok(Self {
            capture: Raster::new(width, height)?,
            blurred: Raster::new(width, height)?,
        })
    }
}

/// Live blur layer state.
#[derive(Debug)]
pub struct BlurLayout {
    config: LayoutConfig,
    mapper: RadiusMapper,
    path: BlurPath,
    strength: f32,
    active: bool,
    redraw_requested: bool,
    width: usize,
    height: usize,
    buffers: Option<FrameBuffers>,
}

impl BlurLayout {
    /// Creates an inactive layer and selects its blur path.
    ///
    /// # Errors
    ///
    /// [`crate::LayoutError::InvalidConfig`] if the config fails validation.
    pub fn new(config: LayoutConfig, caps: &Capabilities) -> LayoutResult<Self> {
        config.validate()?;
        let mapper = config.mapper()?;
        let path = select_path(caps, config.path);
        info!(path = path.name(), api_level = caps.api_level, "blur path selected");

        Ok(Self {
            strength: config.strength,
            config,
            mapper,
            path,
            active: false,
            redraw_requested: false,
            width: 0,
            height: 0,
            buffers: None,
        })
    }

    /// Active configuration.
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Path chosen at construction.
    pub fn path(&self) -> BlurPath {
        self.path
    }

    /// Current blur strength.
    pub fn blur_strength(&self) -> f32 {
        self.strength
    }

    /// Sets the blur strength and requests a redraw.
    pub fn set_blur_strength(&mut self, strength: f32) {
        self.strength = strength;
        self.redraw_requested = true;
    }

    /// Kernel radius for the current strength.
    pub fn radius(&self) -> usize {
        self.mapper.map(self.strength)
    }

    /// Compositor effect for the current state, `None` while inactive.
    pub fn hardware_effect(&self) -> Option<HardwareEffect> {
        self.active
            .then(|| HardwareEffect::uniform(self.mapper.hardware_radius(self.strength)))
    }

    /// `true` while the blur is on.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Turns the blur on.
    ///
    /// Returns `true` if it was off; the host should then schedule the
    /// first [`tick`](Self::tick) after [`frame_delay`](Self::frame_delay).
    pub fn start_blur(&mut self) -> bool {
        if self.active {
            return false;
        }
        debug!(strength = self.strength, "blur started");
        self.active = true;
        true
    }

    /// Turns the blur off and requests an unblurred redraw.
    ///
    /// Returns `true` if it was on; the host should cancel pending ticks.
    pub fn stop_blur(&mut self) -> bool {
        if !self.active {
            return false;
        }
        debug!("blur stopped");
        self.active = false;
        self.redraw_requested = true;
        true
    }

    /// Delay between ticks.
    pub fn frame_delay(&self) -> Duration {
        self.config.frame_delay()
    }

    /// Periodic callback.
    ///
    /// While active, requests a redraw and returns `true` so the host
    /// reschedules. Returns `false` once the blur is off.
    pub fn tick(&mut self) -> bool {
        if self.active {
            self.redraw_requested = true;
        }
        self.active
    }

    /// Returns and clears the pending redraw request.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    /// Records the layer size; a change requests a redraw.
    pub fn resize(&mut self, width: usize, height: usize) {
        if (width, height) != (self.width, self.height) {
            self.width = width;
            self.height = height;
            self.redraw_requested = true;
        }
    }

    /// Layer size.
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Produces this frame's presentation.
    ///
    /// `capture` is called only on the software path of a non-empty layer.
    /// It receives the offscreen raster, sized to the layer, and must draw
    /// the content into it.
    ///
    /// # Errors
    ///
    /// Propagates buffer allocation and kernel errors.
    pub fn render<F>(&mut self, capture: F) -> LayoutResult<Presentation<'_>>
    where
        F: FnOnce(&mut Raster),
    {
        self.redraw_requested = false;

        if self.width == 0 || self.height == 0 {
            return Ok(Presentation::Direct);
        }
        if self.path == BlurPath::Hardware {
            return Ok(Presentation::Hardware(self.hardware_effect()));
        }

        let radius = self.radius();
        let active = self.active;
        let parallel = self.config.parallel;
        let buffers = self.ensure_buffers()?;

        capture(&mut buffers.capture);
        if !active {
            return Ok(Presentation::Raster(&buffers.capture));
        }

        trace!(radius, parallel, "software blur frame");
        blur_frame(&buffers.capture, &mut buffers.blurred, radius, parallel)?;
        Ok(Presentation::Raster(&buffers.blurred))
    }

    /// Returns buffers matching the layer size, reallocating on change.
    fn ensure_buffers(&mut self) -> LayoutResult<&mut FrameBuffers> {
        let size = (self.width, self.height);
        let buffers = match self.buffers.take() {
            Some(b) if b.capture.dimensions() == size => b,
            _ => {
                debug!(width = size.0, height = size.1, "allocating offscreen buffers");
                FrameBuffers::new(size.0, size.1)?
            }
        };
        Ok(self.buffers.insert(buffers))
    }
}

/// Runs the kernel from `src` into `dst` (same size).
fn blur_frame(src: &Raster, dst: &mut Raster, radius: usize, parallel: bool) -> LayoutResult<()> {
    let (width, height) = src.dimensions();

    #[cfg(feature = "parallel")]
    {
        if parallel {
            let (src, dst) = (src.pixels(), dst.pixels_mut());
            blur_ops::parallel::box_blur_into(src, dst, width, height, radius)?;
            return Ok(());
        }
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    blur_ops::box_blur::box_blur_into(src.pixels(), dst.pixels_mut(), width, height, radius)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathPreference;

    fn software() -> BlurLayout {
        let config = LayoutConfig {
            path: PathPreference::Software,
            ..LayoutConfig::default()
        };
        BlurLayout::new(config, &Capabilities::new(21)).unwrap()
    }

    #[test]
    fn test_start_stop_idempotent() {
        let mut layout = software();
        assert!(layout.start_blur());
        assert!(!layout.start_blur());
        assert!(layout.is_active());
        assert!(layout.stop_blur());
        assert!(!layout.stop_blur());
        assert!(!layout.is_active());
    }

    #[test]
    fn test_stop_requests_redraw() {
        let mut layout = software();
        layout.start_blur();
        layout.take_redraw_request();
        layout.stop_blur();
        assert!(layout.take_redraw_request());
        assert!(!layout.take_redraw_request());
    }

    #[test]
    fn test_tick() {
        let mut layout = software();
        assert!(!layout.tick());
        assert!(!layout.take_redraw_request());

        layout.start_blur();
        assert!(layout.tick());
        assert!(layout.take_redraw_request());
    }

    #[test]
    fn test_strength_and_radius() {
        let mut layout = software();
        assert_eq!(layout.radius(), 13);
        layout.set_blur_strength(8.0);
        assert_eq!(layout.radius(), 2);
        assert!(layout.take_redraw_request());
        layout.set_blur_strength(-3.0);
        assert_eq!(layout.radius(), 0);
    }

    #[test]
    fn test_buffers_reused_until_resize() {
        let mut layout = software();
        layout.resize(4, 3);
        layout.render(|r| r.fill(1)).unwrap();
        let first = layout.buffers.as_ref().unwrap().capture.pixels().as_ptr();
        layout.render(|r| r.fill(2)).unwrap();
        let second = layout.buffers.as_ref().unwrap().capture.pixels().as_ptr();
        assert_eq!(first, second);

        layout.resize(5, 3);
        layout.render(|r| r.fill(3)).unwrap();
        assert_eq!(layout.buffers.as_ref().unwrap().capture.dimensions(), (5, 3));
    }

    #[test]
    fn test_zero_area_is_direct() {
        let mut layout = software();
        layout.resize(0, 10);
        let mut called = false;
        let frame = layout.render(|_| called = true).unwrap();
        assert!(matches!(frame, Presentation::Direct));
        assert!(!called);
    }
}
