//! Blur command
//!
//! Loads a PNG, runs the box blur and writes an opaque RGBA PNG.
//! The radius comes from `--radius`, or from `--strength` (falling back to
//! the configured strength) through the configured radius mapping.

use crate::BlurArgs;
use anyhow::{Context, Result};
use blur_core::Raster;
use blur_ops::box_blur::box_blur_raster;
#[allow(unused_imports)]
use tracing::{debug, info, trace};

pub fn run(args: BlurArgs, verbose: u8) -> Result<()> {
    trace!(
        input = %args.input.display(),
        strength = ?args.strength,
        radius = ?args.radius,
        "blur::run"
    );

    let config = super::load_config(args.config.as_deref())?;
    let radius = match args.radius {
        Some(radius) => radius,
        None => {
            let strength = args.strength.unwrap_or(config.strength);
            let radius = config.mapper()?.map(strength);
            debug!(strength, radius, "strength mapped");
            radius
        }
    };
    let parallel = config.parallel && !args.sequential;

    let image = super::load_png(&args.input)?;
    let (w, h) = image.dimensions();

    info!(radius, parallel, w, h, "Applying box blur");

    if verbose > 0 {
        println!("Applying box blur (radius={}) to {}", radius, args.input.display());
    }

    let blurred = blur(&image, radius, parallel)
        .with_context(|| format!("Failed to blur: {}", args.input.display()))?;

    super::save_png(&args.output, &blurred)?;

    if verbose > 0 {
        println!("Done.");
    }

    Ok(())
}

fn blur(image: &Raster, radius: usize, parallel: bool) -> blur_ops::OpsResult<Raster> {
    if !parallel {
        return box_blur_raster(image, radius);
    }
    let (width, height) = image.dimensions();
    let pixels = blur_ops::parallel::box_blur(image.pixels(), width, height, radius)?;
    Ok(Raster::from_pixels(width, height, pixels)?)
}
