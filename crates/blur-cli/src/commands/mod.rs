//! CLI command implementations

pub mod blur;
pub mod paths;
pub mod radius;

use anyhow::{bail, Context, Result};
use blur_core::{Argb, Raster};
use blur_layout::LayoutConfig;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Load the layer config, or defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<LayoutConfig> {
    match path {
        Some(path) => LayoutConfig::load(path)
            .with_context(|| format!("Failed to load config: {}", path.display())),
        None => Ok(LayoutConfig::default()),
    }
}

/// Decode an 8-bit PNG into a packed ARGB raster.
///
/// Gray and gray+alpha are expanded to RGB; images without alpha get 0xFF.
pub fn load_png(path: &Path) -> Result<Raster> {
    let file = File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .with_context(|| format!("Failed to read PNG header: {}", path.display()))?;

    let buf_size = reader
        .output_buffer_size()
        .context("Cannot determine PNG buffer size")?;
    let mut buf = vec![0u8; buf_size];
    let info = reader
        .next_frame(&mut buf)
        .with_context(|| format!("Failed to decode: {}", path.display()))?;
    let data = &buf[..info.buffer_size()];

    let pixels: Vec<u32> = match (info.color_type, info.bit_depth) {
        (png::ColorType::Rgba, png::BitDepth::Eight) => data
            .chunks_exact(4)
            .map(|p| Argb::from_rgba([p[0], p[1], p[2], p[3]]).packed())
            .collect(),
        (png::ColorType::Rgb, png::BitDepth::Eight) => data
            .chunks_exact(3)
            .map(|p| Argb::new(0xFF, p[0], p[1], p[2]).packed())
            .collect(),
        (png::ColorType::GrayscaleAlpha, png::BitDepth::Eight) => data
            .chunks_exact(2)
            .map(|p| Argb::new(p[1], p[0], p[0], p[0]).packed())
            .collect(),
        (png::ColorType::Grayscale, png::BitDepth::Eight) => data
            .iter()
            .map(|&g| Argb::new(0xFF, g, g, g).packed())
            .collect(),
        (color_type, bit_depth) => {
            bail!("Unsupported PNG format {:?} {:?}: {}", color_type, bit_depth, path.display())
        }
    };

    Raster::from_pixels(info.width as usize, info.height as usize, pixels)
        .with_context(|| format!("Corrupt PNG data: {}", path.display()))
}

/// Encode a raster as an 8-bit RGBA PNG.
pub fn save_png(path: &Path, raster: &Raster) -> Result<()> {
    let width = u32::try_from(raster.width()).context("Image too wide for PNG")?;
    let height = u32::try_from(raster.height()).context("Image too tall for PNG")?;

    let file = File::create(path).with_context(|| format!("Failed to create: {}", path.display()))?;
    let mut encoder = png::Encoder::new(BufWriter::new(file), width, height);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);
    encoder.set_compression(png::Compression::default());

    let data: Vec<u8> = raster
        .pixels()
        .iter()
        .flat_map(|&px| Argb::from_packed(px).to_rgba())
        .collect();

    let mut writer = encoder
        .write_header()
        .with_context(|| format!("Failed to write PNG header: {}", path.display()))?;
    writer
        .write_image_data(&data)
        .with_context(|| format!("Failed to save: {}", path.display()))?;
    writer
        .finish()
        .with_context(|| format!("Failed to finish PNG: {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_raw(path: &Path, color: png::ColorType, w: u32, h: u32, data: &[u8]) {
        let file = File::create(path).unwrap();
        let mut encoder = png::Encoder::new(BufWriter::new(file), w, h);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(data).unwrap();
    }

    #[test]
    fn test_png_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rt.png");
        let pixels = vec![0xFF10_2030, 0x80FF_0000, 0x0000_FF00, 0xFFFF_FFFF];
        let raster = Raster::from_pixels(2, 2, pixels).unwrap();

        save_png(&path, &raster).unwrap();
        let loaded = load_png(&path).unwrap();
        assert_eq!(loaded.dimensions(), (2, 2));
        assert_eq!(loaded.pixels(), raster.pixels());
    }

    #[test]
    fn test_load_rgb_is_opaque() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb.png");
        write_raw(&path, png::ColorType::Rgb, 2, 1, &[1, 2, 3, 250, 251, 252]);

        let loaded = load_png(&path).unwrap();
        assert_eq!(loaded.pixels(), &[0xFF01_0203, 0xFFFA_FBFC]);
    }

    #[test]
    fn test_load_gray_variants() {
        let dir = tempfile::tempdir().unwrap();
        let gray = dir.path().join("g.png");
        let gray_alpha = dir.path().join("ga.png");
        write_raw(&gray, png::ColorType::Grayscale, 1, 1, &[0x40]);
        write_raw(&gray_alpha, png::ColorType::GrayscaleAlpha, 1, 1, &[0x40, 0x7F]);

        assert_eq!(load_png(&gray).unwrap().pixels(), &[0xFF40_4040]);
        assert_eq!(load_png(&gray_alpha).unwrap().pixels(), &[0x7F40_4040]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_png(&dir.path().join("nope.png")).is_err());
    }

    #[test]
    fn test_default_config() {
        assert_eq!(load_config(None).unwrap(), LayoutConfig::default());
    }
}
