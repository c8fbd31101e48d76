//! Image loading and neighborhood sampling
//!
//! Decoding is delegated to the `image` crate; this module only maps decode
//! failures into the crate error type and extracts square pixel windows
//! around clicked coordinates. Windows are clipped to the image bounds, so
//! a click near an edge simply yields fewer pixels, matching what the
//! interactive selection produces.

use std::path::Path;

use image::RgbImage;
use palette::Srgb;

use crate::error::{Result, SamplingError};
use crate::sample::{PixelSample, Region};

/// Load an image from disk as 8-bit RGB
///
/// # Arguments
///
/// * `path` - Path to the image file
///
/// # Returns
///
/// The decoded image with any alpha channel dropped.
///
/// # Errors
///
/// Returns [`SamplingError::ImageLoadError`] when the file cannot be
/// opened or decoded; the decoder error is preserved as the source.
pub fn load_image(path: &Path) -> Result<RgbImage> {
    let decoded = image::open(path).map_err(|e| {
        SamplingError::image_load(format!("could not decode '{}'", path.display()), e)
    })?;
    let rgb = decoded.to_rgb8();
    log::debug!(
        "loaded '{}' ({}x{})",
        path.display(),
        rgb.width(),
        rgb.height()
    );
    Ok(rgb)
}

/// Sample the square neighborhood around a clicked coordinate
///
/// Visits every pixel of the `(2*radius + 1)^2` window centered on
/// `(x, y)`, column by column, skipping coordinates outside the image. A
/// click entirely outside the bounds yields an empty list.
///
/// # Arguments
///
/// * `image` - source image
/// * `x`, `y` - clicked pixel coordinate
/// * `radius` - window half-width
pub fn sample_neighborhood(image: &RgbImage, x: u32, y: u32, radius: u32) -> Vec<PixelSample> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Vec::new();
    }

    let x_lo = x.saturating_sub(radius);
    let x_hi = x.saturating_add(radius).min(width - 1);
    let y_lo = y.saturating_sub(radius);
    let y_hi = y.saturating_add(radius).min(height - 1);

    let mut pixels = Vec::new();
    for i in x_lo..=x_hi {
        for j in y_lo..=y_hi {
            let p = image.get_pixel(i, j).0;
            pixels.push(Srgb::new(p[0], p[1], p[2]));
        }
    }
    pixels
}

/// Sample a [`Region`] around a clicked coordinate
///
/// Convenience wrapper over [`sample_neighborhood`] that records the click
/// center and radius on the region.
pub fn sample_region(image: &RgbImage, x: u32, y: u32, radius: u32) -> Region {
    let pixels = sample_neighborhood(image, x, y, radius);
    log::debug!(
        "sampled {} pixels around ({}, {}) with radius {}",
        pixels.len(),
        x,
        y,
        radius
    );
    Region::sampled((x, y), radius, pixels)
}
