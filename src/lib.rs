//! # Sample Colors
//!
//! A Rust crate for colorimetric sampling of image regions.
//!
//! This library backs a point-and-click measurement workflow:
//! - Sampling square pixel neighborhoods around clicked coordinates
//! - Converting sampled pixels between color models (CMYK, HSI, HSL, grayscale)
//! - Tabulating converted values into per-region 256-bin frequency tables
//! - Exporting the tables as aligned text or spreadsheet-ready rows
//!
//! ## Example
//!
//! ```rust,no_run
//! use sample_colors::{sample_image, Channel, FrequencyTable};
//! use std::path::Path;
//!
//! let session = sample_image(Path::new("photo.png"), &[(120, 88), (40, 200)], 10)?;
//! let table = FrequencyTable::build(session.regions(), &Channel::ALL)?;
//! println!("{} regions, {} columns", table.rows().len(), table.column_count());
//! # Ok::<(), sample_colors::SamplingError>(())
//! ```

use std::path::Path;

pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod image_loader;
pub mod report;
pub mod sample;

pub use color::{
    channel_values, Channel, Cmyk, ColorConverter, ConvertedSample, FrequencyRow, FrequencyTable,
    Hsi, Hsl,
};
pub use config::{ExportConfig, SamplerConfig};
pub use error::{Result, SamplingError};
pub use report::{render_text, summarize, write_delimited, write_text, RegionSummary};
pub use sample::{area_label, PixelSample, Region, SampleSession};

/// Sample an image at a list of clicked coordinates
///
/// This is the high-level entry point for non-interactive callers: it loads
/// the image once and samples one region per click, in click order, into a
/// fresh session.
///
/// # Arguments
///
/// * `image_path` - Path to the image file
/// * `clicks` - Clicked coordinates, one region each
/// * `radius` - Sampling window half-width
///
/// # Returns
///
/// A [`SampleSession`] with one region per click. Clicks outside the image
/// bounds produce empty regions rather than errors.
///
/// # Errors
///
/// Returns [`SamplingError::ImageLoadError`] when the image cannot be
/// loaded or decoded.
pub fn sample_image(
    image_path: &Path,
    clicks: &[(u32, u32)],
    radius: u32,
) -> Result<SampleSession> {
    let image = image_loader::load_image(image_path)?;
    let mut session = SampleSession::new();
    for &(x, y) in clicks {
        session.add_region(image_loader::sample_region(&image, x, y, radius));
    }
    Ok(session)
}
