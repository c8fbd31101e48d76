//! Color conversion and frequency tabulation module
//!
//! This module holds the numeric core: per-pixel color model conversions
//! and the binned frequency tables built on top of them.

pub mod conversion;
pub mod histogram;

pub use conversion::{Cmyk, ColorConverter, ConvertedSample, Hsi, Hsl};
pub use histogram::{channel_values, Channel, FrequencyRow, FrequencyTable};
