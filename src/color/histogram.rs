//! Per-region frequency tabulation of converted channel values
//!
//! Builds the 256-bin count tables behind the exported value sheet: one row
//! per sampled region, one 256-bin block per requested channel, in the fixed
//! sheet order `R G B C M Y K H_HSI S_HSI I H_HSL S_HSL L GRAY`.
//!
//! Binning is lossy and one-directional: normalized values are truncated
//! (not rounded) onto the 0-255 index range, and the original values cannot
//! be reconstructed from the counts.
//!
//! Algorithm tag: `algo-256-bin-frequency-table`

use serde::{Deserialize, Serialize};

use crate::color::conversion::{ColorConverter, ConvertedSample};
use crate::constants::binning::{BIN_COUNT, MAX_BIN_INDEX};
use crate::error::{Result, SamplingError};
use crate::sample::{area_label, Region};

/// One tabulated channel of the value sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Channel {
    R,
    G,
    B,
    C,
    M,
    Y,
    K,
    HsiH,
    HsiS,
    HsiI,
    HslH,
    HslS,
    HslL,
    Gray,
}

impl Channel {
    /// Every channel, in sheet column order
    pub const ALL: [Channel; 14] = [
        Channel::R,
        Channel::G,
        Channel::B,
        Channel::C,
        Channel::M,
        Channel::Y,
        Channel::K,
        Channel::HsiH,
        Channel::HsiS,
        Channel::HsiI,
        Channel::HslH,
        Channel::HslS,
        Channel::HslL,
        Channel::Gray,
    ];

    /// Column label prefix used in exported sheets (`R_0`, `H_HSI_17`, ...)
    pub fn column_prefix(&self) -> &'static str {
        match self {
            Channel::R => "R",
            Channel::G => "G",
            Channel::B => "B",
            Channel::C => "C",
            Channel::M => "M",
            Channel::Y => "Y",
            Channel::K => "K",
            Channel::HsiH => "H_HSI",
            Channel::HsiS => "S_HSI",
            Channel::HsiI => "I",
            Channel::HslH => "H_HSL",
            Channel::HslS => "S_HSL",
            Channel::HslL => "L",
            Channel::Gray => "GRAY",
        }
    }

    /// Raw channel value of one converted pixel
    ///
    /// RGB channels report the 8-bit value, grayscale its 0-255 luma, and
    /// every other channel its normalized [0, 1] value. Useful for feeding
    /// external plotting without going through bins.
    pub fn value(&self, sample: &ConvertedSample) -> f32 {
        match self {
            Channel::R => sample.rgb.red as f32,
            Channel::G => sample.rgb.green as f32,
            Channel::B => sample.rgb.blue as f32,
            Channel::C => sample.cmyk.c,
            Channel::M => sample.cmyk.m,
            Channel::Y => sample.cmyk.y,
            Channel::K => sample.cmyk.k,
            Channel::HsiH => sample.hsi.h,
            Channel::HsiS => sample.hsi.s,
            Channel::HsiI => sample.hsi.i,
            Channel::HslH => sample.hsl.h,
            Channel::HslS => sample.hsl.s,
            Channel::HslL => sample.hsl.l,
            Channel::Gray => sample.gray,
        }
    }

    /// Bin index of one converted pixel on this channel
    ///
    /// 8-bit channels index directly; normalized channels scale by 255 and
    /// truncate; grayscale truncates its 0-255 luma. Always in `0..=255`.
    pub fn bin_index(&self, sample: &ConvertedSample) -> usize {
        match self {
            Channel::R => sample.rgb.red as usize,
            Channel::G => sample.rgb.green as usize,
            Channel::B => sample.rgb.blue as usize,
            Channel::Gray => (sample.gray.clamp(0.0, 255.0) as usize).min(MAX_BIN_INDEX),
            _ => {
                let value = self.value(sample);
                ((value.clamp(0.0, 1.0) * MAX_BIN_INDEX as f32) as usize).min(MAX_BIN_INDEX)
            }
        }
    }

    /// Parse a named channel set
    ///
    /// Accepted names: `all`, `rgb`, `cmyk`, `hsi`, `hsl`, `gray`.
    pub fn parse_set(name: &str) -> Result<Vec<Channel>> {
        match name.to_lowercase().as_str() {
            "all" => Ok(Channel::ALL.to_vec()),
            "rgb" => Ok(vec![Channel::R, Channel::G, Channel::B]),
            "cmyk" => Ok(vec![Channel::C, Channel::M, Channel::Y, Channel::K]),
            "hsi" => Ok(vec![Channel::HsiH, Channel::HsiS, Channel::HsiI]),
            "hsl" => Ok(vec![Channel::HslH, Channel::HslS, Channel::HslL]),
            "gray" => Ok(vec![Channel::Gray]),
            other => Err(SamplingError::invalid_parameter("channels", other)),
        }
    }
}

/// One frequency-table row: a region's counts across all requested channels
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrequencyRow {
    /// Region label by insertion order ("Area 1", "Area 2", ...)
    pub label: String,
    /// `channels.len() * 256` counters, one 256-bin block per channel
    pub counts: Vec<u32>,
}

/// Binned frequency table over a set of sampled regions
///
/// Row order follows region insertion order; column order follows the
/// requested channel order. Building the table is deterministic: identical
/// regions and channels always produce an identical table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrequencyTable {
    channels: Vec<Channel>,
    rows: Vec<FrequencyRow>,
}

impl FrequencyTable {
    /// Tabulate the requested channels over the given regions
    ///
    /// # Arguments
    ///
    /// * `regions` - sampled regions, one output row each
    /// * `channels` - channels to bin, in output column order
    ///
    /// # Returns
    ///
    /// The frequency table. Each row's counts sum to
    /// `pixel_count * channels.len()`.
    ///
    /// # Errors
    ///
    /// Returns [`SamplingError::NoData`] when `regions` or `channels` is
    /// empty, the degenerate calls a front-end turns into a "select areas
    /// first" prompt.
    pub fn build(regions: &[Region], channels: &[Channel]) -> Result<FrequencyTable> {
        if regions.is_empty() {
            return Err(SamplingError::no_data("no regions sampled"));
        }
        if channels.is_empty() {
            return Err(SamplingError::no_data("no channels requested"));
        }

        let converter = ColorConverter::new();
        let mut rows = Vec::with_capacity(regions.len());

        for (index, region) in regions.iter().enumerate() {
            let mut counts = vec![0u32; channels.len() * BIN_COUNT];
            for &pixel in region.pixels() {
                let sample = converter.convert(pixel);
                for (slot, channel) in channels.iter().enumerate() {
                    counts[slot * BIN_COUNT + channel.bin_index(&sample)] += 1;
                }
            }
            rows.push(FrequencyRow {
                label: area_label(index),
                counts,
            });
        }

        Ok(FrequencyTable {
            channels: channels.to_vec(),
            rows,
        })
    }

    /// Channels tabulated, in column order
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Rows, in region insertion order
    pub fn rows(&self) -> &[FrequencyRow] {
        &self.rows
    }

    /// Total number of count columns (`channels * 256`)
    pub fn column_count(&self) -> usize {
        self.channels.len() * BIN_COUNT
    }

    /// Column labels in sheet layout (`R_0` .. `R_255`, `G_0`, ...)
    pub fn column_labels(&self) -> Vec<String> {
        let mut labels = Vec::with_capacity(self.column_count());
        for channel in &self.channels {
            let prefix = channel.column_prefix();
            for bin in 0..BIN_COUNT {
                labels.push(format!("{}_{}", prefix, bin));
            }
        }
        labels
    }

    /// Count for one region / channel / bin
    ///
    /// Returns `None` when the row index is out of range or the channel was
    /// not tabulated.
    pub fn count(&self, row: usize, channel: Channel, bin: usize) -> Option<u32> {
        if bin >= BIN_COUNT {
            return None;
        }
        let slot = self.channels.iter().position(|&c| c == channel)?;
        self.rows
            .get(row)
            .map(|r| r.counts[slot * BIN_COUNT + bin])
    }

    /// Sum of all counters in one row
    ///
    /// Equals the region's pixel count times the number of channels.
    pub fn row_total(&self, row: usize) -> Option<u64> {
        self.rows
            .get(row)
            .map(|r| r.counts.iter().map(|&c| c as u64).sum())
    }
}

/// Raw channel values of a region, in pixel order
///
/// The value-list form consumed by plotting front-ends: one f32 per pixel,
/// on the channel's native scale (8-bit for RGB, 0-255 for grayscale,
/// [0, 1] otherwise).
pub fn channel_values(region: &Region, channel: Channel) -> Vec<f32> {
    let converter = ColorConverter::new();
    region
        .pixels()
        .iter()
        .map(|&pixel| channel.value(&converter.convert(pixel)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::Srgb;

    fn region_of(pixels: Vec<Srgb<u8>>) -> Region {
        Region::from_pixels(pixels)
    }

    #[test]
    fn test_single_region_single_channel_sums_to_pixel_count() {
        let region = region_of(vec![Srgb::new(10, 20, 30); 37]);
        let table = FrequencyTable::build(&[region], &[Channel::R]).unwrap();

        assert_eq!(table.column_count(), 256);
        assert_eq!(table.row_total(0), Some(37));
        assert_eq!(table.count(0, Channel::R, 10), Some(37));
        assert_eq!(table.count(0, Channel::R, 11), Some(0));
    }

    #[test]
    fn test_full_sheet_row_total() {
        let pixels: Vec<Srgb<u8>> = (0..100)
            .map(|i| Srgb::new(i as u8, (i * 2) as u8, 255 - i as u8))
            .collect();
        let table = FrequencyTable::build(&[region_of(pixels)], &Channel::ALL).unwrap();

        assert_eq!(table.column_count(), 14 * 256);
        assert_eq!(table.row_total(0), Some(100 * 14));
    }

    #[test]
    fn test_rgb_bins_are_raw_values() {
        let region = region_of(vec![Srgb::new(255, 0, 128)]);
        let table =
            FrequencyTable::build(&[region], &[Channel::R, Channel::G, Channel::B]).unwrap();

        assert_eq!(table.count(0, Channel::R, 255), Some(1));
        assert_eq!(table.count(0, Channel::G, 0), Some(1));
        assert_eq!(table.count(0, Channel::B, 128), Some(1));
    }

    #[test]
    fn test_normalized_bins_truncate() {
        // Pure red: c = 0, m = 1, y = 1, k = 0
        let region = region_of(vec![Srgb::new(255, 0, 0)]);
        let table = FrequencyTable::build(&[region], &Channel::parse_set("cmyk").unwrap()).unwrap();

        assert_eq!(table.count(0, Channel::C, 0), Some(1));
        assert_eq!(table.count(0, Channel::M, 255), Some(1));
        assert_eq!(table.count(0, Channel::Y, 255), Some(1));
        assert_eq!(table.count(0, Channel::K, 0), Some(1));
    }

    #[test]
    fn test_gray_bin_truncates_luma() {
        // White luma is 254.97; truncation puts it in bin 254, not 255
        let region = region_of(vec![Srgb::new(255, 255, 255)]);
        let table = FrequencyTable::build(&[region], &[Channel::Gray]).unwrap();

        assert_eq!(table.count(0, Channel::Gray, 254), Some(1));
        assert_eq!(table.count(0, Channel::Gray, 255), Some(0));
    }

    #[test]
    fn test_row_per_region_with_labels() {
        let a = region_of(vec![Srgb::new(1, 2, 3)]);
        let b = region_of(vec![Srgb::new(4, 5, 6); 2]);
        let table = FrequencyTable::build(&[a, b], &[Channel::R]).unwrap();

        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.rows()[0].label, "Area 1");
        assert_eq!(table.rows()[1].label, "Area 2");
        assert_eq!(table.row_total(1), Some(2));
    }

    #[test]
    fn test_build_is_deterministic() {
        let pixels: Vec<Srgb<u8>> = (0..64).map(|i| Srgb::new(i, 255 - i, i / 2)).collect();
        let regions = [region_of(pixels.clone()), region_of(pixels)];

        let first = FrequencyTable::build(&regions, &Channel::ALL).unwrap();
        let second = FrequencyTable::build(&regions, &Channel::ALL).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_regions_is_no_data() {
        let result = FrequencyTable::build(&[], &Channel::ALL);
        assert!(matches!(result, Err(SamplingError::NoData { .. })));
    }

    #[test]
    fn test_empty_channels_is_no_data() {
        let region = region_of(vec![Srgb::new(0, 0, 0)]);
        let result = FrequencyTable::build(&[region], &[]);
        assert!(matches!(result, Err(SamplingError::NoData { .. })));
    }

    #[test]
    fn test_empty_region_contributes_empty_row() {
        // A region with zero pixels is a valid row of zeros, not an error
        let table = FrequencyTable::build(&[region_of(vec![])], &[Channel::R]).unwrap();
        assert_eq!(table.row_total(0), Some(0));
    }

    #[test]
    fn test_column_labels_match_sheet_layout() {
        let region = region_of(vec![Srgb::new(0, 0, 0)]);
        let table = FrequencyTable::build(&[region], &Channel::ALL).unwrap();
        let labels = table.column_labels();

        assert_eq!(labels.len(), 14 * 256);
        assert_eq!(labels[0], "R_0");
        assert_eq!(labels[255], "R_255");
        assert_eq!(labels[256], "G_0");
        assert_eq!(labels[7 * 256], "H_HSI_0");
        assert_eq!(labels[13 * 256 + 255], "GRAY_255");
    }

    #[test]
    fn test_parse_set_names() {
        assert_eq!(Channel::parse_set("all").unwrap().len(), 14);
        assert_eq!(Channel::parse_set("CMYK").unwrap().len(), 4);
        assert_eq!(Channel::parse_set("gray").unwrap(), vec![Channel::Gray]);
        assert!(matches!(
            Channel::parse_set("ycbcr"),
            Err(SamplingError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn test_channel_values_native_scales() {
        let region = region_of(vec![Srgb::new(255, 0, 0), Srgb::new(0, 0, 0)]);

        let reds = channel_values(&region, Channel::R);
        assert_eq!(reds, vec![255.0, 0.0]);

        let keys = channel_values(&region, Channel::K);
        assert_eq!(keys, vec![0.0, 1.0]);
    }
}
