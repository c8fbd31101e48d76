//! Tabular rendering and file export of frequency tables
//!
//! Two renditions of the same sheet layout: a whitespace-aligned text table
//! for on-screen display or plain-text files, and delimiter-separated rows
//! for spreadsheet import. Both carry a leading region-label column followed
//! by the `<channel>_<bin>` count columns.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use palette::Srgb;
use serde::Serialize;

use crate::color::{Cmyk, ColorConverter, FrequencyTable, Hsi, Hsl};
use crate::error::{Result, SamplingError};
use crate::sample::{area_label, SampleSession};

/// Render a frequency table as a whitespace-aligned text sheet
///
/// Header row of column labels, one row per region, every cell right-aligned
/// to its column width with two spaces between columns.
pub fn render_text(table: &FrequencyTable) -> String {
    let labels = table.column_labels();
    let rows = table.rows();

    let mut region_width = "Region".len();
    for row in rows {
        region_width = region_width.max(row.label.len());
    }

    let mut widths: Vec<usize> = labels.iter().map(|l| l.len()).collect();
    for row in rows {
        for (i, count) in row.counts.iter().enumerate() {
            widths[i] = widths[i].max(count.to_string().len());
        }
    }

    let mut out = String::new();
    out.push_str(&format!("{:>region_width$}", "Region"));
    for (label, &width) in labels.iter().zip(&widths) {
        out.push_str("  ");
        out.push_str(&format!("{:>width$}", label));
    }
    out.push('\n');

    for row in rows {
        out.push_str(&format!("{:>region_width$}", row.label));
        for (count, &width) in row.counts.iter().zip(&widths) {
            out.push_str("  ");
            out.push_str(&format!("{:>width$}", count));
        }
        out.push('\n');
    }
    out
}

/// Write the aligned text sheet to a file
///
/// # Errors
///
/// Returns [`SamplingError::ExportError`] on any I/O failure, with the
/// underlying error preserved as the source.
pub fn write_text(table: &FrequencyTable, path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|e| {
        SamplingError::export(format!("could not create '{}'", path.display()), e)
    })?;
    let mut writer = BufWriter::new(file);
    writer
        .write_all(render_text(table).as_bytes())
        .map_err(|e| SamplingError::export(format!("could not write '{}'", path.display()), e))?;
    writer
        .flush()
        .map_err(|e| SamplingError::export(format!("could not write '{}'", path.display()), e))?;
    log::debug!("wrote aligned text sheet to '{}'", path.display());
    Ok(())
}

/// Write the sheet as delimiter-separated rows for spreadsheet import
///
/// Same column layout as the text sheet: a header line, then one line per
/// region. No quoting is needed; labels and counts never contain the
/// delimiters in use.
///
/// # Errors
///
/// Returns [`SamplingError::ExportError`] on any I/O failure.
pub fn write_delimited(table: &FrequencyTable, path: &Path, delimiter: char) -> Result<()> {
    let file = File::create(path).map_err(|e| {
        SamplingError::export(format!("could not create '{}'", path.display()), e)
    })?;
    let mut writer = BufWriter::new(file);

    let mut header = String::from("Region");
    for label in table.column_labels() {
        header.push(delimiter);
        header.push_str(&label);
    }
    writeln!(writer, "{header}")
        .map_err(|e| SamplingError::export(format!("could not write '{}'", path.display()), e))?;

    for row in table.rows() {
        let mut line = row.label.clone();
        for count in &row.counts {
            line.push(delimiter);
            line.push_str(&count.to_string());
        }
        writeln!(writer, "{line}").map_err(|e| {
            SamplingError::export(format!("could not write '{}'", path.display()), e)
        })?;
    }

    writer
        .flush()
        .map_err(|e| SamplingError::export(format!("could not write '{}'", path.display()), e))?;
    log::debug!(
        "wrote delimited sheet ({} rows) to '{}'",
        table.rows().len(),
        path.display()
    );
    Ok(())
}

/// Human-oriented digest of one sampled region
///
/// The converted values of the region's mean pixel, for display alongside
/// the frequency sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionSummary {
    /// Region label by insertion order
    pub label: String,
    /// Number of pixels sampled into the region
    pub pixel_count: usize,
    /// Channel-wise mean pixel, rounded to 8 bits
    pub mean_rgb: [u8; 3],
    /// Hexadecimal form of the mean pixel
    pub hex: String,
    pub cmyk: Cmyk,
    pub hsi: Hsi,
    pub hsl: Hsl,
    /// Luma-weighted grayscale of the mean pixel, 0-255 scale
    pub gray: f32,
}

/// Summarize every region of a session, in insertion order
///
/// Empty regions (clicks outside the image) summarize as black with a
/// pixel count of zero.
pub fn summarize(session: &SampleSession) -> Vec<RegionSummary> {
    let converter = ColorConverter::new();
    session
        .regions()
        .iter()
        .enumerate()
        .map(|(index, region)| {
            let mean = region.mean_rgb().unwrap_or(Srgb::new(0, 0, 0));
            let converted = converter.convert(mean);
            RegionSummary {
                label: area_label(index),
                pixel_count: region.len(),
                mean_rgb: [mean.red, mean.green, mean.blue],
                hex: format!("#{:02X}{:02X}{:02X}", mean.red, mean.green, mean.blue),
                cmyk: converted.cmyk,
                hsi: converted.hsi,
                hsl: converted.hsl,
                gray: converted.gray,
            }
        })
        .collect()
}
