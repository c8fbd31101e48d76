//! Sampled-pixel data model and session state
//!
//! A [`Region`] is the ordered pixel list captured from one clicked
//! neighborhood; a [`SampleSession`] is the append-only collection of
//! regions a front-end accumulates over one sitting. The session is plain
//! caller-owned state passed by reference into the pure tabulation core;
//! nothing in this crate holds it globally.

use palette::Srgb;

/// One sampled pixel: an 8-bit RGB triple
pub type PixelSample = Srgb<u8>;

/// Label for the region at the given insertion index ("Area 1", "Area 2", ...)
pub fn area_label(index: usize) -> String {
    format!("Area {}", index + 1)
}

/// An ordered sequence of pixels sampled from one neighborhood
///
/// Regions sampled from an image record the clicked center and window
/// radius; regions built directly from a pixel list (tests, non-image
/// callers) carry neither.
#[derive(Debug, Clone, PartialEq)]
pub struct Region {
    center: Option<(u32, u32)>,
    radius: Option<u32>,
    pixels: Vec<PixelSample>,
}

impl Region {
    /// Build a region from a raw pixel list
    pub fn from_pixels(pixels: Vec<PixelSample>) -> Self {
        Self {
            center: None,
            radius: None,
            pixels,
        }
    }

    /// Build a region sampled from an image neighborhood
    pub fn sampled(center: (u32, u32), radius: u32, pixels: Vec<PixelSample>) -> Self {
        Self {
            center: Some(center),
            radius: Some(radius),
            pixels,
        }
    }

    /// Sampled pixels, in scan order
    pub fn pixels(&self) -> &[PixelSample] {
        &self.pixels
    }

    /// Number of sampled pixels
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True when the region holds no pixels (e.g. a click entirely outside
    /// the image bounds)
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Clicked center coordinate, when sampled from an image
    pub fn center(&self) -> Option<(u32, u32)> {
        self.center
    }

    /// Sampling window radius, when sampled from an image
    pub fn radius(&self) -> Option<u32> {
        self.radius
    }

    /// Channel-wise mean pixel, rounded to 8 bits
    ///
    /// Returns `None` for an empty region.
    pub fn mean_rgb(&self) -> Option<PixelSample> {
        if self.pixels.is_empty() {
            return None;
        }
        let n = self.pixels.len() as f64;
        let (mut r, mut g, mut b) = (0.0f64, 0.0f64, 0.0f64);
        for pixel in &self.pixels {
            r += pixel.red as f64;
            g += pixel.green as f64;
            b += pixel.blue as f64;
        }
        Some(Srgb::new(
            (r / n).round() as u8,
            (g / n).round() as u8,
            (b / n).round() as u8,
        ))
    }
}

/// Append-only collection of the regions sampled in one sitting
///
/// Owned by the interactive caller and passed by reference into the core.
/// Regions are identified by insertion order; there is no deletion or edit
/// path for the duration of a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSession {
    regions: Vec<Region>,
}

impl SampleSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a region, returning its insertion index
    pub fn add_region(&mut self, region: Region) -> usize {
        self.regions.push(region);
        self.regions.len() - 1
    }

    /// All regions, in insertion order
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// Number of regions sampled so far
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// True when no regions have been sampled
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Label of the region at `index` ("Area 1", "Area 2", ...)
    pub fn label(&self, index: usize) -> Option<String> {
        if index < self.regions.len() {
            Some(area_label(index))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_labels_are_one_based() {
        assert_eq!(area_label(0), "Area 1");
        assert_eq!(area_label(4), "Area 5");
    }

    #[test]
    fn test_session_is_append_only_in_order() {
        let mut session = SampleSession::new();
        assert!(session.is_empty());

        let first = session.add_region(Region::from_pixels(vec![Srgb::new(1, 1, 1)]));
        let second = session.add_region(Region::from_pixels(vec![Srgb::new(2, 2, 2)]));

        assert_eq!((first, second), (0, 1));
        assert_eq!(session.len(), 2);
        assert_eq!(session.label(0).as_deref(), Some("Area 1"));
        assert_eq!(session.label(1).as_deref(), Some("Area 2"));
        assert_eq!(session.label(2), None);
        assert_eq!(session.regions()[1].pixels()[0], Srgb::new(2, 2, 2));
    }

    #[test]
    fn test_region_mean_rgb() {
        let region = Region::from_pixels(vec![Srgb::new(0, 10, 255), Srgb::new(2, 20, 255)]);
        assert_eq!(region.mean_rgb(), Some(Srgb::new(1, 15, 255)));

        assert_eq!(Region::from_pixels(vec![]).mean_rgb(), None);
    }

    #[test]
    fn test_sampled_region_records_window() {
        let region = Region::sampled((12, 34), 10, vec![Srgb::new(0, 0, 0)]);
        assert_eq!(region.center(), Some((12, 34)));
        assert_eq!(region.radius(), Some(10));
    }
}
