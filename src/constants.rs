//! Fixed numeric references for sampling and color conversion
//!
//! This module contains compile-time constants shared by the conversion
//! and tabulation code, grouped by concern.

/// Grayscale luma weights
///
/// The ITU-R BT.601 weighting commonly used for perceived-brightness
/// grayscale. Applied to the raw 8-bit channel values, so the grayscale
/// output stays on the 0-255 scale.
pub mod luma {
    /// Red channel weight
    pub const R_WEIGHT: f32 = 0.2989;

    /// Green channel weight
    pub const G_WEIGHT: f32 = 0.5870;

    /// Blue channel weight
    pub const B_WEIGHT: f32 = 0.1140;
}

/// Frequency table bin geometry
pub mod binning {
    /// Number of fixed-width bins per tabulated channel
    pub const BIN_COUNT: usize = 256;

    /// Largest valid bin index
    pub const MAX_BIN_INDEX: usize = BIN_COUNT - 1;
}

/// Neighborhood sampling parameters
pub mod sampling {
    /// Default half-width of the square sampling window around a clicked
    /// coordinate. Radius 10 gives a 21x21 window.
    pub const DEFAULT_RADIUS: u32 = 10;
}

/// Hue computation parameters
pub mod hue {
    /// Epsilon added to the angular-formula denominators so near-achromatic
    /// pixels cannot divide by zero. Exact achromatic inputs are guarded
    /// before the formula runs; this covers the remainder.
    pub const DENOM_EPSILON: f32 = 1e-6;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_luma_weights_sum() {
        // The BT.601 weights sum to 0.9999, not 1.0 exactly. The grayscale
        // conversion inherits that, so pin the published values here.
        let sum = luma::R_WEIGHT + luma::G_WEIGHT + luma::B_WEIGHT;
        assert!((sum - 0.9999).abs() < 1e-6);
    }

    #[test]
    fn test_bin_geometry() {
        assert_eq!(binning::BIN_COUNT, 256);
        assert_eq!(binning::MAX_BIN_INDEX, 255);
    }

    #[test]
    fn test_default_radius_window() {
        // Radius 10 must give a 21x21 window
        let side = 2 * sampling::DEFAULT_RADIUS + 1;
        assert_eq!(side * side, 441);
    }
}
