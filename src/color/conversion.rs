//! Color model conversions from 8-bit RGB
//!
//! Provides the deterministic per-pixel conversions behind the frequency
//! tables:
//! - RGB to CMYK (subtractive, pure-black guarded)
//! - RGB to HSI (angular hue as a fraction of a full turn)
//! - RGB to HSL (6-way piecewise hue)
//! - RGB to grayscale (fixed luma weights, 0-255 scale)
//!
//! Algorithm tag: `algo-angular-hue-conversion`

use palette::Srgb;
use serde::{Deserialize, Serialize};

use crate::constants::{hue, luma};

/// CMYK color value, each component in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f32,
    pub m: f32,
    pub y: f32,
    pub k: f32,
}

/// HSI color value: hue in [0, 1) as a fraction of a full turn,
/// saturation in [0, 1], intensity (mean of channels) in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsi {
    pub h: f32,
    pub s: f32,
    pub i: f32,
}

/// HSL color value: hue in [0, 1) as a fraction of a full turn,
/// saturation in [0, 1], lightness in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: f32,
    pub s: f32,
    pub l: f32,
}

/// All derived representations of one sampled pixel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvertedSample {
    /// The source pixel, untouched
    pub rgb: Srgb<u8>,
    pub cmyk: Cmyk,
    pub hsi: Hsi,
    pub hsl: Hsl,
    /// Luma-weighted grayscale on the 0-255 scale (see [`ColorConverter::to_gray`])
    pub gray: f32,
}

/// Stateless converter for the supported color models
///
/// Every operation is a pure function of its argument: identical inputs
/// always produce identical outputs, and no input in the 8-bit RGB domain
/// can make a conversion panic. CMYK, HSI, and HSL are always recomputed
/// from RGB; there is no reverse path.
pub struct ColorConverter {
    /// Epsilon added to hue-formula denominators
    hue_epsilon: f32,
}

impl Default for ColorConverter {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorConverter {
    /// Create a converter with the standard epsilon guard
    pub fn new() -> Self {
        Self {
            hue_epsilon: hue::DENOM_EPSILON,
        }
    }

    /// Convert RGB to CMYK
    ///
    /// # Arguments
    ///
    /// * `rgb` - 8-bit RGB pixel
    ///
    /// # Returns
    ///
    /// CMYK with every component in [0, 1]. Pure black maps to
    /// `(0, 0, 0, 1)`; `k == 1` happens for no other input.
    pub fn to_cmyk(&self, rgb: Srgb<u8>) -> Cmyk {
        let (r, g, b) = normalize(rgb);
        let k = 1.0 - r.max(g).max(b);

        // Pure black: the (1 - k) denominators below would be zero
        if k >= 1.0 {
            return Cmyk {
                c: 0.0,
                m: 0.0,
                y: 0.0,
                k: 1.0,
            };
        }

        Cmyk {
            c: (1.0 - r - k) / (1.0 - k),
            m: (1.0 - g - k) / (1.0 - k),
            y: (1.0 - b - k) / (1.0 - k),
            k,
        }
    }

    /// Convert RGB to HSI
    ///
    /// Hue comes from the angular formula
    /// `arccos(0.5*((r-g)+(r-b)) / sqrt((r-g)^2 + (r-b)(g-b)))`, expressed
    /// as a fraction of a full turn and reflected when `b > g`.
    ///
    /// # Arguments
    ///
    /// * `rgb` - 8-bit RGB pixel
    ///
    /// # Returns
    ///
    /// HSI with hue in [0, 1), saturation in [0, 1], intensity in [0, 1].
    /// Achromatic inputs (`r == g == b`) yield `h = 0, s = 0` without
    /// entering the angular formula.
    pub fn to_hsi(&self, rgb: Srgb<u8>) -> Hsi {
        let (r, g, b) = normalize(rgb);
        let i = (r + g + b) / 3.0;

        if rgb.red == rgb.green && rgb.green == rgb.blue {
            return Hsi { h: 0.0, s: 0.0, i };
        }

        let min = r.min(g).min(b);
        let s = 1.0 - 3.0 * min / (r + g + b + self.hue_epsilon);

        let numerator = 0.5 * ((r - g) + (r - b));
        let denominator = ((r - g).powi(2) + (r - b) * (g - b)).sqrt() + self.hue_epsilon;
        let mut h = (numerator / denominator).acos() / (2.0 * std::f32::consts::PI);
        if b > g {
            h = 1.0 - h;
        }
        // acos of a rounding-overshot ratio; treat as achromatic
        if h.is_nan() {
            h = 0.0;
        }

        Hsi { h, s, i }
    }

    /// Convert RGB to HSL
    ///
    /// # Arguments
    ///
    /// * `rgb` - 8-bit RGB pixel
    ///
    /// # Returns
    ///
    /// HSL with hue in [0, 1), saturation in [0, 1], lightness in [0, 1].
    /// Achromatic inputs (`max == min`) yield `h = 0, s = 0`.
    pub fn to_hsl(&self, rgb: Srgb<u8>) -> Hsl {
        let (r, g, b) = normalize(rgb);
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if rgb.red == rgb.green && rgb.green == rgb.blue {
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let diff = max - min;
        let s = if l > 0.5 {
            diff / (2.0 - max - min)
        } else {
            diff / (max + min)
        };

        let h = if max == r {
            (g - b) / diff + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / diff + 2.0
        } else {
            (r - g) / diff + 4.0
        };

        Hsl { h: h / 6.0, s, l }
    }

    /// Convert RGB to luma-weighted grayscale
    ///
    /// Fixed weights `0.2989*R + 0.5870*G + 0.1140*B` applied to the raw
    /// 8-bit values, so the result stays on the 0-255 scale. This is the
    /// one conversion that does NOT normalize its output. This asymmetry is
    /// a fixed design choice that the grayscale bin indexing relies on.
    ///
    /// # Arguments
    ///
    /// * `rgb` - 8-bit RGB pixel
    ///
    /// # Returns
    ///
    /// Grayscale value in [0, 255). White lands at 254.97, not 255.0,
    /// because the published weights sum to 0.9999.
    pub fn to_gray(&self, rgb: Srgb<u8>) -> f32 {
        luma::R_WEIGHT * rgb.red as f32
            + luma::G_WEIGHT * rgb.green as f32
            + luma::B_WEIGHT * rgb.blue as f32
    }

    /// Compute every derived representation of one pixel
    ///
    /// # Arguments
    ///
    /// * `rgb` - 8-bit RGB pixel
    ///
    /// # Returns
    ///
    /// A [`ConvertedSample`] bundling the source pixel with its CMYK, HSI,
    /// HSL, and grayscale values.
    pub fn convert(&self, rgb: Srgb<u8>) -> ConvertedSample {
        ConvertedSample {
            rgb,
            cmyk: self.to_cmyk(rgb),
            hsi: self.to_hsi(rgb),
            hsl: self.to_hsl(rgb),
            gray: self.to_gray(rgb),
        }
    }
}

/// Scale an 8-bit pixel to [0, 1] channel fractions
fn normalize(rgb: Srgb<u8>) -> (f32, f32, f32) {
    (
        rgb.red as f32 / 255.0,
        rgb.green as f32 / 255.0,
        rgb.blue as f32 / 255.0,
    )
}
