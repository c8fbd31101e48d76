//! Configuration for sampling and export
//!
//! All tunable parameters of a sampling run, serializable to JSON so a
//! front-end can persist its settings between sittings:
//!
//! ```no_run
//! use sample_colors::SamplerConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = SamplerConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use the defaults
//! let config = SamplerConfig::default();
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use serde::{Deserialize, Serialize};

use crate::color::Channel;
use crate::constants::sampling;

/// Complete configuration for a sampling run
///
/// The defaults reproduce the interactive application's behavior: a 21x21
/// sampling window and the full 14-channel sheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Half-width of the square sampling window around each click
    pub sample_radius: u32,

    /// Channels to tabulate, in sheet column order
    pub channels: Vec<Channel>,

    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
}

/// Export parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Field separator for spreadsheet-style output
    pub delimiter: char,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            sample_radius: sampling::DEFAULT_RADIUS,
            channels: Channel::ALL.to_vec(),
            export: ExportConfig::default(),
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { delimiter: ',' }
    }
}

impl SamplerConfig {
    /// Load configuration from a JSON file
    pub fn from_json_file(path: &std::path::Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn to_json_file(&self, path: &std::path::Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_interactive_behavior() {
        let config = SamplerConfig::default();
        assert_eq!(config.sample_radius, 10);
        assert_eq!(config.channels.len(), 14);
        assert_eq!(config.export.delimiter, ',');
    }

    #[test]
    fn test_json_roundtrip() {
        let config = SamplerConfig {
            sample_radius: 4,
            channels: Channel::parse_set("cmyk").unwrap(),
            export: ExportConfig { delimiter: ';' },
        };

        let json = serde_json::to_string(&config).unwrap();
        let restored: SamplerConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, config);
    }

    #[test]
    fn test_missing_export_section_takes_default() {
        let json = r#"{"sample_radius": 3, "channels": ["R", "G", "B"]}"#;
        let config: SamplerConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.export.delimiter, ',');
        assert_eq!(config.channels, Channel::parse_set("rgb").unwrap());
    }
}
