//! Error types for the sample_colors library

use thiserror::Error;

/// Result type alias for sample_colors operations
pub type Result<T> = std::result::Result<T, SamplingError>;

/// Error types for sampling, tabulation, and export operations
///
/// The conversion core itself never fails: achromatic and pure-black inputs
/// are handled by guarded branches, not errors. Everything that can fail
/// lives at the edges: decoding an image, writing an export file, or being
/// asked to tabulate nothing.
#[derive(Error, Debug)]
pub enum SamplingError {
    /// Image file could not be loaded or decoded
    #[error("Failed to load image: {message}")]
    ImageLoadError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Export file could not be written
    #[error("Export failed: {message}")]
    ExportError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Nothing to tabulate (no regions sampled, or no channels requested)
    #[error("No data to tabulate: {reason}")]
    NoData { reason: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },
}

impl SamplingError {
    /// Create an image load error with context
    pub fn image_load<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ImageLoadError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create an export error with context
    pub fn export<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ExportError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Create a no-data error
    pub fn no_data(reason: impl Into<String>) -> Self {
        Self::NoData {
            reason: reason.into(),
        }
    }

    /// Create an invalid parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Check if this error indicates a recoverable condition
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SamplingError::NoData { .. } | SamplingError::InvalidParameter { .. }
        )
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self {
            SamplingError::ImageLoadError { .. } => {
                "Could not load the image. Please check the file format and try again.".to_string()
            }
            SamplingError::NoData { .. } => {
                "Please select areas on the image first.".to_string()
            }
            SamplingError::InvalidParameter { parameter, .. } => {
                format!("The value given for '{}' is not usable.", parameter)
            }
            SamplingError::ExportError { .. } => {
                "Could not write the output file. Please check the destination path.".to_string()
            }
        }
    }
}
