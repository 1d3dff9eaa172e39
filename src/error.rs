//! Error types for avatar construction and options loading

use thiserror::Error;

/// Errors raised while validating avatar options
///
/// Only the first violated check is reported. Rendering itself never fails.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigurationError {
    #[error("Font size multiplier must be a number between 0 and 2, was: {value}")]
    FontSizeMultiplier { value: f64 },

    #[error("Colors must be a divider of 360 e.g. 24 but not 16, was: {value}")]
    Colors { value: u32 },

    #[error("Size is not a positive integer, was: {value}")]
    Size { value: u32 },

    #[error("Text opacity should be the value of 0 to 1, was: {value}")]
    TextOpacity { value: f64 },
}

/// Errors that can occur when loading options from a TOML file
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("Failed to read options file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse options TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid options: {0}")]
    Configuration(#[from] ConfigurationError),
}
