//! Error types for the oil-paint / hue-mask pipeline.
//!
//! Filters report parameter and shape problems through [`FilterError`];
//! the pipeline driver wraps those together with codec and filesystem
//! failures in [`Error`], keeping the offending path in the message.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for pipeline runs.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration values are invalid
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A filter stage rejected its input
    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),

    /// Input image could not be read or decoded
    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Output image could not be encoded or written
    #[error("Failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Region of interest does not fit inside the decoded image
    #[error(
        "Region ({x}, {y}, {width}x{height}) exceeds image bounds {image_width}x{image_height}"
    )]
    RegionOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        image_width: usize,
        image_height: usize,
    },

    /// General I/O errors (output directory creation)
    #[error("IO error for {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A configuration value is out of range
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

/// Errors raised by the individual image stages.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FilterError {
    /// A numeric parameter is outside its accepted range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Input buffers disagree in shape
    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),

    /// Channel count the stage cannot handle
    #[error("Unsupported channel count {channels}, expected one of {expected}")]
    UnsupportedChannels {
        channels: usize,
        expected: &'static str,
    },
}
