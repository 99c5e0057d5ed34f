//! Pipeline configuration.
//!
//! All parameters are compiled in; `PipelineConfig::default()` is the
//! configuration the binary runs with. Tests build their own instances.

use std::path::PathBuf;

use crate::error::ConfigError;
use crate::filters::stylize::OilPaintParams;
use crate::selection::MaskParams;

/// Default input image.
pub const DEFAULT_INPUT: &str = "input/solo.jpg";
/// Default directory receiving the three output images.
pub const DEFAULT_OUTPUT_DIR: &str = "output";

pub const FILTERED_FILE: &str = "filtered.png";
pub const MASK_FILE: &str = "mask.png";
pub const COMBINED_FILE: &str = "combined.png";

/// Everything a pipeline run needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub oil: OilPaintParams,
    pub mask: MaskParams,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            oil: OilPaintParams::default(),
            mask: MaskParams::default(),
        }
    }
}

impl PipelineConfig {
    /// Default parameters reading `input` and writing into `output_dir`.
    pub fn with_paths(input: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output_dir: output_dir.into(),
            ..Self::default()
        }
    }

    pub fn filtered_path(&self) -> PathBuf {
        self.output_dir.join(FILTERED_FILE)
    }

    pub fn mask_path(&self) -> PathBuf {
        self.output_dir.join(MASK_FILE)
    }

    pub fn combined_path(&self) -> PathBuf {
        self.output_dir.join(COMBINED_FILE)
    }

    /// Validate configuration values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.input.as_os_str().is_empty() {
            return Err(ConfigError::Validation("input path must not be empty".into()));
        }
        if self.oil.radius == 0 {
            return Err(ConfigError::Validation("oil.radius must be > 0".into()));
        }
        if self.oil.levels == 0 {
            return Err(ConfigError::Validation("oil.levels must be > 0".into()));
        }
        if self.mask.dilation_size == 0 {
            return Err(ConfigError::Validation(
                "mask.dilation_size must be > 0".into(),
            ));
        }
        if self.mask.region.width == 0 || self.mask.region.height == 0 {
            return Err(ConfigError::Validation(
                "mask.region must have a non-zero width and height".into(),
            ));
        }
        Ok(())
    }
}
