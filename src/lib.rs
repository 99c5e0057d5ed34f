//! Oil-paint stylization with a hue-selected keep-mask.
//!
//! A still image is painted with an oil-paint filter, a keep-mask is
//! computed by hue-thresholding a rectangular region (e.g. a face), and the
//! two are composited so the masked area keeps its original pixels.
//!
//! ## Image Format
//! Stages operate on `ndarray` arrays of shape (height, width, channels):
//! - **RGB**: (height, width, 3) - colour images in codec channel order
//! - **Mask**: (height, width, 1) - 0xFF = keep original, 0x00 = filtered
//!
//! ## Pipeline
//! [`pipeline::run`] decodes the configured input, runs
//! oil paint -> hue mask -> composite and writes each result as PNG.
//! [`pipeline::process`] runs the same stages purely in memory.

pub mod config;
pub mod error;
pub mod filters;
pub mod io;
pub mod pipeline;
pub mod selection;

pub use config::PipelineConfig;
pub use error::{ConfigError, Error, FilterError, Result};
pub use pipeline::{process, run, PipelineReport, StageOutputs};
