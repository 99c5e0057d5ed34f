//! Pipeline driver: decode -> oil paint -> hue mask -> composite.
//!
//! Each stage result is written to the output directory as soon as it is
//! available, so a failure late in the run still leaves the earlier images.

use std::path::{Path, PathBuf};
use std::time::Instant;

use log::{debug, info};
use ndarray::{Array3, ArrayView3};

use crate::config::PipelineConfig;
use crate::error::{Error, Result};
use crate::filters::composite::combine_u8;
use crate::filters::stylize::oil_paint_u8;
use crate::io::{load_rgb_image, save_image};
use crate::selection::hue_mask::compute_mask_detailed;

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineReport {
    pub width: usize,
    pub height: usize,
    pub filtered_path: PathBuf,
    pub mask_path: PathBuf,
    pub combined_path: PathBuf,
    /// Mask pixels that keep the original image
    pub kept_pixels: usize,
}

/// In-memory results of the three stages.
pub struct StageOutputs {
    pub filtered: Array3<u8>,
    pub mask: Array3<u8>,
    pub combined: Array3<u8>,
    pub kept_pixels: usize,
}

/// Run every stage on an already decoded image without touching the disk.
pub fn process(original: ArrayView3<u8>, config: &PipelineConfig) -> Result<StageOutputs> {
    config.validate()?;
    process_with(original, config, |_, _| Ok(()))
}

/// Shared stage sequence; `emit` receives each intermediate image as soon
/// as it exists. Callers validate `config` first.
fn process_with<F>(
    original: ArrayView3<u8>,
    config: &PipelineConfig,
    mut emit: F,
) -> Result<StageOutputs>
where
    F: FnMut(Stage, ArrayView3<u8>) -> Result<()>,
{
    let (height, width, _) = original.dim();
    let region = config.mask.region;
    if !region.fits_within(width, height) {
        return Err(Error::RegionOutOfBounds {
            x: region.x,
            y: region.y,
            width: region.width,
            height: region.height,
            image_width: width,
            image_height: height,
        });
    }

    let start = Instant::now();
    debug!(
        "Oil paint: radius={}, levels={}, mode_seed={}",
        config.oil.radius, config.oil.levels, config.oil.mode_seed
    );
    let filtered = oil_paint_u8(original, &config.oil)?;
    info!("Oil paint finished in {:?}", start.elapsed());
    emit(Stage::Filtered, filtered.view())?;

    let start = Instant::now();
    debug!(
        "Hue mask: region={:?}, hue_threshold={}, dilation_size={}",
        region, config.mask.hue_threshold, config.mask.dilation_size
    );
    let selection = compute_mask_detailed(original, &config.mask)?;
    info!(
        "Hue mask finished in {:?}: {} seed pixels, {} after dilation",
        start.elapsed(),
        selection.seed_count,
        selection.pixel_count
    );
    emit(Stage::Mask, selection.mask.view())?;

    let start = Instant::now();
    let combined = combine_u8(original, filtered.view(), selection.mask.view())?;
    info!("Composite finished in {:?}", start.elapsed());
    emit(Stage::Combined, combined.view())?;

    Ok(StageOutputs {
        filtered,
        mask: selection.mask,
        combined,
        kept_pixels: selection.pixel_count,
    })
}

#[derive(Debug, Clone, Copy)]
enum Stage {
    Filtered,
    Mask,
    Combined,
}

/// Decode the input, run all stages and write the three output images.
pub fn run(config: &PipelineConfig) -> Result<PipelineReport> {
    config.validate()?;

    info!("Loading {}", config.input.display());
    let original = load_rgb_image(&config.input)?;
    let (height, width, _) = original.dim();
    info!("Decoded {}x{} image", width, height);

    let filtered_path = config.filtered_path();
    let mask_path = config.mask_path();
    let combined_path = config.combined_path();

    let outputs = process_with(original.view(), config, |stage, image| {
        let path: &Path = match stage {
            Stage::Filtered => &filtered_path,
            Stage::Mask => &mask_path,
            Stage::Combined => &combined_path,
        };
        save_image(image, path)?;
        info!("Wrote {}", path.display());
        Ok(())
    })?;

    Ok(PipelineReport {
        width,
        height,
        filtered_path,
        mask_path,
        combined_path,
        kept_pixels: outputs.kept_pixels,
    })
}
