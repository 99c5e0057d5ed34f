//! Paints `input/solo.jpg` and writes the filtered image, the hue mask and
//! the composite into `output/`.
//!
//! Logging goes to stderr; set `RUST_LOG=debug` for stage parameters.

use anyhow::Context;
use log::info;
use oilmask::PipelineConfig;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = PipelineConfig::default();
    let report = oilmask::run(&config)
        .with_context(|| format!("pipeline failed for {}", config.input.display()))?;

    info!(
        "Done: {}x{} image, {} pixels kept from the original",
        report.width, report.height, report.kept_pixels
    );
    Ok(())
}
