//! Stylize filters: Oil Paint.
//!
//! The oil-paint effect replaces every pixel with the average colour of the
//! most frequent intensity bucket in its neighbourhood, flattening fine
//! texture into brush-like patches.
//!
//! ## Supported Formats
//!
//! - **Grayscale**: (height, width, 1) - intensity is the sample itself
//! - **RGB**: (height, width, 3) - intensity is the mean of the 3 channels
//! - **RGBA**: (height, width, 4) - RGB as above, alpha copied from the centre pixel

use ndarray::{Array3, ArrayView3};

use crate::error::FilterError;

/// Initial "most frequent" count of the legacy oil-paint implementation.
///
/// With a seed of 1 a bucket needs at least two hits before it can win;
/// until then bucket 0 is reported and its channel sums are divided by the
/// seed. A seed of 0 gives a plain plurality vote.
pub const LEGACY_MODE_SEED: u32 = 1;

/// Parameters of the oil-paint filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OilPaintParams {
    /// Half-width of the square neighbourhood window (>= 1)
    pub radius: u32,
    /// Number of intensity quantization levels (>= 1); buckets are `0..=levels`
    pub levels: u32,
    /// Starting value of the mode tracker, see [`LEGACY_MODE_SEED`]
    pub mode_seed: u32,
}

impl OilPaintParams {
    pub fn new(radius: u32, levels: u32) -> Self {
        Self {
            radius,
            levels,
            mode_seed: LEGACY_MODE_SEED,
        }
    }

    pub fn with_mode_seed(mut self, mode_seed: u32) -> Self {
        self.mode_seed = mode_seed;
        self
    }

    pub fn validate(&self) -> Result<(), FilterError> {
        if self.radius == 0 {
            return Err(FilterError::InvalidParameter(
                "oil paint radius must be >= 1".into(),
            ));
        }
        if self.levels == 0 {
            return Err(FilterError::InvalidParameter(
                "oil paint levels must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for OilPaintParams {
    fn default() -> Self {
        Self::new(5, 20)
    }
}

// ============================================================================
// Intensity Histogram
// ============================================================================

/// Per-pixel histogram of intensity buckets with running channel sums.
struct Histogram {
    counts: Vec<u32>,
    sums: Vec<[u64; 3]>,
    max_count: u32,
    max_index: usize,
}

impl Histogram {
    fn new(levels: u32) -> Self {
        let len = levels as usize + 1;
        Self {
            counts: vec![0; len],
            sums: vec![[0; 3]; len],
            max_count: 0,
            max_index: 0,
        }
    }

    fn reset(&mut self, seed: u32) {
        self.counts.fill(0);
        self.sums.fill([0; 3]);
        self.max_count = seed;
        self.max_index = 0;
    }

    /// Strictly-greater comparison: on ties the earlier leader keeps the mode.
    #[inline]
    fn add(&mut self, bucket: usize, sample: [u8; 3]) {
        self.counts[bucket] += 1;
        if self.counts[bucket] > self.max_count {
            self.max_count = self.counts[bucket];
            self.max_index = bucket;
        }
        let sums = &mut self.sums[bucket];
        sums[0] += sample[0] as u64;
        sums[1] += sample[1] as u64;
        sums[2] += sample[2] as u64;
    }

    /// Channel sums of the winning bucket divided by the mode count.
    #[inline]
    fn mode_average(&self) -> [u8; 3] {
        // max_count is 0 only for an empty window, which clamping never produces
        let divisor = self.max_count.max(1) as u64;
        let sums = self.sums[self.max_index];
        [
            (sums[0] / divisor).min(255) as u8,
            (sums[1] / divisor).min(255) as u8,
            (sums[2] / divisor).min(255) as u8,
        ]
    }
}

/// Quantize a mean intensity (0-255) into a bucket in `0..=levels`.
#[inline]
fn intensity_bucket(mean: f32, scale: f32, levels: u32) -> usize {
    ((mean * scale).floor() as u32).min(levels) as usize
}

// ============================================================================
// Oil Paint
// ============================================================================

/// Apply the oil-paint effect - u8 version.
///
/// For each output pixel, a `(2 * radius + 1)` square window centred on it
/// (shrunk at the image border) is scanned column by column. Each sample is
/// assigned the bucket `floor(mean * levels / 255)`; the output is the
/// average colour of the most frequent bucket.
///
/// # Arguments
/// * `input` - Image with 1, 3, or 4 channels (height, width, channels)
/// * `params` - Window radius, quantization levels and mode seed
///
/// # Returns
/// Painted image with the same shape as `input`
pub fn oil_paint_u8(
    input: ArrayView3<u8>,
    params: &OilPaintParams,
) -> Result<Array3<u8>, FilterError> {
    params.validate()?;

    let (height, width, channels) = input.dim();
    if !matches!(channels, 1 | 3 | 4) {
        return Err(FilterError::UnsupportedChannels {
            channels,
            expected: "1, 3 or 4",
        });
    }

    let mut output = Array3::<u8>::zeros((height, width, channels));
    let color_channels = if channels == 4 { 3 } else { channels };
    let radius = params.radius as usize;
    let scale = params.levels as f32 / 255.0;
    let mut histogram = Histogram::new(params.levels);

    for y in 0..height {
        let y_start = y.saturating_sub(radius);
        let y_end = (y + radius + 1).min(height);

        for x in 0..width {
            let x_start = x.saturating_sub(radius);
            let x_end = (x + radius + 1).min(width);

            histogram.reset(params.mode_seed);

            for sx in x_start..x_end {
                for sy in y_start..y_end {
                    let sample = if color_channels == 1 {
                        let v = input[[sy, sx, 0]];
                        [v, 0, 0]
                    } else {
                        [input[[sy, sx, 0]], input[[sy, sx, 1]], input[[sy, sx, 2]]]
                    };

                    let mean = if color_channels == 1 {
                        sample[0] as f32
                    } else {
                        (sample[0] as u32 + sample[1] as u32 + sample[2] as u32) as f32 / 3.0
                    };

                    histogram.add(intensity_bucket(mean, scale, params.levels), sample);
                }
            }

            let painted = histogram.mode_average();
            for c in 0..color_channels {
                output[[y, x, c]] = painted[c];
            }
            if channels == 4 {
                output[[y, x, 3]] = input[[y, x, 3]];
            }
        }
    }

    Ok(output)
}
