//! Hue-threshold selection inside a rectangular region.
//!
//! Pixels of the region whose hue is below a threshold are kept (0xFF),
//! everything else is left to the filter (0x00). The raw selection is then
//! dilated with an elliptical element to soften its outline.

use ndarray::{Array3, ArrayView3};

use crate::error::FilterError;
use crate::filters::color_science::rgb_to_hsv_u8;
use crate::filters::morphology::{dilate_u8, StructuringElement};

/// Mask value for pixels taken from the original image.
pub const MASK_KEEP: u8 = 0xFF;
/// Mask value for pixels taken from the filtered image.
pub const MASK_FILTER: u8 = 0x00;

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Whether the rectangle lies completely inside a `width x height` image.
    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        self.x as u64 + self.width as u64 <= width as u64
            && self.y as u64 + self.height as u64 <= height as u64
    }

    /// Half-open pixel ranges `(x0..x1, y0..y1)` clipped to the image.
    fn clipped(&self, width: usize, height: usize) -> (usize, usize, usize, usize) {
        let x0 = (self.x as usize).min(width);
        let y0 = (self.y as usize).min(height);
        let x1 = (self.x as usize).saturating_add(self.width as usize).min(width);
        let y1 = (self.y as usize).saturating_add(self.height as usize).min(height);
        (x0, x1, y0, y1)
    }
}

/// Parameters of the hue mask stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskParams {
    /// Region inspected for kept pixels
    pub region: Rect,
    /// Hue (0-179 scale) below which a pixel is kept
    pub hue_threshold: u8,
    /// Side length of the elliptical dilation element (>= 1)
    pub dilation_size: u32,
}

impl Default for MaskParams {
    fn default() -> Self {
        Self {
            region: Rect::new(280, 580, 220, 160),
            hue_threshold: 10,
            dilation_size: 17,
        }
    }
}

/// Hue mask result with metadata.
pub struct HueMaskResult {
    /// Selection mask (255 = keep original, 0 = use filtered), shape (H, W, 1)
    pub mask: Array3<u8>,
    /// Pixels selected by the threshold before dilation
    pub seed_count: usize,
    /// Pixels selected after dilation
    pub pixel_count: usize,
}

/// Compute the keep-mask for an RGB(A) image.
///
/// # Arguments
/// * `input` - Image with 3 or 4 channels (height, width, channels)
/// * `params` - Region, hue threshold and dilation size
///
/// # Returns
/// Mask of shape (height, width, 1)
pub fn compute_mask(input: ArrayView3<u8>, params: &MaskParams) -> Result<Array3<u8>, FilterError> {
    compute_mask_detailed(input, params).map(|result| result.mask)
}

/// Compute the keep-mask with selection counts.
///
/// The region is clipped to the image; a region outside the image yields
/// an empty mask.
pub fn compute_mask_detailed(
    input: ArrayView3<u8>,
    params: &MaskParams,
) -> Result<HueMaskResult, FilterError> {
    let (height, width, _) = input.dim();
    let hsv = rgb_to_hsv_u8(input)?;
    let element = StructuringElement::ellipse(params.dilation_size, params.dilation_size)?;

    let mut raw = Array3::<u8>::from_elem((height, width, 1), MASK_FILTER);
    let mut seed_count = 0;

    let (x0, x1, y0, y1) = params.region.clipped(width, height);
    for y in y0..y1 {
        for x in x0..x1 {
            if hsv[[y, x, 0]] < params.hue_threshold {
                raw[[y, x, 0]] = MASK_KEEP;
                seed_count += 1;
            }
        }
    }

    let mask = dilate_u8(raw.view(), &element);
    let pixel_count = mask.iter().filter(|&&v| v != MASK_FILTER).count();

    Ok(HueMaskResult {
        mask,
        seed_count,
        pixel_count,
    })
}
