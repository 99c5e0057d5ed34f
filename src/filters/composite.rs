//! Mask-driven compositing of two equally sized images.

use ndarray::{Array3, ArrayView3};

use crate::error::FilterError;

/// Select per pixel between `original` and `filtered` - u8 version.
///
/// A non-zero mask sample keeps the original pixel, zero takes the
/// filtered one.
///
/// # Arguments
/// * `original` - Unmodified image (height, width, channels)
/// * `filtered` - Stylized image of the same shape
/// * `mask` - Single-channel mask (height, width, 1)
///
/// # Returns
/// Composited image with the shape of `original`
pub fn combine_u8(
    original: ArrayView3<u8>,
    filtered: ArrayView3<u8>,
    mask: ArrayView3<u8>,
) -> Result<Array3<u8>, FilterError> {
    let (height, width, channels) = original.dim();

    if filtered.dim() != original.dim() {
        return Err(FilterError::ShapeMismatch(format!(
            "filtered image is {:?}, original is {:?}",
            filtered.dim(),
            original.dim()
        )));
    }
    if mask.dim() != (height, width, 1) {
        return Err(FilterError::ShapeMismatch(format!(
            "mask is {:?}, expected ({height}, {width}, 1)",
            mask.dim()
        )));
    }

    let mut output = Array3::<u8>::zeros((height, width, channels));

    for y in 0..height {
        for x in 0..width {
            let source = if mask[[y, x, 0]] != 0 {
                original.view()
            } else {
                filtered.view()
            };
            for c in 0..channels {
                output[[y, x, c]] = source[[y, x, c]];
            }
        }
    }

    Ok(output)
}
