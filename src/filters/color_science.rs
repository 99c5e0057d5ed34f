//! Color science: RGB -> HSV conversion.
//!
//! Produces 8-bit HSV using the common compact convention:
//! - **H**: 0-179, degrees halved so a full turn fits in a byte
//! - **S**: 0-255
//! - **V**: 0-255
//!
//! ## Supported Formats
//!
//! - **Grayscale (1 channel)**: Rejected (hue requires RGB)
//! - **RGB (3 channels)**: Converted
//! - **RGBA (4 channels)**: RGB converted, alpha dropped

use ndarray::{Array3, ArrayView3};

use crate::error::FilterError;

/// Hue range of the 8-bit representation (degrees / 2).
pub const HUE_RANGE: i32 = 180;

/// Fractional bits of the fixed-point divisions.
const HSV_SHIFT: u32 = 12;

// ============================================================================
// Color Space Conversion Utilities
// ============================================================================

/// `round((numerator << HSV_SHIFT) / divisor)`, 0 for a zero divisor.
#[inline]
fn fixed_reciprocal(numerator: i32, divisor: i32) -> i32 {
    if divisor == 0 {
        return 0;
    }
    (((numerator << HSV_SHIFT) as f64) / divisor as f64).round_ties_even() as i32
}

/// `(value * factor) / 2^HSV_SHIFT`, rounded half up.
#[inline]
fn fixed_mul(value: i32, factor: i32) -> i32 {
    (value * factor + (1 << (HSV_SHIFT - 1))) >> HSV_SHIFT
}

/// Convert one RGB sample to 8-bit HSV.
/// Input: r, g, b in 0-255
/// Output: (h, s, v) where h is 0-179, s and v are 0-255
///
/// Uses 12-bit fixed-point reciprocals so results match the usual
/// table-driven 8-bit conversion exactly, including rounding at hue
/// boundaries.
#[inline]
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let (r, g, b) = (r as i32, g as i32, b as i32);
    let v = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = v - min;

    let s = fixed_mul(diff, fixed_reciprocal(255, v));

    // Red wins ties over green, green over blue
    let sector = if v == r {
        g - b
    } else if v == g {
        b - r + 2 * diff
    } else {
        r - g + 4 * diff
    };

    // 6 * diff never exceeds 1530, so the reciprocal keeps its precision
    let mut h = fixed_mul(sector, fixed_reciprocal(HUE_RANGE, 6 * diff));
    if h < 0 {
        h += HUE_RANGE;
    }

    (h as u8, s as u8, v as u8)
}

// ============================================================================
// Image Conversion
// ============================================================================

/// Convert an RGB(A) image to 8-bit HSV.
///
/// # Arguments
/// * `input` - Image with 3 or 4 channels (height, width, channels)
///
/// # Returns
/// HSV image of shape (height, width, 3)
pub fn rgb_to_hsv_u8(input: ArrayView3<u8>) -> Result<Array3<u8>, FilterError> {
    let (height, width, channels) = input.dim();
    if channels != 3 && channels != 4 {
        return Err(FilterError::UnsupportedChannels {
            channels,
            expected: "3 or 4",
        });
    }

    let mut output = Array3::<u8>::zeros((height, width, 3));

    for y in 0..height {
        for x in 0..width {
            let (h, s, v) = rgb_to_hsv(input[[y, x, 0]], input[[y, x, 1]], input[[y, x, 2]]);
            output[[y, x, 0]] = h;
            output[[y, x, 1]] = s;
            output[[y, x, 2]] = v;
        }
    }

    Ok(output)
}
