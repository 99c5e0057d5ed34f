//! Morphology filters: Dilate with an elliptical structuring element.
//!
//! ## Supported Formats
//!
//! Dilation accepts images with any channel count and processes every
//! channel independently. Masks are expected as (height, width, 1).

use ndarray::{Array2, Array3, ArrayView3};

use crate::error::FilterError;

// ============================================================================
// Structuring Element
// ============================================================================

/// Binary kernel shape used by morphological operations.
///
/// The anchor is the element centre `(width / 2, height / 2)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructuringElement {
    cells: Array2<bool>,
}

impl StructuringElement {
    /// Build a filled ellipse inscribed in a `width x height` box.
    ///
    /// Each row `i` spans `c - dx ..= c + dx` around the centre column `c`,
    /// with `dx = round(c * sqrt((r^2 - dy^2) / r^2))`, `r = height / 2` and
    /// `dy = i - r`.
    pub fn ellipse(width: u32, height: u32) -> Result<Self, FilterError> {
        if width == 0 || height == 0 {
            return Err(FilterError::InvalidParameter(format!(
                "structuring element size must be >= 1, got {width}x{height}"
            )));
        }

        let (w, h) = (width as i64, height as i64);
        let r = h / 2;
        let c = w / 2;
        let inv_r2 = if r > 0 { 1.0 / (r * r) as f64 } else { 0.0 };

        let mut cells = Array2::<bool>::from_elem((height as usize, width as usize), false);

        for i in 0..h {
            let dy = i - r;
            if dy.abs() > r {
                continue;
            }
            let dx = (c as f64 * (((r * r - dy * dy) as f64) * inv_r2).sqrt()).round_ties_even()
                as i64;
            let j1 = (c - dx).max(0);
            let j2 = (c + dx + 1).min(w);
            for j in j1..j2 {
                cells[[i as usize, j as usize]] = true;
            }
        }

        Ok(Self { cells })
    }

    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    pub fn anchor(&self) -> (usize, usize) {
        (self.width() / 2, self.height() / 2)
    }

    /// Whether the element covers `(row, col)`.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells[[row, col]]
    }

    /// Relative `(dy, dx)` offsets of all covered cells.
    fn offsets(&self) -> Vec<(isize, isize)> {
        let (ax, ay) = self.anchor();
        self.cells
            .indexed_iter()
            .filter(|&(_, &on)| on)
            .map(|((row, col), _)| (row as isize - ay as isize, col as isize - ax as isize))
            .collect()
    }
}

// ============================================================================
// Dilate
// ============================================================================

/// Apply dilation to image - u8 version.
///
/// Each output sample is the maximum of the input samples covered by the
/// structuring element anchored at that position. Samples outside the image
/// are ignored.
///
/// # Arguments
/// * `input` - Image with any channel count (height, width, channels)
/// * `element` - Structuring element
///
/// # Returns
/// Dilated image with same shape
pub fn dilate_u8(input: ArrayView3<u8>, element: &StructuringElement) -> Array3<u8> {
    let (height, width, channels) = input.dim();
    let mut output = Array3::<u8>::zeros((height, width, channels));
    let offsets = element.offsets();

    for y in 0..height {
        for x in 0..width {
            for c in 0..channels {
                let mut max_val = 0u8;

                for &(dy, dx) in &offsets {
                    let sy = y as isize + dy;
                    let sx = x as isize + dx;
                    if sy < 0 || sy >= height as isize || sx < 0 || sx >= width as isize {
                        continue;
                    }
                    max_val = max_val.max(input[[sy as usize, sx as usize, c]]);
                    if max_val == u8::MAX {
                        break;
                    }
                }

                output[[y, x, c]] = max_val;
            }
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(element: &StructuringElement) -> Vec<String> {
        (0..element.height())
            .map(|r| {
                (0..element.width())
                    .map(|c| if element.contains(r, c) { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_ellipse_5x5_shape() {
        let element = StructuringElement::ellipse(5, 5).unwrap();
        assert_eq!(
            rows(&element),
            vec!["..#..", "#####", "#####", "#####", "..#.."]
        );
    }

    #[test]
    fn test_ellipse_3x3_is_cross() {
        let element = StructuringElement::ellipse(3, 3).unwrap();
        assert_eq!(rows(&element), vec![".#.", "###", ".#."]);
    }

    #[test]
    fn test_ellipse_1x1_is_single_cell() {
        let element = StructuringElement::ellipse(1, 1).unwrap();
        assert_eq!(rows(&element), vec!["#"]);
        assert_eq!(element.anchor(), (0, 0));
    }

    #[test]
    fn test_ellipse_rejects_zero_size() {
        assert!(StructuringElement::ellipse(0, 5).is_err());
    }

    #[test]
    fn test_dilate_u8_grows_bright() {
        let mut img = Array3::<u8>::zeros((5, 5, 1));
        img[[2, 2, 0]] = 255;

        let element = StructuringElement::ellipse(3, 3).unwrap();
        let result = dilate_u8(img.view(), &element);

        assert_eq!(result[[2, 1, 0]], 255);
        assert_eq!(result[[2, 3, 0]], 255);
        assert_eq!(result[[1, 2, 0]], 255);
        assert_eq!(result[[3, 2, 0]], 255);
        // Cross-shaped element leaves the diagonals untouched
        assert_eq!(result[[1, 1, 0]], 0);
        assert_eq!(result[[0, 2, 0]], 0);
    }

    #[test]
    fn test_dilate_identity_element() {
        let mut img = Array3::<u8>::zeros((3, 4, 1));
        img[[0, 3, 0]] = 9;
        img[[2, 1, 0]] = 200;

        let element = StructuringElement::ellipse(1, 1).unwrap();
        assert_eq!(dilate_u8(img.view(), &element), img);
    }

    #[test]
    fn test_dilate_at_border_ignores_outside() {
        let mut img = Array3::<u8>::zeros((3, 3, 1));
        img[[0, 0, 0]] = 128;

        let element = StructuringElement::ellipse(5, 5).unwrap();
        let result = dilate_u8(img.view(), &element);

        assert_eq!(result[[0, 2, 0]], 128);
        assert_eq!(result[[2, 0, 0]], 128);
        assert_eq!(result[[1, 1, 0]], 128);
        // (2, 2) is two rows and two columns away: outside the 5x5 ellipse
        assert_eq!(result[[2, 2, 0]], 0);
    }

    #[test]
    fn test_dilate_multichannel_independent() {
        let mut img = Array3::<u8>::zeros((1, 3, 3));
        img[[0, 0, 0]] = 50;
        img[[0, 2, 2]] = 70;

        let element = StructuringElement::ellipse(3, 3).unwrap();
        let result = dilate_u8(img.view(), &element);

        assert_eq!(result[[0, 1, 0]], 50);
        assert_eq!(result[[0, 1, 1]], 0);
        assert_eq!(result[[0, 1, 2]], 70);
    }
}
