//! Selection algorithms producing keep-masks.
//!
//! - **Hue mask**: threshold the hue of a rectangular region, then dilate
//!
//! Masks are (height, width, 1) arrays with 255 = keep original, 0 = filtered.

pub mod hue_mask;

pub use hue_mask::{compute_mask, MaskParams, Rect};
