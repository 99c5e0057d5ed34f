//! Filter modules for the oil-paint pipeline.
//!
//! ## Supported Formats
//!
//! Filters take `ndarray` views of shape (height, width, channels) with
//! 8-bit samples:
//!
//! | Format | Shape | Description |
//! |--------|-------|-------------|
//! | Grayscale8 / Mask | (H, W, 1) | Single channel, 0-255 |
//! | RGB8 | (H, W, 3) | Three colour channels in codec order |
//! | RGBA8 | (H, W, 4) | RGB + alpha |
//!
//! Every filter allocates a fresh output and never mutates its input.
//!
//! ## Filter Categories
//!
//! - **Stylize**: oil_paint
//! - **Color science**: rgb_to_hsv
//! - **Morphology**: elliptical structuring element, dilate
//! - **Composite**: mask-driven combine

pub mod color_science;
pub mod composite;
pub mod morphology;
pub mod stylize;
