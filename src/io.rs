//! Image decode/encode helpers on top of the `image` crate.
//!
//! - `load_rgb_image`: read any format `image` recognises into an owned
//!   (H, W, 3) array.
//! - `save_image`: write a 1, 3 or 4 channel array; format follows the
//!   file extension.

use std::fs;
use std::path::Path;

use image::{DynamicImage, GrayImage, RgbImage, RgbaImage};
use ndarray::{Array3, ArrayView3};

use crate::error::{Error, FilterError, Result};

/// Load an image from disk and convert it to 8-bit RGB.
pub fn load_rgb_image(path: &Path) -> Result<Array3<u8>> {
    let img = image::open(path)
        .map_err(|source| Error::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgb8();
    let (width, height) = (img.width() as usize, img.height() as usize);
    Array3::from_shape_vec((height, width, 3), img.into_raw())
        .map_err(|e| FilterError::ShapeMismatch(format!("decoded buffer: {e}")).into())
}

/// Save an 8-bit array as an image, creating parent directories.
pub fn save_image(image: ArrayView3<u8>, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;

    let (height, width, channels) = image.dim();
    let (w, h) = (width as u32, height as u32);
    let data = image.as_standard_layout().into_owned().into_raw_vec_and_offset().0;

    let dynamic = match channels {
        1 => GrayImage::from_raw(w, h, data).map(DynamicImage::ImageLuma8),
        3 => RgbImage::from_raw(w, h, data).map(DynamicImage::ImageRgb8),
        4 => RgbaImage::from_raw(w, h, data).map(DynamicImage::ImageRgba8),
        _ => {
            return Err(FilterError::UnsupportedChannels {
                channels,
                expected: "1, 3 or 4",
            }
            .into())
        }
    }
    .ok_or_else(|| {
        FilterError::ShapeMismatch(format!("buffer does not match {width}x{height}x{channels}"))
    })?;

    dynamic.save(path).map_err(|source| Error::Encode {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| Error::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_roundtrip_preserves_pixels() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("rgb.png");

        let mut img = Array3::<u8>::zeros((2, 3, 3));
        for ((y, x, c), v) in img.indexed_iter_mut() {
            *v = (y * 90 + x * 30 + c * 7) as u8;
        }

        save_image(img.view(), &path).unwrap();
        let loaded = load_rgb_image(&path).unwrap();

        assert_eq!(loaded, img);
    }

    #[test]
    fn test_save_mask_as_grayscale() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mask.png");

        let mut mask = Array3::<u8>::zeros((2, 2, 1));
        mask[[1, 0, 0]] = 0xFF;

        save_image(mask.view(), &path).unwrap();
        let loaded = image::open(&path).unwrap().into_luma8();

        assert_eq!(loaded.get_pixel(0, 1).0, [0xFF]);
        assert_eq!(loaded.get_pixel(1, 1).0, [0]);
    }

    #[test]
    fn test_missing_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.jpg");

        let err = load_rgb_image(&path).unwrap_err();

        assert!(matches!(err, Error::Decode { .. }));
        assert!(err.to_string().contains("absent.jpg"));
    }

    #[test]
    fn test_corrupt_file_is_decode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        fs::write(&path, b"definitely not a png").unwrap();

        assert!(matches!(load_rgb_image(&path), Err(Error::Decode { .. })));
    }

    #[test]
    fn test_output_dir_under_regular_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocked");
        fs::write(&blocker, b"file, not a directory").unwrap();
        let img = Array3::<u8>::zeros((2, 2, 3));

        let err = save_image(img.view(), &blocker.join("out").join("x.png")).unwrap_err();

        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("blocked"));
    }

    #[test]
    fn test_unknown_extension_is_encode_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("x.xyz");
        let img = Array3::<u8>::zeros((2, 2, 3));

        let err = save_image(img.view(), &path).unwrap_err();

        assert!(matches!(err, Error::Encode { .. }));
        assert!(err.to_string().contains("x.xyz"));
    }

    #[test]
    fn test_loads_bmp_input() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.bmp");
        let mut img = Array3::<u8>::zeros((3, 2, 3));
        img[[2, 1, 0]] = 200;

        save_image(img.view(), &path).unwrap();

        assert_eq!(load_rgb_image(&path).unwrap(), img);
    }

    #[test]
    fn test_save_rejects_two_channels() {
        let dir = tempfile::tempdir().unwrap();
        let img = Array3::<u8>::zeros((1, 1, 2));
        assert!(save_image(img.view(), &dir.path().join("x.png")).is_err());
    }
}
