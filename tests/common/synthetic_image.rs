use ndarray::Array3;

/// Image split into a left and a right flat colour.
pub fn vertical_halves(width: usize, height: usize, left: [u8; 3], right: [u8; 3]) -> Array3<u8> {
    assert!(width > 0 && height > 0, "image dimensions must be positive");

    let mut img = Array3::<u8>::zeros((height, width, 3));
    for y in 0..height {
        for x in 0..width {
            let color = if x < width / 2 { left } else { right };
            for c in 0..3 {
                img[[y, x, c]] = color[c];
            }
        }
    }
    img
}

/// Green/blue stripes with a pure red rectangle ("face") at `(fx, fy, fw, fh)`.
pub fn striped_with_face(
    width: usize,
    height: usize,
    face: (usize, usize, usize, usize),
) -> Array3<u8> {
    let (fx, fy, fw, fh) = face;
    let mut img = Array3::<u8>::zeros((height, width, 3));
    for y in 0..height {
        for x in 0..width {
            let color = if (fx..fx + fw).contains(&x) && (fy..fy + fh).contains(&y) {
                [220, 30, 30]
            } else if (x / 3) % 2 == 0 {
                [20, 160, 40]
            } else {
                [30, 60, 200]
            };
            for c in 0..3 {
                img[[y, x, c]] = color[c];
            }
        }
    }
    img
}

/// Write an RGB array as PNG through the `image` crate.
pub fn write_png(img: &Array3<u8>, path: &std::path::Path) {
    let (height, width, _) = img.dim();
    let data: Vec<u8> = img.iter().copied().collect();
    let buffer = image::RgbImage::from_raw(width as u32, height as u32, data)
        .expect("buffer matches dimensions");
    buffer.save(path).expect("write test image");
}
