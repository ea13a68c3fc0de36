use image::{DynamicImage, Rgb, RgbImage};

/// Dark background with one bright axis-aligned rectangle `[x0, x1) x [y0, y1)`.
pub fn rectangle_rgb(width: u32, height: u32, rect: [u32; 4]) -> DynamicImage {
    rectangles_rgb(width, height, &[rect])
}

/// Dark background with several bright axis-aligned rectangles.
pub fn rectangles_rgb(width: u32, height: u32, rects: &[[u32; 4]]) -> DynamicImage {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    let img = RgbImage::from_fn(width, height, |x, y| {
        let inside = rects
            .iter()
            .any(|&[x0, y0, x1, y1]| (x0..x1).contains(&x) && (y0..y1).contains(&y));
        if inside {
            Rgb([230, 210, 40])
        } else {
            Rgb([20, 30, 60])
        }
    });
    DynamicImage::ImageRgb8(img)
}

/// Vertical bars of width `period / 2` alternating dark and bright.
pub fn vertical_bars_rgb(width: u32, height: u32, period: u32) -> DynamicImage {
    assert!(period >= 2, "period must allow a bar and a gap");
    let img = RgbImage::from_fn(width, height, |x, _| {
        if (x / (period / 2)) % 2 == 0 {
            Rgb([16, 16, 16])
        } else {
            Rgb([240, 240, 240])
        }
    });
    DynamicImage::ImageRgb8(img)
}
