//! Color to grayscale conversion.
//!
//! Uses ITU-R BT.601 luma weights in 14-bit fixed point, the same rounding
//! the common vision libraries apply for RGB(A) to gray:
//!
//! `Y = (4899 R + 9617 G + 1868 B + 8192) >> 14`
//!
//! Alpha is ignored. Rows are converted in parallel.
use crate::image::{ImageF32, ImageViewMut};
use image::{DynamicImage, GrayImage, RgbImage};
use rayon::prelude::*;

const WEIGHT_R: u32 = 4899;
const WEIGHT_G: u32 = 9617;
const WEIGHT_B: u32 = 1868;
const SHIFT: u32 = 14;
const ROUND: u32 = 1 << (SHIFT - 1);

#[inline]
pub fn luma_bt601(r: u8, g: u8, b: u8) -> u8 {
    ((WEIGHT_R * r as u32 + WEIGHT_G * g as u32 + WEIGHT_B * b as u32 + ROUND) >> SHIFT) as u8
}

/// Convert any decoded image to 8-bit grayscale of the same size.
pub fn convert_to_grayscale(image: &DynamicImage) -> GrayImage {
    match image {
        DynamicImage::ImageLuma8(gray) => gray.clone(),
        DynamicImage::ImageLumaA8(_)
        | DynamicImage::ImageLuma16(_)
        | DynamicImage::ImageLumaA16(_) => image.to_luma8(),
        other => rgb_to_gray(&other.to_rgb8()),
    }
}

fn rgb_to_gray(rgb: &RgbImage) -> GrayImage {
    let (w, h) = rgb.dimensions();
    let mut out = GrayImage::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }
    let width = w as usize;
    out.par_chunks_mut(width)
        .zip(rgb.par_chunks(width * 3))
        .for_each(|(dst, src)| {
            for (px, rgb) in dst.iter_mut().zip(src.chunks_exact(3)) {
                *px = luma_bt601(rgb[0], rgb[1], rgb[2]);
            }
        });
    out
}

/// Normalize an 8-bit gray image into `[0, 1]` floats for the detector.
pub fn to_luminance_f32(gray: &GrayImage) -> ImageF32 {
    let (w, h) = (gray.width() as usize, gray.height() as usize);
    let mut out = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return out;
    }
    for (y, src) in gray.chunks(w).enumerate() {
        let dst = out.row_mut(y);
        for (d, &s) in dst.iter_mut().zip(src) {
            *d = s as f32 / 255.0;
        }
    }
    out
}
