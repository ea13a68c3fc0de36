//! Sobel gradients with per-pixel magnitude.
//!
//! Convolves the 3x3 Sobel pair with border clamping and stores `gx`, `gy`
//! and `mag = sqrt(gx^2 + gy^2)`. On a `[0, 1]` image a unit step yields a
//! peak magnitude of 4; a linear ramp of slope `a` yields `8a`.
use crate::image::{ImageF32, ImageView, ImageViewMut};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_Y: Kernel3 = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Per-pixel gradient buffers.
#[derive(Clone, Debug, Default)]
pub struct Grad {
    pub gx: ImageF32,
    pub gy: ImageF32,
    pub mag: ImageF32,
}

impl Grad {
    /// Signed gradient direction at `(x, y)` in `(-pi, pi]`.
    #[inline]
    pub fn direction(&self, x: usize, y: usize) -> f32 {
        self.gy.get(x, y).atan2(self.gx.get(x, y))
    }
}

pub fn sobel_gradients(l: &ImageF32) -> Grad {
    let (w, h) = (l.w, l.h);
    let mut gx = ImageF32::new(w, h);
    let mut gy = ImageF32::new(w, h);
    let mut mag = ImageF32::new(w, h);
    if l.is_empty() {
        return Grad { gx, gy, mag };
    }

    for y in 0..h {
        let rows = [l.row(y.saturating_sub(1)), l.row(y), l.row((y + 1).min(h - 1))];
        let out_gx = gx.row_mut(y);
        let out_gy = gy.row_mut(y);
        let out_mag = mag.row_mut(y);
        for x in 0..w {
            let cols = [x.saturating_sub(1), x, (x + 1).min(w - 1)];
            let mut sum_x = 0.0;
            let mut sum_y = 0.0;
            for (ky, row) in rows.iter().enumerate() {
                for (kx, &cx) in cols.iter().enumerate() {
                    let v = row[cx];
                    sum_x += v * SOBEL_X[ky][kx];
                    sum_y += v * SOBEL_Y[ky][kx];
                }
            }
            out_gx[x] = sum_x;
            out_gy[x] = sum_y;
            out_mag[x] = (sum_x * sum_x + sum_y * sum_y).sqrt();
        }
    }

    Grad { gx, gy, mag }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn vertical_step_has_horizontal_gradient() {
        let mut img = ImageF32::new(8, 4);
        for y in 0..4 {
            for x in 4..8 {
                img.set(x, y, 1.0);
            }
        }
        let grad = sobel_gradients(&img);
        assert_abs_diff_eq!(grad.gx.get(3, 2), 4.0, epsilon = 1e-6);
        assert_abs_diff_eq!(grad.gx.get(4, 2), 4.0, epsilon = 1e-6);
        assert_abs_diff_eq!(grad.gy.get(3, 2), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(grad.mag.get(0, 2), 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(grad.direction(3, 2), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn empty_input_yields_empty_gradients() {
        let grad = sobel_gradients(&ImageF32::new(0, 0));
        assert!(grad.mag.data.is_empty());
    }
}
