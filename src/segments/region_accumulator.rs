use crate::angle::fold_half_turn;

/// Running moments of a grown region, enough for a PCA line fit.
///
/// Sums are kept in f64; second moments of large images cancel badly in f32.
pub(crate) struct RegionAccumulator {
    pub indices: Vec<usize>,
    pub sum_x: f64,
    pub sum_y: f64,
    pub sum_xx: f64,
    pub sum_yy: f64,
    pub sum_xy: f64,
    pub aligned: usize,
    pub sum_mag: f64,
    /// Sum of orientation unit vectors (doubled angles when folded).
    pub sum_cos: f64,
    pub sum_sin: f64,
}

impl RegionAccumulator {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            indices: Vec::with_capacity(capacity),
            sum_x: 0.0,
            sum_y: 0.0,
            sum_xx: 0.0,
            sum_yy: 0.0,
            sum_xy: 0.0,
            aligned: 0,
            sum_mag: 0.0,
            sum_cos: 0.0,
            sum_sin: 0.0,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.indices.clear();
        self.sum_x = 0.0;
        self.sum_y = 0.0;
        self.sum_xx = 0.0;
        self.sum_yy = 0.0;
        self.sum_xy = 0.0;
        self.aligned = 0;
        self.sum_mag = 0.0;
        self.sum_cos = 0.0;
        self.sum_sin = 0.0;
    }

    pub(crate) fn push(&mut self, idx: usize, x: usize, y: usize, mag: f32, aligned: bool) {
        self.indices.push(idx);
        let (xf, yf) = (x as f64, y as f64);
        self.sum_x += xf;
        self.sum_y += yf;
        self.sum_xx += xf * xf;
        self.sum_yy += yf * yf;
        self.sum_xy += xf * yf;
        self.aligned += usize::from(aligned);
        self.sum_mag += mag as f64;
    }

    /// Add a pixel orientation to the running region orientation. Folded
    /// orientations live in `[0, pi)` and are averaged on the doubled circle.
    pub(crate) fn add_orientation(&mut self, angle: f32, folded: bool) {
        let a = if folded { 2.0 * angle as f64 } else { angle as f64 };
        self.sum_cos += a.cos();
        self.sum_sin += a.sin();
    }

    /// Mean orientation of the pixels added so far.
    pub(crate) fn orientation(&self, folded: bool) -> f32 {
        let mean = self.sum_sin.atan2(self.sum_cos) as f32;
        if folded {
            fold_half_turn(0.5 * mean)
        } else {
            mean
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.indices.len()
    }

    pub(crate) fn centroid(&self) -> [f32; 2] {
        let n = self.indices.len().max(1) as f64;
        [(self.sum_x / n) as f32, (self.sum_y / n) as f32]
    }

    /// Central second moments `(cxx, cxy, cyy)`.
    pub(crate) fn covariance(&self) -> (f32, f32, f32) {
        let n = self.indices.len().max(1) as f64;
        let (cx, cy) = (self.sum_x / n, self.sum_y / n);
        (
            (self.sum_xx / n - cx * cx) as f32,
            (self.sum_xy / n - cx * cy) as f32,
            (self.sum_yy / n - cy * cy) as f32,
        )
    }

    pub(crate) fn aligned_fraction(&self) -> f32 {
        if self.indices.is_empty() {
            0.0
        } else {
            self.aligned as f32 / self.indices.len() as f32
        }
    }

    pub(crate) fn avg_mag(&self) -> f32 {
        if self.indices.is_empty() {
            0.0
        } else {
            (self.sum_mag / self.indices.len() as f64) as f32
        }
    }

    /// Mark every pixel of the region with `state` in the usage map.
    pub(crate) fn mark_as(&self, used: &mut [u8], state: u8) {
        for &idx in &self.indices {
            used[idx] = state;
        }
    }
}
