use super::options::LsdOptions;
use super::region_accumulator::RegionAccumulator;
use super::segment::Segment;
use crate::angle::{direction_distance, fold_half_turn, orientation_distance, wrap_signed};
use crate::edges::{sobel_gradients, Grad};
use crate::image::ImageF32;
use nalgebra::{Matrix2, SymmetricEigen};
use std::time::Instant;

const FREE: u8 = 0;
const USED: u8 = 1;
/// Part of a rejected region: never seeds again, may join a later region.
const REJECTED: u8 = 2;

const NEIGH_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Segments extracted from one image plus bookkeeping for logs and reports.
#[derive(Clone, Debug, Default)]
pub struct LsdResult {
    pub segments: Vec<Segment>,
    pub regions_grown: usize,
    pub regions_rejected: usize,
    pub elapsed_ms: f64,
}

pub(super) struct LsdExtractor {
    grad: Grad,
    width: usize,
    height: usize,
    options: LsdOptions,
    angle_tol: f32,
    half_angle_tol: f32,
    span_limit: Option<f32>,
    used: Vec<u8>,
    angle_cache: Vec<f32>,
    stack: Vec<usize>,
    region: RegionAccumulator,
    result: LsdResult,
}

impl LsdExtractor {
    pub(super) fn new(l: &ImageF32, options: LsdOptions) -> Self {
        let grad = sobel_gradients(l);
        let n = l.w * l.h;
        let angle_tol = options.angle_tolerance_rad();
        Self {
            grad,
            width: l.w,
            height: l.h,
            options,
            angle_tol,
            half_angle_tol: angle_tol * 0.5,
            span_limit: options.span_limit(),
            used: vec![FREE; n],
            angle_cache: vec![f32::NAN; n],
            stack: Vec::with_capacity(64),
            region: RegionAccumulator::with_capacity(128),
            result: LsdResult::default(),
        }
    }

    pub(super) fn extract(mut self) -> LsdResult {
        let start = Instant::now();
        for idx in 0..(self.width * self.height) {
            self.process_seed(idx);
        }
        self.result.elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
        self.result
    }

    fn process_seed(&mut self, idx: usize) {
        if self.used[idx] != FREE {
            return;
        }
        if self.magnitude(idx) <= self.options.magnitude_threshold {
            return;
        }

        self.region.reset();
        self.stack.clear();

        self.accept(idx);
        self.grow_region();
        self.result.regions_grown += 1;

        match self.build_segment() {
            Some(segment) => self.result.segments.push(segment),
            None => {
                self.region.mark_as(&mut self.used, REJECTED);
                self.result.regions_rejected += 1;
            }
        }
        self.region.reset();
    }

    /// Claim a pixel for the current region and fold its orientation into the
    /// running region orientation.
    fn accept(&mut self, idx: usize) {
        let angle = self.angle_at(idx);
        self.region.add_orientation(angle, !self.options.enforce_polarity);
        self.used[idx] = USED;
        self.stack.push(idx);
    }

    fn region_angle(&self) -> f32 {
        self.region.orientation(!self.options.enforce_polarity)
    }

    fn grow_region(&mut self) {
        while let Some(idx) = self.stack.pop() {
            let x = idx % self.width;
            let y = idx / self.width;
            let angle = self.angle_at(idx);
            let deviation = self.angle_difference(angle, self.region_angle());
            let aligned = deviation <= self.half_angle_tol;
            let mag = self.magnitude(idx);
            self.region.push(idx, x, y, mag, aligned);

            for (dx, dy) in NEIGH_OFFSETS {
                let xn = x as isize + dx;
                let yn = y as isize + dy;
                if xn < 0 || yn < 0 || xn >= self.width as isize || yn >= self.height as isize {
                    continue;
                }
                let neighbor = yn as usize * self.width + xn as usize;
                if self.used[neighbor] == USED {
                    continue;
                }
                if self.magnitude(neighbor) <= self.options.magnitude_threshold {
                    continue;
                }
                let neighbor_angle = self.angle_at(neighbor);
                if self.angle_difference(neighbor_angle, self.region_angle()) <= self.angle_tol {
                    self.accept(neighbor);
                }
            }
        }
    }

    fn build_segment(&self) -> Option<Segment> {
        if self.region.len() < self.options.min_region_size.max(2) {
            return None;
        }

        let [cx, cy] = self.region.centroid();
        if !cx.is_finite() || !cy.is_finite() {
            return None;
        }

        let (cxx, cxy, cyy) = self.region.covariance();
        let eig = SymmetricEigen::new(Matrix2::new(cxx, cxy, cxy, cyy));
        let (vmax, lambda_max) = if eig.eigenvalues[0] >= eig.eigenvalues[1] {
            (eig.eigenvectors.column(0), eig.eigenvalues[0])
        } else {
            (eig.eigenvectors.column(1), eig.eigenvalues[1])
        };
        if !lambda_max.is_finite() || lambda_max <= 0.0 {
            return None;
        }

        let norm = (vmax[0] * vmax[0] + vmax[1] * vmax[1]).sqrt();
        if !norm.is_finite() || norm < 1e-6 {
            return None;
        }
        let (tx, ty) = (vmax[0] / norm, vmax[1] / norm);
        let (nx, ny) = (-ty, tx);

        let mut smin = f32::INFINITY;
        let mut smax = f32::NEG_INFINITY;
        let mut nmin = f32::INFINITY;
        let mut nmax = f32::NEG_INFINITY;
        for &idx in &self.region.indices {
            let dx = (idx % self.width) as f32 - cx;
            let dy = (idx / self.width) as f32 - cy;
            let s = dx * tx + dy * ty;
            smin = smin.min(s);
            smax = smax.max(s);
            let n = dx * nx + dy * ny;
            nmin = nmin.min(n);
            nmax = nmax.max(n);
        }

        let len = smax - smin;
        if !len.is_finite() || len <= 0.0 || len < self.options.min_length_px {
            return None;
        }
        if self.region.aligned_fraction() < self.options.min_aligned_fraction {
            return None;
        }
        if let Some(limit) = self.span_limit {
            let span = nmax - nmin;
            if !span.is_finite() || span > limit {
                return None;
            }
        }

        Some(Segment {
            p0: [cx + smin * tx, cy + smin * ty],
            p1: [cx + smax * tx, cy + smax * ty],
            dir: [tx, ty],
            len,
            avg_mag: self.region.avg_mag(),
            support: self.region.len(),
        })
    }

    #[inline]
    fn magnitude(&self, idx: usize) -> f32 {
        self.grad.mag.data[idx]
    }

    fn angle_at(&mut self, idx: usize) -> f32 {
        let cached = self.angle_cache[idx];
        if !cached.is_nan() {
            return cached;
        }
        let raw = self.grad.direction(idx % self.width, idx / self.width);
        let angle = if self.options.enforce_polarity {
            wrap_signed(raw)
        } else {
            fold_half_turn(raw)
        };
        self.angle_cache[idx] = angle;
        angle
    }

    fn angle_difference(&self, a: f32, b: f32) -> f32 {
        if self.options.enforce_polarity {
            direction_distance(a, b)
        } else {
            orientation_distance(a, b)
        }
    }
}
