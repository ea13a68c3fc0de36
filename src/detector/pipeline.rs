use super::params::DetectorParams;
use crate::grayscale::{convert_to_grayscale, to_luminance_f32};
use crate::image::ImageF32;
use crate::line::LineSegment;
use crate::sampling::gaussian_downscale;
use crate::segments::lsd_extract_segments;
use image::{DynamicImage, GrayImage};
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// Outcome of one detection call.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionReport {
    /// Segments in full-resolution image coordinates.
    pub lines: Vec<LineSegment>,
    pub image_size: [usize; 2],
    pub working_size: [usize; 2],
    pub scale: f32,
    pub regions_grown: usize,
    pub regions_rejected: usize,
    pub latency_ms: f64,
}

/// Stateless LSD-style line detector; holds only its parameters.
#[derive(Clone, Debug, Default)]
pub struct LineDetector {
    params: DetectorParams,
}

impl LineDetector {
    pub fn new(params: DetectorParams) -> Self {
        Self { params }
    }

    pub fn detect(&self, image: &DynamicImage) -> DetectionReport {
        self.detect_gray(&convert_to_grayscale(image))
    }

    pub fn detect_gray(&self, gray: &GrayImage) -> DetectionReport {
        self.detect_luminance(&to_luminance_f32(gray))
    }

    /// Detect on a `[0, 1]` luminance image.
    pub fn detect_luminance(&self, l: &ImageF32) -> DetectionReport {
        let start = Instant::now();
        let scale = self.params.effective_scale();
        let working = gaussian_downscale(l, scale, self.params.sigma_scale);
        // The downscale is skipped for degenerate inputs; keep the lift exact.
        let scale = if working.w == l.w && working.h == l.h {
            1.0
        } else {
            scale
        };

        let lsd = lsd_extract_segments(&working, self.params.lsd.with_scale(scale));
        let mut lines: Vec<LineSegment> = lsd
            .segments
            .iter()
            .map(|segment| segment.to_line_segment(scale))
            .collect();
        if self.params.sort_by_length {
            lines.sort_by(|a, b| b.length().total_cmp(&a.length()));
        }

        let report = DetectionReport {
            lines,
            image_size: [l.w, l.h],
            working_size: [working.w, working.h],
            scale,
            regions_grown: lsd.regions_grown,
            regions_rejected: lsd.regions_rejected,
            latency_ms: start.elapsed().as_secs_f64() * 1000.0,
        };
        debug!(
            "LineDetector::detect {}x{} -> {}x{} lines={} regions={} rejected={} lsd_ms={:.3} latency_ms={:.3}",
            l.w,
            l.h,
            working.w,
            working.h,
            report.lines.len(),
            report.regions_grown,
            report.regions_rejected,
            lsd.elapsed_ms,
            report.latency_ms
        );
        report
    }
}
