//! Line detector: grayscale input to full-resolution line segments.
//!
//! Overview
//! - Converts the input to BT.601 grayscale and normalizes it to `[0, 1]`.
//! - Downscales with a Gaussian sampler (`scale`, `sigma_scale`) to suppress
//!   aliasing on digitized edges. A scale of 1 skips this step.
//! - Runs the LSD-style extractor on the working level with pixel thresholds
//!   adapted to the scale.
//! - Lifts endpoints back to full-resolution image coordinates and optionally
//!   sorts by length.
//!
//! Modules
//! - [`params`]: configuration types shared by the library and the CLI.
//! - `pipeline`: the [`LineDetector`] implementation and its report.

pub mod params;
mod pipeline;

pub use params::DetectorParams;
pub use pipeline::{DetectionReport, LineDetector};

use crate::line::LineSegment;
use image::DynamicImage;

/// Detect line segments with default parameters.
pub fn detect_lines(image: &DynamicImage) -> Vec<LineSegment> {
    LineDetector::default().detect(image).lines
}
