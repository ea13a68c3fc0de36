#![doc = include_str!("../README.md")]

// Public surface
pub mod config;
pub mod detector;
pub mod error;
pub mod grayscale;
pub mod image;
pub mod line;
pub mod render;

// Building blocks of the detector.
pub mod angle;
pub mod edges;
pub mod sampling;
pub mod segments;

// --- High-level re-exports -------------------------------------------------

pub use crate::detector::{detect_lines, DetectionReport, DetectorParams, LineDetector};
pub use crate::error::LineError;
pub use crate::grayscale::convert_to_grayscale;
pub use crate::line::LineSegment;
pub use crate::render::{draw_lines, draw_lines_with_style, DrawStyle};

/// Version of this library, as recorded in its package manifest.
pub fn library_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// The four image operations and the segment type.
pub mod prelude {
    pub use crate::{
        convert_to_grayscale, detect_lines, draw_lines, library_version, LineSegment,
    };
}
