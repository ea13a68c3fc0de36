//! LSD-style line segment extractor.
//!
//! The algorithm performs:
//!
//! - Gradient computation (via `edges::sobel_gradients`), producing per-pixel
//!   `gx`, `gy` and magnitude.
//! - Region growing in raster seed order: an unused pixel above the magnitude
//!   threshold seeds a region, and 8-connected neighbors whose gradient
//!   orientation lies within the angle tolerance of the running region
//!   orientation (mean of the member orientations) join it.
//! - PCA line fitting: the region's pixel coordinates are summarized online and
//!   the 2x2 covariance is eigendecomposed to obtain the tangent direction.
//! - Endpoint projection: the extreme projections of region pixels onto the
//!   tangent give `p0` and `p1`.
//! - Significance tests: minimum region size, minimum length, minimum aligned
//!   fraction and an optional cap on the thickness across the line. Pixels of
//!   rejected regions no longer seed, but a later region may still absorb them.
//!
//! Orientation is taken modulo pi unless `enforce_polarity` is set.
//!
//! Region growing visits each pixel a bounded number of times, so the cost is
//! O(W*H) per image plus linear work per region.

mod extractor;
mod options;
mod region_accumulator;
mod segment;

pub use extractor::LsdResult;
pub use options::LsdOptions;
pub use segment::Segment;

use crate::image::ImageF32;

/// Extract segments from a `[0, 1]` luminance image. Coordinates are pixel
/// centers of `l`.
pub fn lsd_extract_segments(l: &ImageF32, options: LsdOptions) -> LsdResult {
    extractor::LsdExtractor::new(l, options).extract()
}
