use serde::{Deserialize, Serialize};

/// Gradient threshold equivalent to LSD's `quant / sin(angle_tolerance)` with
/// `quant = 2` gray levels, expressed in Sobel units on a `[0, 1]` image.
const DEFAULT_MAGNITUDE_THRESHOLD: f32 = 0.164;

/// Region growth and significance settings for the LSD-style extractor.
///
/// - `enforce_polarity`: compare signed angles during growth so that
///   opposite-polarity parallel edges are not fused.
/// - `normal_span_limit_px`: reject regions thicker than this across the fitted
///   line.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LsdOptions {
    /// Seed and region pixels need a Sobel magnitude strictly above this.
    pub magnitude_threshold: f32,
    /// Orientation tolerance in degrees around the running mean orientation
    /// of the region being grown.
    pub angle_tolerance_deg: f32,
    /// Minimum accepted segment length in pixels at the working level.
    pub min_length_px: f32,
    /// Minimum number of pixels in a grown region.
    pub min_region_size: usize,
    /// Minimum share of region pixels within half the angle tolerance.
    pub min_aligned_fraction: f32,
    pub enforce_polarity: bool,
    pub normal_span_limit_px: Option<f32>,
}

impl Default for LsdOptions {
    fn default() -> Self {
        Self {
            magnitude_threshold: DEFAULT_MAGNITUDE_THRESHOLD,
            angle_tolerance_deg: 22.5,
            min_length_px: 8.0,
            min_region_size: 12,
            min_aligned_fraction: 0.6,
            enforce_polarity: false,
            normal_span_limit_px: None,
        }
    }
}

impl LsdOptions {
    /// Adapt pixel-valued thresholds to a level scaled by `scale` relative to
    /// full resolution.
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.min_length_px *= scale;
        self.normal_span_limit_px = self.normal_span_limit_px.map(|v| v * scale);
        self
    }

    pub fn angle_tolerance_rad(&self) -> f32 {
        self.angle_tolerance_deg.to_radians()
    }

    /// Span limit if it is a usable positive number.
    pub(crate) fn span_limit(&self) -> Option<f32> {
        self.normal_span_limit_px
            .filter(|v| v.is_finite() && *v > 0.0)
    }
}
