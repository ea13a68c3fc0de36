//! Parameters of the line detector.
//!
//! Defaults reproduce LSD's: 80% working scale, `sigma_scale = 0.6`, 22.5
//! degree angle tolerance and a 2-gray-level gradient quantization bound.

use crate::segments::LsdOptions;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectorParams {
    /// Working scale relative to the input, in `(0, 1]`.
    pub scale: f32,
    /// Gaussian sigma in working-level pixels: `sigma = sigma_scale / scale`.
    pub sigma_scale: f32,
    /// Region growth and significance thresholds, in full-resolution pixels.
    pub lsd: LsdOptions,
    /// Order output by decreasing length instead of discovery order.
    pub sort_by_length: bool,
}

impl Default for DetectorParams {
    fn default() -> Self {
        Self {
            scale: 0.8,
            sigma_scale: 0.6,
            lsd: LsdOptions::default(),
            sort_by_length: false,
        }
    }
}

impl DetectorParams {
    /// Parameters that run the extractor on the input resolution directly.
    pub fn full_resolution() -> Self {
        Self {
            scale: 1.0,
            ..Self::default()
        }
    }

    /// Clamp the scale into `(0, 1]`; non-finite or non-positive values fall
    /// back to full resolution.
    pub fn effective_scale(&self) -> f32 {
        if self.scale.is_finite() && self.scale > 0.0 {
            self.scale.min(1.0)
        } else {
            1.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let params: DetectorParams =
            serde_json::from_str(r#"{ "scale": 0.5, "lsd": { "min_length_px": 20.0 } }"#).unwrap();
        assert_eq!(params.scale, 0.5);
        assert_eq!(params.sigma_scale, 0.6);
        assert_eq!(params.lsd.min_length_px, 20.0);
        assert_eq!(params.lsd.angle_tolerance_deg, 22.5);
        assert!(!params.sort_by_length);
    }

    #[test]
    fn invalid_scale_falls_back_to_full_resolution() {
        let mut params = DetectorParams::default();
        params.scale = 0.0;
        assert_eq!(params.effective_scale(), 1.0);
        params.scale = f32::NAN;
        assert_eq!(params.effective_scale(), 1.0);
        params.scale = 3.0;
        assert_eq!(params.effective_scale(), 1.0);
        params.scale = 0.8;
        assert_eq!(params.effective_scale(), 0.8);
    }
}
