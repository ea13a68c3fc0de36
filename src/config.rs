//! JSON configuration for the `line_measure` tool.
use crate::detector::DetectorParams;
use crate::error::{LineError, Result};
use crate::render::{DrawStyle, MAX_STROKE_PX};
use crate::sampling::scaled_len;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
pub struct LineToolConfig {
    pub input: PathBuf,
    #[serde(default)]
    pub detector: DetectorParams,
    #[serde(default)]
    pub draw: DrawStyle,
    /// Segment to highlight in the overlay, by index in detection order.
    #[serde(default)]
    pub selected_index: Option<usize>,
    pub output: LineOutputConfig,
}

#[derive(Debug, Deserialize)]
pub struct LineOutputConfig {
    #[serde(default)]
    pub grayscale_image: Option<PathBuf>,
    pub overlay_image: PathBuf,
    pub lines_json: PathBuf,
}

impl LineToolConfig {
    pub fn validate(&self) -> Result<()> {
        let detector = &self.detector;
        let scale = detector.scale;
        if !(scale.is_finite() && scale > 0.0 && scale <= 1.0) {
            return invalid(format!("detector.scale must be in (0, 1], got {scale}"));
        }
        // A one-pixel axis must keep at least one working pixel.
        if scaled_len(1, scale) == 0 {
            return invalid(format!("detector.scale {scale} shrinks every image to nothing"));
        }
        let sigma_scale = detector.sigma_scale;
        if !(sigma_scale.is_finite() && sigma_scale > 0.0) {
            return invalid(format!("detector.sigma_scale must be positive, got {sigma_scale}"));
        }

        let lsd = &detector.lsd;
        let threshold = lsd.magnitude_threshold;
        if !(threshold.is_finite() && threshold > 0.0) {
            return invalid(format!(
                "detector.lsd.magnitude_threshold must be positive, got {threshold}"
            ));
        }
        let tol = lsd.angle_tolerance_deg;
        if !(tol.is_finite() && tol > 0.0 && tol < 90.0) {
            return invalid(format!(
                "detector.lsd.angle_tolerance_deg must be in (0, 90), got {tol}"
            ));
        }
        let aligned = lsd.min_aligned_fraction;
        if !(0.0..=1.0).contains(&aligned) {
            return invalid(format!(
                "detector.lsd.min_aligned_fraction must be in [0, 1], got {aligned}"
            ));
        }

        for (name, value) in [
            ("draw.thickness", self.draw.thickness),
            ("draw.selected_thickness", self.draw.selected_thickness),
            ("draw.endpoint_radius", self.draw.endpoint_radius),
        ] {
            if value > MAX_STROKE_PX {
                return invalid(format!("{name} must be at most {MAX_STROKE_PX}, got {value}"));
            }
        }
        Ok(())
    }
}

fn invalid(message: String) -> Result<()> {
    Err(LineError::InvalidConfig(message))
}

pub fn load_config(path: &Path) -> Result<LineToolConfig> {
    let data = fs::read_to_string(path).map_err(|source| LineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let config: LineToolConfig = serde_json::from_str(&data).map_err(|source| LineError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    config.validate()?;
    Ok(config)
}
