//! File helpers for images and JSON reports.
//!
//! - `load_image`: decode a PNG/JPEG/etc. from disk.
//! - `save_gray` / `save_rgba`: encode outputs, format chosen by extension.
//! - `write_json_file`: pretty-print a serializable value to disk.
use crate::error::{LineError, Result};
use image::{DynamicImage, GrayImage, RgbaImage};
use serde::Serialize;
use std::fs;
use std::path::Path;

pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|source| LineError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_gray(image: &GrayImage, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    image.save(path).map_err(|source| LineError::Encode {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_rgba(image: &RgbaImage, path: &Path) -> Result<()> {
    ensure_parent_dir(path)?;
    image.save(path).map_err(|source| LineError::Encode {
        path: path.to_path_buf(),
        source,
    })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|source| LineError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    fs::write(path, json).map_err(|source| LineError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|source| LineError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }
    Ok(())
}
