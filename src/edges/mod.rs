//! Image gradients used by the line extractor.
//!
//! Borders are handled by clamping indices (replicate).

pub mod grad;

pub use grad::{sobel_gradients, Grad};
