//! Image buffers and file helpers.
//!
//! Decoded images travel through the public API as `image` crate buffers;
//! the detector works on the owned float buffer [`ImageF32`].

pub mod f32;
pub mod io;
pub mod traits;

pub use self::f32::ImageF32;
pub use self::traits::{ImageView, ImageViewMut};
