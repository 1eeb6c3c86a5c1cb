#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`error::IoError`] variants for file access and encoding/decoding failures.
pub mod error;

/// High-level image reading functions.
///
/// See [`functional::read_image_any_rgb8`] for automatic format detection.
pub mod functional;

/// JPEG image encoding and decoding.
///
/// Pure Rust JPEG codec for reading and writing JPEG images.
pub mod jpeg;

pub use crate::error::IoError;
pub use crate::functional::{read_image_any_gray8, read_image_any_rgb8, read_image_rgb8};
pub use crate::jpeg::{
    read_image_jpeg_rgb8, write_image_jpeg_gray8, write_image_jpeg_rgb8, DEFAULT_JPEG_QUALITY,
};
