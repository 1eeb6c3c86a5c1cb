//! Filter operations
//!
//! This module provides the 3x3 sharpening filter and its kernel.

/// Filter kernels
pub mod kernels;

/// Sharpening filter
mod sharpen;
pub use sharpen::*;
