#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// chroma keying against the dominant color of an image.
pub mod chroma_key;

/// image filtering module.
pub mod filter;

/// compute color histograms module.
pub mod histogram;
