/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when two images that must share a size do not.
    #[error("Image size mismatch: ({0}, {1}) != ({2}, {3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when a pixel coordinate falls outside the image.
    #[error("Pixel index ({0}, {1}) out of bounds ({2}, {3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when the channel index is out of bounds.
    #[error("Channel index {0} is out of bounds ({1})")]
    ChannelIndexOutOfBounds(usize, usize),

    /// Error when the number of histogram buckets per channel is invalid.
    #[error("Invalid number of histogram buckets: {0}. Must divide 256")]
    InvalidHistogramBins(usize),

    /// Error when a chroma key threshold is outside [0, 255].
    #[error("Invalid threshold: {0}. Must be in [0, 255]")]
    InvalidThreshold(i64),

    /// Error when the background image has no rows or no columns.
    #[error("Invalid background dimensions ({0}, {1}): must be non-empty")]
    InvalidBackgroundDimensions(usize, usize),
}
