use keysharp_image::{ops, Image, ImageError};

use crate::histogram::{
    find_dominant_color, find_dominant_color_with_buckets, DominantColor, DEFAULT_BUCKETS,
};

/// The threshold used when none is given, half the width of a default histogram bucket.
pub const DEFAULT_THRESHOLD: u8 = 32;

/// The maximum Euclidean distance between a pixel and the key color for the
/// pixel to be replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Threshold(u8);

impl Threshold {
    /// Create a threshold from a byte value.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// The threshold value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Threshold {
    fn default() -> Self {
        Self(DEFAULT_THRESHOLD)
    }
}

impl From<u8> for Threshold {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for Threshold {
    type Error = ImageError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map(Self)
            .map_err(|_| ImageError::InvalidThreshold(value))
    }
}

impl std::fmt::Display for Threshold {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[inline]
fn squared_distance(px: &[u8], key: &[u8; 3]) -> u32 {
    px.iter()
        .zip(key.iter())
        .map(|(&a, &b)| {
            let d = a as i32 - b as i32;
            (d * d) as u32
        })
        .sum()
}

/// Replace the pixels of the foreground that are close to its dominant color
/// with pixels from the background.
///
/// The dominant color is found with [`find_dominant_color`]. A pixel is
/// replaced when its Euclidean distance to that color is lower or equal than
/// `threshold`. The background is tiled over the foreground: the pixel at
/// `(row, col)` is taken from `(row % bg_rows, col % bg_cols)`.
///
/// # Arguments
///
/// * `foreground` - The RGB image to key.
/// * `background` - The RGB image providing the replacement pixels.
/// * `dst` - The output image, with the size of `foreground`.
/// * `threshold` - The maximum distance to the dominant color.
///
/// # Returns
///
/// The dominant color used as key.
///
/// # Errors
///
/// Returns an error if `dst` and `foreground` differ in size or if the
/// background has no rows or no columns.
///
/// # Example
///
/// ```
/// use keysharp_image::Image;
/// use keysharp_imgproc::chroma_key::{chroma_key, Threshold};
///
/// let foreground = Image::<u8, 3>::from_size_val([4, 4].into(), 220).unwrap();
/// let background = Image::<u8, 3>::from_size_val([2, 2].into(), 0).unwrap();
/// let mut dst = Image::<u8, 3>::from_size_val(foreground.size(), 0).unwrap();
///
/// let dominant = chroma_key(&foreground, &background, &mut dst, Threshold::new(32)).unwrap();
///
/// assert_eq!(dominant.color, [224, 224, 224]);
/// assert_eq!(dst.as_slice(), background.as_slice().repeat(4).as_slice());
/// ```
pub fn chroma_key(
    foreground: &Image<u8, 3>,
    background: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
    threshold: Threshold,
) -> Result<DominantColor, ImageError> {
    let dominant = find_dominant_color(foreground);
    log::debug!(
        "dominant color {:?} in bucket {:?} with {} votes",
        dominant.color,
        dominant.bucket,
        dominant.votes
    );

    chroma_key_with_color(foreground, background, dst, dominant.color, threshold)?;

    Ok(dominant)
}

/// Replace the pixels of the foreground that are close to `key` with pixels
/// from the tiled background.
///
/// # Arguments
///
/// * `foreground` - The RGB image to key.
/// * `background` - The RGB image providing the replacement pixels.
/// * `dst` - The output image, with the size of `foreground`.
/// * `key` - The RGB color to key out.
/// * `threshold` - The maximum distance to `key`.
///
/// # Returns
///
/// The number of replaced pixels.
///
/// # Errors
///
/// Returns an error if `dst` and `foreground` differ in size or if the
/// background has no rows or no columns.
pub fn chroma_key_with_color(
    foreground: &Image<u8, 3>,
    background: &Image<u8, 3>,
    dst: &mut Image<u8, 3>,
    key: [u8; 3],
    threshold: Threshold,
) -> Result<usize, ImageError> {
    if background.is_empty() {
        return Err(ImageError::InvalidBackgroundDimensions(
            background.width(),
            background.height(),
        ));
    }

    ops::copy_image(foreground, dst)?;

    if foreground.is_empty() {
        return Ok(0);
    }

    let max_sq = threshold.value() as u32 * threshold.value() as u32;
    let (bg_cols, bg_rows) = (background.cols(), background.rows());
    let bg_stride = 3 * bg_cols;
    let bg_data = background.as_slice();

    let mut replaced = 0;
    for (row, (fg_row, dst_row)) in foreground
        .as_slice()
        .chunks_exact(3 * foreground.cols())
        .zip(dst.as_slice_mut().chunks_exact_mut(3 * foreground.cols()))
        .enumerate()
    {
        let bg_start = (row % bg_rows) * bg_stride;
        let bg_row = &bg_data[bg_start..bg_start + bg_stride];

        for (col, (fg_px, dst_px)) in fg_row
            .chunks_exact(3)
            .zip(dst_row.chunks_exact_mut(3))
            .enumerate()
        {
            if squared_distance(fg_px, &key) <= max_sq {
                let c = (col % bg_cols) * 3;
                dst_px.copy_from_slice(&bg_row[c..c + 3]);
                replaced += 1;
            }
        }
    }

    log::debug!(
        "replaced {} of {} pixels with threshold {}",
        replaced,
        foreground.cols() * foreground.rows(),
        threshold
    );

    Ok(replaced)
}

/// The state of an interactive chroma key session.
///
/// The session owns the foreground, the background and the composited
/// output. Every threshold change rebuilds the histogram and the composite
/// from scratch.
#[derive(Debug)]
pub struct ChromaKeySession {
    foreground: Image<u8, 3>,
    background: Image<u8, 3>,
    output: Image<u8, 3>,
    threshold: Threshold,
    buckets: usize,
    dominant: DominantColor,
}

impl ChromaKeySession {
    /// Start a session and compute the first composite.
    ///
    /// The key color is found with [`DEFAULT_BUCKETS`] buckets per channel.
    ///
    /// # Errors
    ///
    /// Returns an error if the background has no rows or no columns.
    pub fn new(
        foreground: Image<u8, 3>,
        background: Image<u8, 3>,
        threshold: Threshold,
    ) -> Result<Self, ImageError> {
        Self::with_buckets(foreground, background, threshold, DEFAULT_BUCKETS)
    }

    /// Start a session finding the key color with `buckets` buckets per channel.
    ///
    /// # Errors
    ///
    /// Returns an error if the background has no rows or no columns, or if
    /// `buckets` does not divide 256.
    pub fn with_buckets(
        foreground: Image<u8, 3>,
        background: Image<u8, 3>,
        threshold: Threshold,
        buckets: usize,
    ) -> Result<Self, ImageError> {
        let dominant = find_dominant_color_with_buckets(&foreground, buckets)?;
        let mut output = foreground.clone();
        chroma_key_with_color(
            &foreground,
            &background,
            &mut output,
            dominant.color,
            threshold,
        )?;
        Ok(Self {
            foreground,
            background,
            output,
            threshold,
            buckets,
            dominant,
        })
    }

    /// Set a new threshold and recompute the composite.
    ///
    /// # Returns
    ///
    /// The updated output image.
    pub fn set_threshold(&mut self, threshold: Threshold) -> Result<&Image<u8, 3>, ImageError> {
        self.threshold = threshold;
        self.recompute()?;
        Ok(&self.output)
    }

    fn recompute(&mut self) -> Result<(), ImageError> {
        self.dominant = find_dominant_color_with_buckets(&self.foreground, self.buckets)?;
        let replaced = chroma_key_with_color(
            &self.foreground,
            &self.background,
            &mut self.output,
            self.dominant.color,
            self.threshold,
        )?;
        log::debug!(
            "recomputed with {} buckets, key {:?}: {} pixels replaced",
            self.buckets,
            self.dominant.color,
            replaced
        );
        Ok(())
    }

    /// The current threshold.
    pub fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// The number of histogram buckets per channel.
    pub fn buckets(&self) -> usize {
        self.buckets
    }

    /// The dominant color of the last recompute.
    pub fn dominant_color(&self) -> DominantColor {
        self.dominant
    }

    /// The foreground image.
    pub fn foreground(&self) -> &Image<u8, 3> {
        &self.foreground
    }

    /// The background image.
    pub fn background(&self) -> &Image<u8, 3> {
        &self.background
    }

    /// The composited image.
    pub fn output(&self) -> &Image<u8, 3> {
        &self.output
    }

    /// End the session and return the composited image.
    pub fn into_output(self) -> Image<u8, 3> {
        self.output
    }
}
