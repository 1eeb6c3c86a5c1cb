use keysharp_image::{Image, ImageError};

/// The number of buckets per channel used to find the dominant color.
pub const DEFAULT_BUCKETS: usize = 4;

/// A 3D histogram of color votes over an 8-bit RGB image.
///
/// Each channel range [0, 255] is split into `buckets` equal-width buckets and
/// every pixel votes for the cell `(red_bucket, green_bucket, blue_bucket)`.
/// The cells are stored red-major, then green, then blue.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorHistogram {
    buckets: usize,
    bucket_width: usize,
    votes: Vec<usize>,
}

/// The most voted color bucket of an image.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DominantColor {
    /// The representative color, the midpoint of the bucket, in RGB order.
    pub color: [u8; 3],
    /// The `[red, green, blue]` bucket indices of the winning cell.
    pub bucket: [usize; 3],
    /// The number of pixels that voted for the winning cell.
    pub votes: usize,
}

impl ColorHistogram {
    /// Create an empty histogram.
    ///
    /// # Arguments
    ///
    /// * `buckets` - The number of buckets per channel.
    ///
    /// # Errors
    ///
    /// Returns an error if `buckets` is zero, larger than 256 or does not divide 256.
    pub fn new(buckets: usize) -> Result<Self, ImageError> {
        if buckets == 0 || buckets > 256 || 256 % buckets != 0 {
            return Err(ImageError::InvalidHistogramBins(buckets));
        }
        Ok(Self::empty(buckets))
    }

    fn empty(buckets: usize) -> Self {
        Self {
            buckets,
            bucket_width: 256 / buckets,
            votes: vec![0; buckets * buckets * buckets],
        }
    }

    /// Compute the color histogram of an image.
    ///
    /// # Arguments
    ///
    /// * `src` - The input RGB image.
    /// * `buckets` - The number of buckets per channel.
    ///
    /// # Example
    ///
    /// ```
    /// use keysharp_image::{Image, ImageSize};
    /// use keysharp_imgproc::histogram::ColorHistogram;
    ///
    /// let image = Image::<u8, 3>::new(
    ///   ImageSize {
    ///     width: 2,
    ///     height: 1,
    ///   },
    ///   vec![0, 0, 0, 255, 10, 130],
    /// ).unwrap();
    ///
    /// let histogram = ColorHistogram::from_image(&image, 4).unwrap();
    /// assert_eq!(histogram.votes([0, 0, 0]), Some(1));
    /// assert_eq!(histogram.votes([3, 0, 2]), Some(1));
    /// assert_eq!(histogram.total(), 2);
    /// ```
    pub fn from_image(src: &Image<u8, 3>, buckets: usize) -> Result<Self, ImageError> {
        let mut histogram = Self::new(buckets)?;
        histogram.accumulate(src);
        Ok(histogram)
    }

    /// Add one vote per pixel of `src` to the histogram.
    pub fn accumulate(&mut self, src: &Image<u8, 3>) {
        for px in src.as_slice().chunks_exact(3) {
            let idx = self.cell_index([
                self.bucket_of(px[0]),
                self.bucket_of(px[1]),
                self.bucket_of(px[2]),
            ]);
            self.votes[idx] += 1;
        }
    }

    /// The bucket index of an intensity value.
    pub fn bucket_of(&self, value: u8) -> usize {
        value as usize / self.bucket_width
    }

    /// The midpoint intensity of a bucket.
    pub fn bucket_midpoint(&self, bucket: usize) -> u8 {
        (bucket * self.bucket_width + self.bucket_width / 2).min(255) as u8
    }

    /// The votes of the cell `[red, green, blue]`, or `None` if out of range.
    pub fn votes(&self, bucket: [usize; 3]) -> Option<usize> {
        if bucket.iter().any(|&b| b >= self.buckets) {
            return None;
        }
        Some(self.votes[self.cell_index(bucket)])
    }

    /// The sum of the votes of all cells.
    pub fn total(&self) -> usize {
        self.votes.iter().sum()
    }

    /// Find the cell with the most votes.
    ///
    /// Cells are scanned red-major, then green, then blue, and a cell only
    /// replaces the current best when it has strictly more votes, so ties are
    /// won by the first cell in that order. An empty histogram yields the
    /// cell `[0, 0, 0]` with zero votes.
    pub fn peak(&self) -> ([usize; 3], usize) {
        let mut max_votes = 0;
        let mut max_index = 0;
        for (idx, &votes) in self.votes.iter().enumerate() {
            if votes > max_votes {
                max_votes = votes;
                max_index = idx;
            }
        }
        (self.cell_of(max_index), max_votes)
    }

    /// The most voted cell converted to its representative color.
    pub fn dominant_color(&self) -> DominantColor {
        let (bucket, votes) = self.peak();
        DominantColor {
            color: [
                self.bucket_midpoint(bucket[0]),
                self.bucket_midpoint(bucket[1]),
                self.bucket_midpoint(bucket[2]),
            ],
            bucket,
            votes,
        }
    }

    fn cell_index(&self, bucket: [usize; 3]) -> usize {
        (bucket[0] * self.buckets + bucket[1]) * self.buckets + bucket[2]
    }

    fn cell_of(&self, idx: usize) -> [usize; 3] {
        let b = self.buckets;
        [idx / (b * b), (idx / b) % b, idx % b]
    }
}

/// Find the dominant color of an image using [`DEFAULT_BUCKETS`] buckets per channel.
///
/// # Arguments
///
/// * `src` - The input RGB image.
///
/// # Returns
///
/// The midpoint color of the most voted histogram cell. An empty image
/// yields the midpoint of the first cell with zero votes.
///
/// # Example
///
/// ```
/// use keysharp_image::Image;
/// use keysharp_imgproc::histogram::find_dominant_color;
///
/// let image = Image::<u8, 3>::from_size_val([4, 4].into(), 200).unwrap();
///
/// let dominant = find_dominant_color(&image);
/// assert_eq!(dominant.color, [224, 224, 224]);
/// assert_eq!(dominant.votes, 16);
/// ```
pub fn find_dominant_color(src: &Image<u8, 3>) -> DominantColor {
    let mut histogram = ColorHistogram::empty(DEFAULT_BUCKETS);
    histogram.accumulate(src);
    histogram.dominant_color()
}

/// Find the dominant color of an image with a custom number of buckets per channel.
///
/// # Errors
///
/// Returns an error if `buckets` does not divide 256.
pub fn find_dominant_color_with_buckets(
    src: &Image<u8, 3>,
    buckets: usize,
) -> Result<DominantColor, ImageError> {
    Ok(ColorHistogram::from_image(src, buckets)?.dominant_color())
}
