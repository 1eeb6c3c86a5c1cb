use keysharp_image::{ops, Image, ImageError};

/// Controls how the sharpening filter walks the pixels.
///
/// All strategies produce bit-identical output, they only differ in the way
/// the samples are accessed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SharpenStrategy {
    /// Address every sample through its `(row, col, channel)` index.
    Indexed,

    /// Slice the previous, current and next rows once per row and walk the
    /// samples of the current row with a channel stride.
    #[default]
    RowSlices,

    /// Advance a single cursor over the flat buffer, skipping the border
    /// columns at the end of every row.
    Cursor,
}

/// The weighted sum of the 3x3 cross kernel, saturated to the byte range.
#[inline(always)]
fn sharpen_sample(center: u8, up: u8, down: u8, left: u8, right: u8) -> u8 {
    let sum = 5 * center as i32 - up as i32 - down as i32 - left as i32 - right as i32;
    sum.clamp(0, 255) as u8
}

/// Sharpen an image with a 3x3 cross kernel.
///
/// Every interior sample becomes `5 * center - up - down - left - right`,
/// saturated to [0, 255]. The border rows and columns are copied unchanged.
///
/// # Arguments
///
/// * `src` - The source image with shape (H, W, C).
/// * `dst` - The destination image with shape (H, W, C).
///
/// # Errors
///
/// Returns an error if `src` and `dst` differ in size.
///
/// # Example
///
/// ```
/// use keysharp_image::{Image, ImageSize};
/// use keysharp_imgproc::filter::sharpen;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize { width: 3, height: 3 },
///     vec![10, 10, 10, 10, 20, 10, 10, 10, 10],
/// ).unwrap();
///
/// let mut sharpened = Image::<u8, 1>::from_size_val(image.size(), 0).unwrap();
/// sharpen(&image, &mut sharpened).unwrap();
///
/// assert_eq!(sharpened.as_slice(), &[10, 10, 10, 10, 60, 10, 10, 10, 10]);
/// ```
pub fn sharpen<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
) -> Result<(), ImageError> {
    sharpen_with(src, dst, SharpenStrategy::default())
}

/// Sharpen an image with a 3x3 cross kernel using the given access strategy.
///
/// See [`sharpen`] for the filter definition.
///
/// # Errors
///
/// Returns an error if `src` and `dst` differ in size.
pub fn sharpen_with<const C: usize>(
    src: &Image<u8, C>,
    dst: &mut Image<u8, C>,
    strategy: SharpenStrategy,
) -> Result<(), ImageError> {
    // copies the border, the interior is overwritten below
    ops::copy_image(src, dst)?;

    if src.rows() < 3 || src.cols() < 3 {
        return Ok(());
    }

    match strategy {
        SharpenStrategy::Indexed => sharpen_indexed(src, dst),
        SharpenStrategy::RowSlices => sharpen_row_slices(src, dst),
        SharpenStrategy::Cursor => sharpen_cursor(src, dst),
    }

    Ok(())
}

fn sharpen_indexed<const C: usize>(src: &Image<u8, C>, dst: &mut Image<u8, C>) {
    let cols = src.cols();
    let src_data = src.as_slice();
    let dst_data = dst.as_slice_mut();
    let at = |r: usize, c: usize, ch: usize| (r * cols + c) * C + ch;

    for r in 1..src.rows() - 1 {
        for c in 1..cols - 1 {
            for ch in 0..C {
                dst_data[at(r, c, ch)] = sharpen_sample(
                    src_data[at(r, c, ch)],
                    src_data[at(r - 1, c, ch)],
                    src_data[at(r + 1, c, ch)],
                    src_data[at(r, c - 1, ch)],
                    src_data[at(r, c + 1, ch)],
                );
            }
        }
    }
}

fn sharpen_row_slices<const C: usize>(src: &Image<u8, C>, dst: &mut Image<u8, C>) {
    let stride = C * src.cols();
    let src_data = src.as_slice();

    for (r, dst_row) in dst
        .as_slice_mut()
        .chunks_exact_mut(stride)
        .enumerate()
        .skip(1)
        .take(src.rows() - 2)
    {
        let previous = &src_data[(r - 1) * stride..r * stride];
        let current = &src_data[r * stride..(r + 1) * stride];
        let next = &src_data[(r + 1) * stride..(r + 2) * stride];

        for i in C..stride - C {
            dst_row[i] = sharpen_sample(
                current[i],
                previous[i],
                next[i],
                current[i - C],
                current[i + C],
            );
        }
    }
}

fn sharpen_cursor<const C: usize>(src: &Image<u8, C>, dst: &mut Image<u8, C>) {
    let stride = C * src.cols();
    let interior = stride - 2 * C;
    let src_data = src.as_slice();
    let dst_data = dst.as_slice_mut();

    // first interior sample of the second row
    let mut cursor = stride + C;
    for _ in 1..src.rows() - 1 {
        for _ in 0..interior {
            dst_data[cursor] = sharpen_sample(
                src_data[cursor],
                src_data[cursor - stride],
                src_data[cursor + stride],
                src_data[cursor - C],
                src_data[cursor + C],
            );
            cursor += 1;
        }
        // last column of this row and first column of the next
        cursor += 2 * C;
    }
}
