use crate::{Image, ImageError};

/// Copy the pixel data of an image into another image of the same size.
///
/// # Arguments
///
/// * `src` - The source image.
/// * `dst` - The destination image.
///
/// # Errors
///
/// Returns an error if the sizes of `src` and `dst` differ.
///
/// Example:
///
/// ```
/// use keysharp_image::{Image, ImageSize};
/// use keysharp_image::ops::copy_image;
///
/// let image = Image::<u8, 1>::new(
///  ImageSize {
///   width: 2,
///   height: 1,
///  },
///  vec![0u8, 255],
/// ).unwrap();
///
/// let mut copy = Image::from_size_val(image.size(), 0u8).unwrap();
///
/// copy_image(&image, &mut copy).unwrap();
///
/// assert_eq!(copy.as_slice(), &[0, 255]);
/// ```
pub fn copy_image<T: Copy, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.width(),
            src.height(),
            dst.width(),
            dst.height(),
        ));
    }

    dst.as_slice_mut().copy_from_slice(src.as_slice());

    Ok(())
}
