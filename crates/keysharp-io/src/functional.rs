use std::path::Path;

use keysharp_image::{Image, ImageSize};

use crate::error::IoError;
use crate::jpeg::read_image_jpeg_rgb8;

/// Reads an RGB8 image, decoding JPEG files with the JPEG decoder.
///
/// Files with a `jpg` or `jpeg` extension go through [`read_image_jpeg_rgb8`],
/// any other file through [`read_image_any_rgb8`].
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Errors
///
/// Returns an error if the file does not exist or cannot be decoded.
pub fn read_image_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref();
    if is_jpeg(file_path) {
        read_image_jpeg_rgb8(file_path)
    } else {
        read_image_any_rgb8(file_path)
    }
}

fn is_jpeg(file_path: &Path) -> bool {
    file_path.extension().is_some_and(|ext| {
        ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg")
    })
}

/// Reads an RGB8 image from the given file path.
///
/// The method tries to read from any image format supported by the image
/// crate, guessing the format from the file contents. Grayscale and alpha
/// images are converted to three channels.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An RGB image with three channels.
///
/// # Errors
///
/// Returns an error if the file does not exist, cannot be read or cannot be decoded.
pub fn read_image_any_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let (size, img) = decode_any(file_path.as_ref())?;
    Ok(Image::new(size, img.into_rgb8().into_raw())?)
}

/// Reads a grayscale image from the given file path.
///
/// Color images are converted to a single luma channel.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
pub fn read_image_any_gray8(file_path: impl AsRef<Path>) -> Result<Image<u8, 1>, IoError> {
    let (size, img) = decode_any(file_path.as_ref())?;
    Ok(Image::new(size, img.into_luma8().into_raw())?)
}

fn decode_any(file_path: &Path) -> Result<(ImageSize, image::DynamicImage), IoError> {
    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = image::ImageReader::open(file_path)?
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    log::debug!(
        "decoded {} ({}, {:?})",
        file_path.display(),
        size,
        img.color()
    );

    Ok((size, img))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jpeg::write_image_jpeg_rgb8;

    #[test]
    fn read_any() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("flat.jpg");

        let image = Image::<u8, 3>::from_size_val([20, 10].into(), 200)?;
        write_image_jpeg_rgb8(&file_path, &image, 100)?;

        let image_back = read_image_any_rgb8(&file_path)?;
        assert_eq!(image_back.size().width, 20);
        assert_eq!(image_back.size().height, 10);
        assert_eq!(image_back.num_channels(), 3);

        // a flat image survives the lossy round trip almost unchanged
        assert!(image_back
            .as_slice()
            .iter()
            .all(|&v| (v as i32 - 200).abs() <= 3));

        Ok(())
    }

    #[test]
    fn read_any_gray() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("flat.jpg");

        let image = Image::<u8, 3>::from_size_val([8, 6].into(), 90)?;
        write_image_jpeg_rgb8(&file_path, &image, 100)?;

        let gray = read_image_any_gray8(&file_path)?;
        assert_eq!(gray.size(), image.size());
        assert_eq!(gray.num_channels(), 1);

        Ok(())
    }

    #[test]
    fn read_dispatches_on_extension() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;

        let jpeg_path = tmp_dir.path().join("flat.JPG");
        let image = Image::<u8, 3>::from_size_val([12, 4].into(), 64)?;
        write_image_jpeg_rgb8(&jpeg_path, &image, 100)?;
        assert_eq!(read_image_rgb8(&jpeg_path)?.size(), image.size());

        // jpeg files are decoded by the jpeg decoder, other files by the image crate
        let broken_jpeg = tmp_dir.path().join("broken.jpeg");
        std::fs::write(&broken_jpeg, b"not an image")?;
        assert!(matches!(
            read_image_rgb8(&broken_jpeg),
            Err(IoError::JpegDecodingError(_))
        ));

        let broken_other = tmp_dir.path().join("broken.bmp");
        std::fs::write(&broken_other, b"not an image")?;
        assert!(matches!(
            read_image_rgb8(&broken_other),
            Err(IoError::ImageDecodeError(_))
        ));

        assert!(matches!(
            read_image_rgb8(tmp_dir.path().join("missing.jpg")),
            Err(IoError::FileDoesNotExist(_))
        ));

        Ok(())
    }

    #[test]
    fn read_any_missing_file() {
        let result = read_image_any_rgb8("foreground.jpg.missing");
        assert!(matches!(result, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn read_any_invalid_data() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("broken.jpg");
        std::fs::write(&file_path, b"\xFF\xD8 truncated")?;

        let result = read_image_any_rgb8(&file_path);
        assert!(matches!(result, Err(IoError::ImageDecodeError(_))));

        Ok(())
    }
}
