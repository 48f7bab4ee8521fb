use std::path::Path;

use image::{DynamicImage, ImageError, ImageReader};

use crate::{error::IconError, icon_err};

/// Reads the source image, guessing the format from the file contents.
///
/// I/O problems are reported as `SourceUnavailable`,
/// anything wrong with the bytes themselves as `DecodeFailure`.
pub fn decode(file: &Path) -> Result<DynamicImage, IconError> {
    let unavailable = |error: std::io::Error| {
        icon_err!(
            SourceUnavailable,
            "unable to open image '{}': {error}",
            file.display()
        )
    };
    let decoder = ImageReader::open(file)
        .map_err(unavailable)?
        .with_guessed_format()
        .map_err(unavailable)?;

    if decoder.format().is_none() {
        return Err(icon_err!(
            DecodeFailure,
            "no decode delegate for this image format '{}'",
            file.display()
        ));
    }

    decoder.decode().map_err(|error| match error {
        // a truncated file surfaces as an I/O error from the decoder, but it is still bad data
        ImageError::IoError(io)
            if !matches!(
                io.kind(),
                std::io::ErrorKind::UnexpectedEof | std::io::ErrorKind::InvalidData
            ) =>
        {
            unavailable(io)
        }
        other => icon_err!(
            DecodeFailure,
            "unable to decode image '{}': {other}",
            file.display()
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = decode(&dir.path().join("nope.png")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::SourceUnavailable);
        assert!(err.message.contains("nope.png"));
    }

    #[test]
    fn garbage_is_a_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"definitely not an image").unwrap();
        assert_eq!(decode(&path).unwrap_err().kind, ErrorKind::DecodeFailure);
    }

    #[cfg(feature = "png")]
    #[test]
    fn truncated_png_is_a_decode_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("truncated.png");
        let image = image::RgbaImage::from_pixel(32, 32, image::Rgba([1, 2, 3, 255]));
        image.save(&path).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();
        assert_eq!(decode(&path).unwrap_err().kind, ErrorKind::DecodeFailure);
    }

    #[cfg(feature = "png")]
    #[test]
    fn decodes_by_content_not_extension() {
        let dir = tempfile::tempdir().unwrap();
        let png_path = dir.path().join("icon.png");
        image::RgbaImage::from_pixel(5, 7, image::Rgba([9, 9, 9, 255]))
            .save(&png_path)
            .unwrap();
        let misnamed = dir.path().join("icon.jpg");
        std::fs::rename(&png_path, &misnamed).unwrap();
        let decoded = decode(&misnamed).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (5, 7));
    }
}
