use std::io::Write;

use image::codecs::png::{CompressionType, FilterType, PngEncoder};
use image::RgbaImage;

use crate::encoders::common::optimize_pixel_format;
use crate::{error::IconError, icon_try};

pub fn encode<W: Write>(
    image: &RgbaImage,
    writer: &mut W,
    quality: Option<u8>,
) -> Result<(), IconError> {
    let (compression, filter) = quality_to_compression_parameters(quality);
    let encoder = PngEncoder::new_with_quality(writer, compression, filter);
    let pixels_to_write = optimize_pixel_format(image);
    icon_try!(
        EncodeOrWriteFailure,
        pixels_to_write.write_with_encoder(encoder)
    );
    Ok(())
}

// for documentation on conversion of quality to encoding parameters see
// https://www.imagemagick.org/script/command-line-options.php#quality
fn quality_to_compression_parameters(quality: Option<u8>) -> (CompressionType, FilterType) {
    let Some(quality) = quality else {
        return (CompressionType::Default, FilterType::Adaptive);
    };

    // `image` only exposes three effort levels, so the ten zlib levels are bucketed
    let compression = match quality / 10 {
        0..=3 => CompressionType::Fast,
        4..=7 => CompressionType::Default,
        _ => CompressionType::Best,
    };
    let filter = match quality % 10 {
        0 => FilterType::NoFilter,
        1 => FilterType::Sub,
        2 => FilterType::Up,
        3 => FilterType::Avg,
        4 => FilterType::Paeth,
        _ => FilterType::Adaptive,
    };

    if filter == FilterType::NoFilter && compression == CompressionType::Fast {
        // CompressionType::Fast needs filtering for a reasonable compression ratio.
        // When using it, use the fastest filter instead of no filter at all.
        (CompressionType::Fast, FilterType::Up)
    } else {
        (compression, filter)
    }
}
