use std::io::Write;

use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbaImage};

use crate::encoders::common::flatten_onto_white;
use crate::{error::IconError, icon_try};

pub fn encode<W: Write>(
    image: &RgbaImage,
    writer: &mut W,
    quality: Option<u8>,
) -> Result<(), IconError> {
    // imagemagick defaults to 92 when the quality of the input cannot be estimated
    let quality = quality.unwrap_or(92).clamp(1, 100);
    let encoder = JpegEncoder::new_with_quality(writer, quality);
    // JPEG has no alpha channel, so transparent areas become white
    let pixels = DynamicImage::ImageRgb8(flatten_onto_white(image));
    icon_try!(EncodeOrWriteFailure, pixels.write_with_encoder(encoder));
    Ok(())
}
