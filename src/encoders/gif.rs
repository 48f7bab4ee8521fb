use std::io::Write;

use image::codecs::gif::GifEncoder;
use image::{ExtendedColorType, RgbaImage};

use crate::{error::IconError, icon_try};

pub fn encode<W: Write>(image: &RgbaImage, writer: &mut W) -> Result<(), IconError> {
    // speed 10 is the quantizer's default trade-off between speed and palette quality
    let mut encoder = GifEncoder::new_with_speed(writer, 10);
    icon_try!(
        EncodeOrWriteFailure,
        encoder.encode(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8
        )
    );
    Ok(())
}
