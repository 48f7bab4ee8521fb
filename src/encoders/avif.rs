use std::io::Write;

use image::codecs::avif::AvifEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::{error::IconError, icon_try};

pub fn encode<W: Write>(
    image: &RgbaImage,
    writer: &mut W,
    quality: Option<u8>,
) -> Result<(), IconError> {
    let quality = quality.unwrap_or(50);
    let encoder = AvifEncoder::new_with_speed_quality(writer, 4, quality);
    // ravif already discards alpha channel automatically if all pixels are opaque,
    // so no need to explicitly convert on our end
    icon_try!(
        EncodeOrWriteFailure,
        encoder.write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8
        )
    );
    Ok(())
}
