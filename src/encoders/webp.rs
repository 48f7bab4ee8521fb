use std::io::Write;

use image::RgbaImage;
use webp::{Encoder, WebPMemory};

use crate::{error::IconError, icon_err, icon_try};

pub fn encode<W: Write>(
    image: &RgbaImage,
    writer: &mut W,
    quality: Option<u8>,
) -> Result<(), IconError> {
    let encoder = Encoder::from_rgba(image.as_raw(), image.width(), image.height());
    // quality=100 means the icon should be lossless, matching imagemagick
    let lossless = quality == Some(100);
    let quality = quality.unwrap_or(75) as f32;

    let webp: WebPMemory = encoder
        .encode_simple(lossless, quality)
        .map_err(|e| icon_err!(EncodeOrWriteFailure, "WebP encoding failed: {e:?}"))?;
    icon_try!(EncodeOrWriteFailure, writer.write_all(&webp));
    Ok(())
}
