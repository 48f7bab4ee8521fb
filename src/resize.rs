use image::{DynamicImage, RgbaImage};
use pic_scale_safe::{ImageSize, ResamplingFunction};

use crate::{arg_parsers::Filter, error::IconError, icon_err};

/// Source pixels prepared once and then resampled to every icon size.
///
/// Resampling happens on premultiplied alpha so that fully transparent pixels
/// do not bleed their (invisible) color into the visible edges of the icon.
pub struct PreparedSource {
    original: RgbaImage,
    premultiplied: Vec<u8>,
}

impl PreparedSource {
    pub fn new(image: DynamicImage) -> Self {
        let original = image.into_rgba8();
        let mut premultiplied = original.as_raw().clone();
        pic_scale_safe::premultiply_rgba8(&mut premultiplied);
        Self {
            original,
            premultiplied,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.original.dimensions()
    }

    /// Resamples the source to exactly `size` x `size` pixels.
    /// The aspect ratio of the source is not preserved.
    pub fn resize_square(&self, size: u32, filter: Filter) -> Result<RgbaImage, IconError> {
        if self.dimensions() == (size, size) {
            return Ok(self.original.clone());
        }
        let (src_width, src_height) = self.dimensions();
        log::debug!(
            "resizing {src_width}x{src_height} to {size}x{size} with the {filter} filter"
        );
        let mut pixels = resize_rgba8(
            &self.premultiplied,
            (src_width, src_height),
            size,
            filter.into_resize(),
        )?;
        pic_scale_safe::unpremultiply_rgba8(&mut pixels);
        RgbaImage::from_raw(size, size, pixels).ok_or_else(|| {
            icon_err!(
                ResizeFailure,
                "resampler returned a buffer of the wrong length for {size}x{size}"
            )
        })
    }
}

fn resize_rgba8(
    pixels: &[u8],
    (src_width, src_height): (u32, u32),
    size: u32,
    algorithm: ResamplingFunction,
) -> Result<Vec<u8>, IconError> {
    let src_size = ImageSize::new(src_width as usize, src_height as usize);
    let dst_size = ImageSize::new(size as usize, size as usize);
    pic_scale_safe::resize_rgba8(pixels, src_size, dst_size, algorithm).map_err(|e| {
        icon_err!(
            ResizeFailure,
            "cannot resize {src_width}x{src_height} to {size}x{size}: {e:?}"
        )
    })
}
