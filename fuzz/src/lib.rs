use std::{num::NonZeroU8, path::Path};

use arbitrary::Unstructured;

/// Small RGBA image built from fuzzer input
#[derive(Debug)]
pub struct StructuredImage {
    width: NonZeroU8,
    height: NonZeroU8,
    rgba_data: Vec<u8>,
}

impl StructuredImage {
    pub fn save_as_png(&self, path: impl AsRef<Path>) -> Result<(), std::io::Error> {
        use image::{codecs::png::PngEncoder, ImageEncoder};
        use std::fs::File;

        let file = File::create(path)?;
        let encoder = PngEncoder::new_with_quality(
            file,
            image::codecs::png::CompressionType::Fast,
            image::codecs::png::FilterType::NoFilter,
        );
        encoder
            .write_image(
                &self.rgba_data,
                self.width.get() as u32,
                self.height.get() as u32,
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))
    }
}

impl<'a> arbitrary::Arbitrary<'a> for StructuredImage {
    fn arbitrary(unstructured: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let width: NonZeroU8 = unstructured.arbitrary()?;
        let height: NonZeroU8 = unstructured.arbitrary()?;
        let rgba_data_len = width.get() as usize * height.get() as usize * 4;
        let rgba_data = unstructured.bytes(rgba_data_len)?;

        Ok(Self {
            width,
            height,
            rgba_data: rgba_data.to_vec(),
        })
    }
}
