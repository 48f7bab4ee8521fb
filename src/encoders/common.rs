//! Helpers shared between all encoders

use image::{DynamicImage, GrayAlphaImage, GrayImage, LumaA, Rgb, RgbImage, RgbaImage};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
struct PixelFormatTransforms {
    grayscale: bool,
    opaque: bool,
}

impl PixelFormatTransforms {
    #[inline]
    fn all_false() -> Self {
        Self {
            grayscale: false,
            opaque: false,
        }
    }
}

fn find_pixel_optimizations(image: &RgbaImage) -> PixelFormatTransforms {
    // all transforms are assumed to be valid until proven invalid
    let mut result = PixelFormatTransforms {
        grayscale: true,
        opaque: true,
    };

    // Check for all properties in a single scan through memory.
    for row in image.rows() {
        for pixel in row {
            let [r, g, b, a] = pixel.0;
            // no early exit inside the row to keep this loop autovectorizable
            result.grayscale &= (r == g) & (r == b);
            result.opaque &= a == u8::MAX;
        }
        if result == PixelFormatTransforms::all_false() {
            return result;
        }
    }

    result
}

/// Converts the image to the narrowest pixel format that represents it losslessly:
/// drops the alpha channel if every pixel is opaque,
/// and stores the image as grayscale if every pixel is gray.
pub fn optimize_pixel_format(image: &RgbaImage) -> DynamicImage {
    let transforms = find_pixel_optimizations(image);
    let (width, height) = image.dimensions();
    match (transforms.grayscale, transforms.opaque) {
        (true, true) => DynamicImage::ImageLuma8(GrayImage::from_fn(width, height, |x, y| {
            image::Luma([image.get_pixel(x, y)[0]])
        })),
        (true, false) => {
            DynamicImage::ImageLumaA8(GrayAlphaImage::from_fn(width, height, |x, y| {
                let [v, _, _, a] = image.get_pixel(x, y).0;
                LumaA([v, a])
            }))
        }
        (false, true) => DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            let [r, g, b, _] = image.get_pixel(x, y).0;
            Rgb([r, g, b])
        })),
        (false, false) => DynamicImage::ImageRgba8(image.clone()),
    }
}

/// Composites the image over an opaque white background,
/// for formats that cannot store an alpha channel.
pub fn flatten_onto_white(image: &RgbaImage) -> RgbImage {
    let (width, height) = image.dimensions();
    RgbImage::from_fn(width, height, |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        let blend = |c: u8| -> u8 {
            let a = a as u32;
            ((c as u32 * a + 255 * (255 - a) + 127) / 255) as u8
        };
        Rgb([blend(r), blend(g), blend(b)])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, Rgba};

    #[test]
    fn opaque_color_drops_alpha() {
        let mut image = RgbaImage::from_pixel(4, 4, Rgba([200, 10, 10, 255]));
        image.put_pixel(1, 1, Rgba([0, 0, 255, 255]));
        let optimized = optimize_pixel_format(&image);
        assert_eq!(optimized.color(), ColorType::Rgb8);
        assert_eq!(optimized.to_rgba8(), image);
    }

    #[test]
    fn opaque_gray_becomes_luma() {
        let image = RgbaImage::from_fn(4, 4, |x, _| {
            let v = (x * 60) as u8;
            Rgba([v, v, v, 255])
        });
        let optimized = optimize_pixel_format(&image);
        assert_eq!(optimized.color(), ColorType::L8);
        assert_eq!(optimized.to_rgba8(), image);
    }

    #[test]
    fn transparent_gray_keeps_alpha() {
        let image = RgbaImage::from_pixel(2, 2, Rgba([80, 80, 80, 100]));
        let optimized = optimize_pixel_format(&image);
        assert_eq!(optimized.color(), ColorType::La8);
        assert_eq!(optimized.to_rgba8(), image);
    }

    #[test]
    fn transparent_color_is_untouched() {
        let mut image = RgbaImage::from_pixel(2, 2, Rgba([80, 20, 80, 255]));
        image.put_pixel(0, 0, Rgba([0, 0, 0, 0]));
        assert_eq!(optimize_pixel_format(&image).color(), ColorType::Rgba8);
    }

    #[test]
    fn flattening_blends_with_white() {
        let mut image = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 0]));
        image.put_pixel(1, 0, Rgba([255, 0, 0, 255]));
        let flat = flatten_onto_white(&image);
        assert_eq!(flat.get_pixel(0, 0), &Rgb([255, 255, 255]));
        assert_eq!(flat.get_pixel(1, 0), &Rgb([255, 0, 0]));
    }
}
