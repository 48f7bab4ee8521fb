#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};

/// Writes a 600x600 PNG with a gradient, a transparent border and an opaque center,
/// so that resizing it exercises color, alpha and edges.
pub fn write_source_icon(dir: &Path) -> PathBuf {
    let path = dir.join("original-icon.png");
    let image = RgbaImage::from_fn(600, 600, |x, y| {
        let inside = (50..550).contains(&x) && (50..550).contains(&y);
        let alpha = if inside { 255 } else { 0 };
        Rgba([(x / 3) as u8, (y / 3) as u8, 128, alpha])
    });
    image.save(&path).expect("failed to write the source fixture");
    path
}

/// Sorted names of the files in `dir`
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .expect("failed to list the directory")
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

pub fn dimensions_of(path: &Path) -> (u32, u32) {
    image::image_dimensions(path).expect("could not read the output image")
}
