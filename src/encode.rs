use std::{
    ffi::OsStr,
    fmt::Display,
    fs::File,
    io::{BufWriter, Seek, Write},
};

use image::{ImageFormat, RgbaImage};
use strum::{EnumString, VariantArray};

use crate::{
    arg_parse_err::ArgParseErr, artifact::Artifact, encoders, error::IconError, icon_err,
    icon_try,
};

/// The single encoding used for every icon written in a run.
#[derive(EnumString, VariantArray, Debug, Default, Clone, Copy, PartialEq, Eq)]
#[strum(ascii_case_insensitive)]
pub enum OutputFormat {
    #[default]
    Png,
    #[strum(serialize = "jpeg", serialize = "jpg")]
    Jpeg,
    WebP,
    Gif,
    Bmp,
    Ico,
    #[strum(serialize = "tiff", serialize = "tif")]
    Tiff,
    Avif,
}

impl OutputFormat {
    /// File extension used in artifact names, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
            OutputFormat::WebP => "webp",
            OutputFormat::Gif => "gif",
            OutputFormat::Bmp => "bmp",
            OutputFormat::Ico => "ico",
            OutputFormat::Tiff => "tiff",
            OutputFormat::Avif => "avif",
        }
    }

    pub fn image_format(self) -> ImageFormat {
        match self {
            OutputFormat::Png => ImageFormat::Png,
            OutputFormat::Jpeg => ImageFormat::Jpeg,
            OutputFormat::WebP => ImageFormat::WebP,
            OutputFormat::Gif => ImageFormat::Gif,
            OutputFormat::Bmp => ImageFormat::Bmp,
            OutputFormat::Ico => ImageFormat::Ico,
            OutputFormat::Tiff => ImageFormat::Tiff,
            OutputFormat::Avif => ImageFormat::Avif,
        }
    }

    /// Largest width and height the container can store, if it has a limit
    pub fn max_dimension(self) -> Option<u32> {
        match self {
            OutputFormat::Ico => Some(256),
            _ => None,
        }
    }

    /// Whether an encoder for this format was compiled in
    pub fn is_enabled(self) -> bool {
        match self {
            OutputFormat::Png => cfg!(feature = "png"),
            OutputFormat::Jpeg => cfg!(feature = "jpeg"),
            OutputFormat::WebP => cfg!(feature = "webp"),
            OutputFormat::Gif => cfg!(feature = "gif"),
            OutputFormat::Bmp => cfg!(feature = "bmp"),
            OutputFormat::Ico => cfg!(feature = "ico"),
            OutputFormat::Tiff => cfg!(feature = "tiff"),
            OutputFormat::Avif => cfg!(feature = "avif"),
        }
    }
}

impl Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl TryFrom<&OsStr> for OutputFormat {
    type Error = ArgParseErr;

    fn try_from(s: &OsStr) -> Result<Self, Self::Error> {
        s.to_str()
            .and_then(|s| s.parse().ok())
            .ok_or_else(|| {
                ArgParseErr::with_msg(format!(
                    "no encode delegate for this image format `{}'",
                    s.to_string_lossy().to_ascii_uppercase()
                ))
            })
    }
}

/// Encodes `pixels` and writes them to the artifact's path, replacing any existing file.
///
/// If anything fails after the file has been created, the partially written file is removed
/// so that a failed size never leaves a truncated image behind.
pub fn write_artifact(
    pixels: &RgbaImage,
    artifact: &Artifact,
    quality: Option<u8>,
) -> Result<(), IconError> {
    let path = &artifact.path;
    // `File::create` automatically truncates (overwrites) the file if it exists.
    let file = File::create(path).map_err(|error| {
        icon_err!(
            EncodeOrWriteFailure,
            "unable to open image '{}': {error}",
            path.display()
        )
    })?;
    let result = encode_and_flush(pixels, artifact.format, quality, BufWriter::new(file));
    if result.is_err() {
        if let Err(error) = std::fs::remove_file(path) {
            log::warn!(
                "could not remove partially written '{}': {error}",
                path.display()
            );
        }
    }
    result
}

fn encode_and_flush(
    pixels: &RgbaImage,
    format: OutputFormat,
    quality: Option<u8>,
    mut writer: BufWriter<File>,
) -> Result<(), IconError> {
    encode_inner(pixels, format, quality, &mut writer)?;
    // The buffers will be flushed automatically when the writer goes out of scope,
    // but that will not report any errors. This handles errors.
    icon_try!(EncodeOrWriteFailure, writer.flush());
    Ok(())
}

fn encode_inner<W: Write + Seek>(
    pixels: &RgbaImage,
    format: OutputFormat,
    quality: Option<u8>,
    writer: &mut W,
) -> Result<(), IconError> {
    log::debug!(
        "encoding {}x{} image as {format}",
        pixels.width(),
        pixels.height()
    );
    match format {
        #[cfg(feature = "png")]
        OutputFormat::Png => encoders::png::encode(pixels, writer, quality),
        #[cfg(feature = "jpeg")]
        OutputFormat::Jpeg => encoders::jpeg::encode(pixels, writer, quality),
        #[cfg(feature = "webp")]
        OutputFormat::WebP => encoders::webp::encode(pixels, writer, quality),
        #[cfg(feature = "gif")]
        OutputFormat::Gif => encoders::gif::encode(pixels, writer),
        #[cfg(feature = "avif")]
        OutputFormat::Avif => encoders::avif::encode(pixels, writer, quality),
        // formats without quality settings go through the generic encoder
        _ => {
            icon_try!(
                EncodeOrWriteFailure,
                pixels.write_to(writer, format.image_format())
            );
            Ok(())
        }
    }
}
