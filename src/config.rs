use std::path::PathBuf;

use crate::{arg_parsers::Filter, encode::OutputFormat, error::IconError, icon_err};

/// Icon sizes generated when none are specified: the usual web app manifest set
pub const DEFAULT_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];
pub const DEFAULT_SOURCE: &str = "original-icon.png";
pub const DEFAULT_OUTPUT_DIR: &str = "icons";

/// Everything a generation run needs to know.
/// The `Default` reproduces the stock job: `original-icon.png` into `icons/` as PNG.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    /// Square dimensions in pixels, processed in this order
    pub sizes: Vec<u32>,
    pub format: OutputFormat,
    pub filter: Filter,
    /// 0 to 100, interpreted by the encoder for `format`
    pub quality: Option<u8>,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            sizes: DEFAULT_SIZES.to_vec(),
            format: OutputFormat::default(),
            filter: Filter::default(),
            quality: None,
        }
    }
}

impl GenerationConfig {
    /// Rejects configurations that could not produce exactly one icon per size.
    pub fn validate(&self) -> Result<(), IconError> {
        if self.sizes.is_empty() {
            return Err(icon_err!(InvalidConfig, "no icon sizes specified"));
        }
        for (i, &size) in self.sizes.iter().enumerate() {
            if size == 0 {
                return Err(icon_err!(InvalidConfig, "icon size must be positive"));
            }
            if self.sizes[..i].contains(&size) {
                return Err(icon_err!(
                    InvalidConfig,
                    "icon size {size}x{size} is listed more than once"
                ));
            }
            if let Some(max) = self.format.max_dimension() {
                if size > max {
                    return Err(icon_err!(
                        InvalidConfig,
                        "{} icons cannot be larger than {max}x{max}, got {size}x{size}",
                        self.format
                    ));
                }
            }
        }
        if let Some(quality) = self.quality {
            if quality > 100 {
                return Err(icon_err!(
                    InvalidConfig,
                    "quality must be between 0 and 100, got {quality}"
                ));
            }
        }
        if !self.format.is_enabled() {
            return Err(icon_err!(
                InvalidConfig,
                "support for {} output was not compiled in",
                self.format
            ));
        }
        Ok(())
    }
}
