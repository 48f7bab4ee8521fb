use std::path::{Path, PathBuf};

use crate::encode::OutputFormat;

/// Name of the file holding the icon of the given size, e.g. `icon-192x192.png`.
/// Depends only on the size and format, never on the platform.
pub fn artifact_file_name(size: u32, format: OutputFormat) -> String {
    format!("icon-{size}x{size}.{}", format.extension())
}

/// One generated icon file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// Width and height in pixels
    pub size: u32,
    pub format: OutputFormat,
    pub path: PathBuf,
}

impl Artifact {
    pub fn new(output_dir: &Path, size: u32, format: OutputFormat) -> Self {
        Self {
            size,
            format,
            path: output_dir.join(artifact_file_name(size, format)),
        }
    }

    pub fn file_name(&self) -> String {
        artifact_file_name(self.size, self.format)
    }
}
