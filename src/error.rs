use std::fmt::{Debug, Display};

/// What stage of icon generation failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The source image is missing or could not be read
    SourceUnavailable,
    /// The source bytes are not an image in a supported format
    DecodeFailure,
    /// The output directory could not be created, or the path is taken by something else
    DirectoryCreateFailure,
    /// The resampler rejected the requested dimensions
    ResizeFailure,
    /// Encoding or writing an output file failed
    EncodeOrWriteFailure,
    /// Bad sizes, command-line arguments or encoder settings
    InvalidConfig,
}

pub struct IconError {
    pub kind: ErrorKind,
    pub message: String,
}

impl IconError {
    pub fn new(kind: ErrorKind, message: String) -> Self {
        Self { kind, message }
    }
}

impl Display for IconError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl Debug for IconError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("IconError")
            .field(&self.kind)
            .field(&self.message)
            .finish()
    }
}

impl std::error::Error for IconError {}

#[macro_export]
macro_rules! icon_err {
    ($kind:ident, $($fmt:tt)+) => {
        $crate::error::IconError::new(
            $crate::error::ErrorKind::$kind,
            format!(
                "wondericons: {} @ {}:{}:{}",
                format_args!($($fmt)+),
                file!(),
                line!(),
                column!()
            ),
        )
    };
}

#[macro_export]
macro_rules! icon_try {
    ($kind:ident, $expr:expr $(,)?) => {
        match $expr {
            std::result::Result::Ok(val) => val,
            std::result::Result::Err(err) => {
                return std::result::Result::Err($crate::icon_err!($kind, "{}", err));
            }
        }
    };
}
