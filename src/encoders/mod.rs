//! Dedicated encoders for the formats that take a quality setting
//! or need the pixels massaged before encoding

pub mod common;
#[cfg(feature = "avif")]
pub mod avif;
#[cfg(feature = "gif")]
pub mod gif;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png")]
pub mod png;
#[cfg(feature = "webp")]
pub mod webp;
