//! Generates a set of square icons from a single source image.
//!
//! This library backs the `generate-icons` binary. The entry point is
//! [`job::GenerationJob`], configured with a [`config::GenerationConfig`].

#![forbid(unsafe_code)]

#[cfg(feature = "hardened_malloc")]
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

mod arg_parse_err;
pub mod arg_parsers;
pub mod args;
pub mod artifact;
pub mod config;
pub mod decode;
pub mod encode;
mod encoders;
pub mod error;
pub mod help;
pub mod job;
mod resize;
