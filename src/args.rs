//! Command-line argument parsing.
//!
//! Options follow imagemagick conventions: a single `-` prefix followed by the option name,
//! then its value as the next argument. With no arguments at all, the stock job runs.

use std::{
    ffi::{OsStr, OsString},
    path::PathBuf,
};

use strum::{EnumString, IntoStaticStr, VariantArray};

use crate::{
    arg_parse_err::ArgParseErr,
    arg_parsers::{parse_numeric_arg, parse_size_list, Filter},
    config::GenerationConfig,
    encode::OutputFormat,
    error::IconError,
    icon_err,
};

#[derive(EnumString, IntoStaticStr, VariantArray, Debug, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "kebab-case")]
pub enum Arg {
    Source,
    Output,
    Sizes,
    Format,
    Filter,
    Quality,
}

impl Arg {
    pub fn value_name(&self) -> &'static str {
        match self {
            Arg::Source => "file",
            Arg::Output => "directory",
            Arg::Sizes => "list",
            Arg::Format => "format",
            Arg::Filter => "type",
            Arg::Quality => "value",
        }
    }

    pub fn help_text(&self) -> &'static str {
        match self {
            Arg::Source => "image to generate the icons from",
            Arg::Output => "directory the icons are written to",
            Arg::Sizes => "comma-separated icon sizes, e.g. 72,96,128x128",
            Arg::Format => "output image format",
            Arg::Filter => "resampling filter used for resizing",
            Arg::Quality => "encoder quality from 0 to 100",
        }
    }

    fn apply(&self, config: &mut GenerationConfig, value: &OsStr) -> Result<(), IconError> {
        let arg_string: &'static str = self.into();
        self.apply_inner(config, value).map_err(|arg_err| {
            icon_err!(
                InvalidConfig,
                "{}",
                arg_err.display_with_arg(arg_string, value)
            )
        })
    }

    /// Split into its own function due to lack of try{} blocks on stable Rust.
    fn apply_inner(
        &self,
        config: &mut GenerationConfig,
        value: &OsStr,
    ) -> Result<(), ArgParseErr> {
        match self {
            Arg::Source => config.source = PathBuf::from(value),
            Arg::Output => config.output_dir = PathBuf::from(value),
            Arg::Sizes => config.sizes = parse_size_list(value)?,
            Arg::Format => config.format = OutputFormat::try_from(value)?,
            Arg::Filter => config.filter = Filter::try_from(value)?,
            Arg::Quality => config.quality = Some(parse_numeric_arg(value)?),
        };
        Ok(())
    }
}

/// Builds the job configuration from `argv`, starting from the defaults.
/// The first element is the path to the binary and is skipped.
pub fn parse_args(args: Vec<OsString>) -> Result<GenerationConfig, IconError> {
    let mut config = GenerationConfig::default();

    let mut iter = args.into_iter().skip(1); // skip argv[0], path to our binary
    while let Some(raw_arg) = iter.next() {
        let name = option_name(&raw_arg)?;
        let arg = Arg::try_from(name)
            .map_err(|_| icon_err!(InvalidConfig, "unrecognized option `{}'", name))?;
        let value = iter
            .next()
            .ok_or_else(|| icon_err!(InvalidConfig, "argument requires a value: -{name}"))?;
        arg.apply(&mut config, &value)?;
    }

    Ok(config)
}

/// Strips the `-` (or `--`) prefix from an option.
/// Anything that does not look like an option is rejected, since we take no positional arguments.
fn option_name(raw_arg: &OsStr) -> Result<&str, IconError> {
    let string = raw_arg.to_str().ok_or_else(|| {
        icon_err!(
            InvalidConfig,
            "unrecognized option `{}'",
            raw_arg.to_string_lossy()
        )
    })?;
    let name = string
        .strip_prefix("--")
        .or_else(|| string.strip_prefix('-'))
        .ok_or_else(|| icon_err!(InvalidConfig, "unexpected argument `{}'", string))?;
    if name.is_empty() {
        return Err(icon_err!(InvalidConfig, "unrecognized option `{}'", string));
    }
    Ok(name)
}
