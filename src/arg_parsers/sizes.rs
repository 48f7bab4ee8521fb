use std::ffi::OsStr;

use crate::arg_parse_err::ArgParseErr;
use crate::arg_parsers::numbers::strip_and_parse_number;

/// Parses a comma-separated list of icon sizes such as `72,96,128` or `72x72,96x96`.
///
/// Every entry must be a positive square dimension. Duplicates are left for
/// [`GenerationConfig::validate`](crate::config::GenerationConfig::validate) to report.
pub fn parse_size_list(s: &OsStr) -> Result<Vec<u32>, ArgParseErr> {
    let s = s
        .to_str()
        .ok_or_else(|| ArgParseErr::with_msg("sizes must be valid UTF-8"))?;
    s.split(',').map(parse_size).collect()
}

fn parse_size(entry: &str) -> Result<u32, ArgParseErr> {
    let entry = entry.trim();
    if entry.is_empty() {
        return Err(ArgParseErr::with_msg("empty entry in size list"));
    }
    let size = match entry.split_once(['x', 'X']) {
        Some((width, height)) => {
            let width: u32 = parse_dimension(width, entry)?;
            let height: u32 = parse_dimension(height, entry)?;
            if width != height {
                return Err(ArgParseErr::with_msg(format!(
                    "icons must be square, got `{entry}'"
                )));
            }
            width
        }
        None => parse_dimension(entry, entry)?,
    };
    if size == 0 {
        return Err(ArgParseErr::with_msg(format!(
            "icon size must be positive, got `{entry}'"
        )));
    }
    Ok(size)
}

fn parse_dimension(s: &str, entry: &str) -> Result<u32, ArgParseErr> {
    strip_and_parse_number(s)
        .map_err(|_| ArgParseErr::with_msg(format!("invalid icon size `{entry}'")))
}
