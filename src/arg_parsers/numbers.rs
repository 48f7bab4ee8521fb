use std::{ffi::OsStr, str::FromStr};

use crate::arg_parse_err::ArgParseErr;

/// Strips leading and trailing whitespace from an input string slice
/// and attempts to parse the remaining string into a specified numeric type `T`.
pub fn strip_and_parse_number<T>(input: &str) -> Result<T, T::Err>
where
    T: FromStr,
    T::Err: std::error::Error,
{
    input.trim().parse::<T>()
}

/// Parses a numeric command-line value. Non-UTF-8 input is rejected
/// with a message that echoes the value back to the user.
pub fn parse_numeric_arg<T>(input: &OsStr) -> Result<T, ArgParseErr>
where
    T: FromStr,
    T::Err: std::error::Error,
{
    let utf8 = input.to_str().ok_or_else(ArgParseErr::new)?;
    strip_and_parse_number(utf8).map_err(|_| ArgParseErr::new())
}
