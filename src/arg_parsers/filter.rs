use std::{ffi::OsStr, fmt::Display};

use pic_scale_safe::ResamplingFunction;

use crate::arg_parse_err::ArgParseErr;

#[derive(
    Copy,
    Clone,
    Eq,
    PartialEq,
    Debug,
    Default,
    strum::EnumString,
    strum::IntoStaticStr,
    strum::VariantArray,
)]
#[strum(ascii_case_insensitive)]
/// Resampling filter used when scaling the source down (or up) to each icon size.
/// Names follow imagemagick's `-filter` option.
pub enum Filter {
    Box,
    Catrom,
    Cubic,
    Gaussian,
    Hermite,
    #[default]
    Lanczos,
    Lanczos2,
    Mitchell,
    Point,
    Spline,
    Triangle,
}

impl Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stringified: &'static str = self.into();
        f.write_str(stringified)
    }
}

impl TryFrom<&OsStr> for Filter {
    type Error = ArgParseErr;

    fn try_from(s: &OsStr) -> Result<Self, Self::Error> {
        if let Some(s_utf8) = s.to_str() {
            if let Ok(known_filter) = Self::try_from(s_utf8) {
                return Ok(known_filter);
            }
        }
        Err(ArgParseErr::with_msg(format!(
            "unrecognized image filter `{}'",
            s.to_string_lossy()
        )))
    }
}

impl Filter {
    pub fn into_resize(self) -> ResamplingFunction {
        match self {
            Filter::Box => ResamplingFunction::Box,
            Filter::Catrom => ResamplingFunction::CatmullRom,
            Filter::Cubic => ResamplingFunction::Cubic,
            Filter::Gaussian => ResamplingFunction::Gaussian,
            Filter::Hermite => ResamplingFunction::Hermite,
            Filter::Lanczos => ResamplingFunction::Lanczos3,
            Filter::Lanczos2 => ResamplingFunction::Lanczos2,
            Filter::Mitchell => ResamplingFunction::MitchellNetravalli,
            Filter::Point => ResamplingFunction::Nearest,
            Filter::Spline => ResamplingFunction::BSpline,
            Filter::Triangle => ResamplingFunction::Bilinear,
        }
    }
}
