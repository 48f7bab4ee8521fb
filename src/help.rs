use current_platform::CURRENT_PLATFORM;
use strum::VariantArray;

use crate::{
    args::Arg,
    arg_parsers::Filter,
    config::{DEFAULT_OUTPUT_DIR, DEFAULT_SIZES, DEFAULT_SOURCE},
    encode::OutputFormat,
};

/// Prints usage and exits if `-help` or `--help` appears anywhere on the command line.
pub fn maybe_print_help_and_exit(bin_name: &str) {
    let wants_help = std::env::args_os()
        .skip(1)
        .any(|arg| arg == "--help" || arg == "-help");
    if wants_help {
        print_help(bin_name);
        std::process::exit(0);
    }
}

fn print_help(bin_name: &str) {
    print!("{}", help_text(bin_name));
}

pub fn help_text(bin_name: &str) -> String {
    let sizes: Vec<String> = DEFAULT_SIZES.iter().map(|s| s.to_string()).collect();
    let formats: Vec<String> = OutputFormat::VARIANTS
        .iter()
        .filter(|f| f.is_enabled())
        .map(|f| f.to_string())
        .collect();
    let filters: Vec<String> = Filter::VARIANTS.iter().map(|f| f.to_string()).collect();

    let mut text = String::new();
    text.push_str(&format!("Version: {}\n", version_string()));
    text.push_str(&format!("License: {}\n", env!("CARGO_PKG_LICENSE")));
    text.push_str(&format!("Usage: {bin_name} [options ...]\n"));
    text.push('\n');
    text.push_str(&format!(
        "Without options, reads {DEFAULT_SOURCE} and writes icon-<size>x<size>.png \
         into {DEFAULT_OUTPUT_DIR}/ for sizes {}.\n",
        sizes.join(",")
    ));
    text.push('\n');
    text.push_str("Options:\n");
    for arg in Arg::VARIANTS {
        let name: &'static str = arg.into();
        let flag = format!("-{name} {}", arg.value_name());
        text.push_str(&format!("  {flag:22} {}\n", arg.help_text()));
    }
    text.push_str(&format!("  {:22} {}\n", "-help", "print this message"));
    text.push('\n');
    text.push_str(&format!("Formats: {}\n", formats.join(" ")));
    text.push_str(&format!("Filters: {}\n", filters.join(" ")));
    text
}

fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    let version = env!("CARGO_PKG_VERSION");
    format!("wondericons {version} {cpu}")
}
