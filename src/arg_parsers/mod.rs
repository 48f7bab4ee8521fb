//! Parsers for specific command-line argument formats

mod filter;
pub use filter::*;
mod sizes;
pub use sizes::*;
pub mod numbers;
pub use numbers::parse_numeric_arg;
