//! CLI argument types and parsing helpers.
mod cli;
pub(crate) mod parsers;
mod types;

#[cfg(test)]
mod test_support;

pub use cli::GeneratorArgs;
pub use parsers::{parse_custom_count, parse_random_portion};
pub use types::PositiveU64;
