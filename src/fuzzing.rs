use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::args::{GeneratorArgs, PositiveU64, parse_custom_count, parse_random_portion};
use crate::error::{AppError, AppResult};
use crate::generator::{GenerateParams, RandomPortion, Request, RequestGenerator};
use crate::output::{OutputFormat, write_request};

/// Parses a full command line (program name excluded).
///
/// # Errors
///
/// Returns an error when clap rejects the arguments.
pub fn parse_cli_input<I, T>(args: I) -> AppResult<GeneratorArgs>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let full = std::iter::once(std::ffi::OsString::from("fakehdrs"))
        .chain(args.into_iter().map(Into::into));
    GeneratorArgs::try_parse_from(full).map_err(AppError::from)
}

/// Parses a custom header count.
///
/// # Errors
///
/// Returns an error when the count is empty, negative, fractional, or invalid.
pub fn parse_custom_count_input(input: &str) -> AppResult<usize> {
    parse_custom_count(input).map_err(AppError::from)
}

/// Parses a random portion and returns the raw value.
///
/// # Errors
///
/// Returns an error when the value is not a finite number in `[0, 1]`.
pub fn parse_random_portion_input(input: &str) -> AppResult<f64> {
    parse_random_portion(input)
        .map(RandomPortion::get)
        .map_err(AppError::from)
}

/// Parses a positive u64 string value.
///
/// # Errors
///
/// Returns an error when the value is invalid or zero.
pub fn parse_positive_u64_input(input: &str) -> AppResult<u64> {
    let value: PositiveU64 = input.parse()?;
    Ok(value.get())
}

/// Generates one request from fuzzer-controlled inputs.
///
/// # Errors
///
/// Returns an error when `random_portion` is rejected.
pub fn generate_request_input(
    seed: u64,
    num_custom: usize,
    random_portion: f64,
) -> AppResult<Request> {
    let portion = RandomPortion::new(random_portion)?;
    let params = GenerateParams::new(num_custom, portion);
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(RequestGenerator::default().generate(&mut rng, &params))
}

/// Renders a request in both output formats.
///
/// # Errors
///
/// Returns an error when rendering fails.
pub fn render_request_input(request: &Request) -> AppResult<(Vec<u8>, Vec<u8>)> {
    let mut text = Vec::new();
    write_request(&mut text, request, OutputFormat::Text, 0)?;
    let mut jsonl = Vec::new();
    write_request(&mut jsonl, request, OutputFormat::Jsonl, 0)?;
    Ok((text, jsonl))
}
