use super::types::PositiveU64;
use crate::error::ValidationError;
use crate::generator::RandomPortion;

pub(crate) fn parse_bool_env(s: &str) -> Result<bool, ValidationError> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "y" | "on" => Ok(true),
        "0" | "false" | "no" | "n" | "off" => Ok(false),
        _ => Err(ValidationError::InvalidBoolean {
            value: s.to_owned(),
        }),
    }
}

pub(crate) fn parse_iterations(s: &str) -> Result<u64, ValidationError> {
    s.parse::<PositiveU64>().map(PositiveU64::get)
}

/// Parses a non-negative whole number of custom headers.
///
/// Negative and fractional inputs get their own error kinds instead of a
/// generic parse failure.
///
/// # Errors
///
/// Returns an error when the input is empty, negative, fractional, or not a
/// number that fits in `usize`.
pub fn parse_custom_count(s: &str) -> Result<usize, ValidationError> {
    let value = s.trim();
    if value.is_empty() {
        return Err(ValidationError::CustomCountEmpty);
    }

    let parse_err = match value.parse::<usize>() {
        Ok(count) => return Ok(count),
        Err(err) => err,
    };

    if let Ok(number) = value.parse::<f64>()
        && number.is_finite()
    {
        if number.is_sign_negative() && number != 0.0 {
            return Err(ValidationError::NegativeCustomCount {
                value: value.to_owned(),
            });
        }
        if number.fract() != 0.0 {
            return Err(ValidationError::FractionalCustomCount {
                value: value.to_owned(),
            });
        }
    }

    Err(ValidationError::InvalidCustomCount {
        value: value.to_owned(),
        source: parse_err,
    })
}

/// Parses a random portion in `[0, 1]`.
///
/// # Errors
///
/// Returns an error when the input is not a finite number within `[0, 1]`.
pub fn parse_random_portion(s: &str) -> Result<RandomPortion, ValidationError> {
    s.parse::<RandomPortion>()
}
