use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PoolKind {
    #[error("authority")]
    Authority,
    #[error("custom header name")]
    HeaderName,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Invalid boolean '{value}'. Expected true/false, yes/no, on/off, or 1/0.")]
    InvalidBoolean { value: String },
    #[error("Value must be >= {min}.")]
    ValueTooSmall { min: u64 },
    #[error("Invalid value: {source}")]
    InvalidNumber {
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Custom header count must not be empty.")]
    CustomCountEmpty,
    #[error("Custom header count must not be negative (got '{value}').")]
    NegativeCustomCount { value: String },
    #[error("Custom header count must be a whole number (got '{value}').")]
    FractionalCustomCount { value: String },
    #[error("Invalid custom header count '{value}': {source}")]
    InvalidCustomCount {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
    #[error("Invalid random portion '{value}': {source}")]
    InvalidRandomPortion {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
    #[error("Random portion must be finite.")]
    RandomPortionNotFinite,
    #[error("Random portion must be within [0, 1] (got {value}).")]
    RandomPortionOutOfRange { value: f64 },
    #[error("The {kind} pool must contain at least one entry.")]
    EmptyPool { kind: PoolKind },
    #[cfg(test)]
    #[error("Test expectation failed: {message}")]
    TestExpectation { message: &'static str },
    #[cfg(test)]
    #[error("Test expectation failed: {message}: {value}")]
    TestExpectationValue {
        message: &'static str,
        value: String,
    },
}
