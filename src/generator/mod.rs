//! Synthetic request generation.
//!
//! A [`RequestGenerator`] owns the authority and custom-header-name pools and
//! turns a random source plus [`GenerateParams`] into one [`Request`].
mod generate;
mod params;
mod pools;
mod request;

#[cfg(test)]
mod tests;

pub use generate::{
    CUSTOM_VALUE_LEN, FIXED_VALUE_CHAR, METHOD, PATH_PREFIX, PATH_SUFFIX_BOUND, RequestGenerator,
    SCHEME, USER_AGENT,
};
pub use params::{DEFAULT_NUM_CUSTOM, GenerateParams, RandomPortion};
pub use pools::{
    AuthorityPool, DEFAULT_AUTHORITIES, HEADER_NAME_CHAR, HEADER_NAME_MAX_LEN,
    HEADER_NAME_MIN_LEN, HeaderNamePool,
};
pub use request::{Header, Request};

/// Names of the headers every request starts with, in order.
pub const PREFIX_NAMES: [&str; PREFIX_LEN] =
    [":method", ":scheme", ":authority", ":path", "user-agent"];
pub const PREFIX_LEN: usize = 5;
