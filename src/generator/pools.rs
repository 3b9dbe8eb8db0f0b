use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{PoolKind, ValidationError};

/// One fixed front-end origin plus five backend origins that differ only by
/// a numeric suffix.
pub const DEFAULT_AUTHORITIES: [&str; 6] = [
    "www.foo.com",
    "api1.backend.region.bar.com:8000",
    "api2.backend.region.bar.com:8000",
    "api3.backend.region.bar.com:8000",
    "api4.backend.region.bar.com:8000",
    "api5.backend.region.bar.com:8000",
];

/// Character repeated to build the default custom header names.
pub const HEADER_NAME_CHAR: char = 'x';
/// Shortest default custom header name.
pub const HEADER_NAME_MIN_LEN: usize = 10;
/// Longest default custom header name.
pub const HEADER_NAME_MAX_LEN: usize = 19;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Pool {
    entries: Vec<String>,
}

impl Pool {
    fn new<I, S>(kind: PoolKind, entries: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let entries: Vec<String> = entries.into_iter().map(Into::into).collect();
        if entries.is_empty() {
            return Err(ValidationError::EmptyPool { kind });
        }
        Ok(Self { entries })
    }

    // Construction rejects empty pools, so `choose` always yields an entry.
    fn pick<R>(&self, rng: &mut R) -> &str
    where
        R: Rng + ?Sized,
    {
        self.entries.choose(rng).map_or("", String::as_str)
    }

    fn contains(&self, value: &str) -> bool {
        self.entries.iter().any(|entry| entry == value)
    }
}

/// Candidate `:authority` values (`host[:port]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorityPool(Pool);

impl AuthorityPool {
    /// Builds a pool from caller-supplied authorities.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyPool`] when `entries` is empty.
    pub fn new<I, S>(entries: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Pool::new(PoolKind::Authority, entries).map(Self)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0.entries
    }

    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.0.contains(value)
    }

    /// Picks one authority uniformly at random.
    #[must_use]
    pub fn pick<R>(&self, rng: &mut R) -> &str
    where
        R: Rng + ?Sized,
    {
        self.0.pick(rng)
    }
}

impl Default for AuthorityPool {
    fn default() -> Self {
        Self(Pool {
            entries: DEFAULT_AUTHORITIES.iter().map(|&value| value.to_owned()).collect(),
        })
    }
}

/// Candidate names for synthetic custom headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderNamePool(Pool);

impl HeaderNamePool {
    /// Builds a pool from caller-supplied header names.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyPool`] when `entries` is empty.
    pub fn new<I, S>(entries: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Pool::new(PoolKind::HeaderName, entries).map(Self)
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0.entries
    }

    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        self.0.contains(value)
    }

    /// Picks one name uniformly at random, with replacement.
    #[must_use]
    pub fn pick<R>(&self, rng: &mut R) -> &str
    where
        R: Rng + ?Sized,
    {
        self.0.pick(rng)
    }
}

impl Default for HeaderNamePool {
    fn default() -> Self {
        let entries = (HEADER_NAME_MIN_LEN..=HEADER_NAME_MAX_LEN)
            .map(|len| HEADER_NAME_CHAR.to_string().repeat(len))
            .collect();
        Self(Pool { entries })
    }
}
