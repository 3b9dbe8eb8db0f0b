use std::fmt;

use crate::error::ValidationError;

/// Custom headers appended after the fixed prefix unless overridden.
pub const DEFAULT_NUM_CUSTOM: usize = 10;

/// Share of custom headers that carry random values, within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct RandomPortion(f64);

impl RandomPortion {
    pub const DEFAULT: Self = Self(0.5);
    pub const NONE: Self = Self(0.0);
    pub const ALL: Self = Self(1.0);

    /// # Errors
    ///
    /// Returns an error when `value` is NaN, infinite, or outside `[0, 1]`.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        if !value.is_finite() {
            return Err(ValidationError::RandomPortionNotFinite);
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(ValidationError::RandomPortionOutOfRange { value });
        }
        Ok(Self(value))
    }

    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

impl Default for RandomPortion {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for RandomPortion {
    type Error = ValidationError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl std::str::FromStr for RandomPortion {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|err| ValidationError::InvalidRandomPortion {
                value: trimmed.to_owned(),
                source: err,
            })?;
        Self::new(value)
    }
}

impl fmt::Display for RandomPortion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Shape of one generated request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerateParams {
    pub num_custom: usize,
    pub random_portion: RandomPortion,
}

impl Default for GenerateParams {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_CUSTOM, RandomPortion::DEFAULT)
    }
}

impl GenerateParams {
    #[must_use]
    pub const fn new(num_custom: usize, random_portion: RandomPortion) -> Self {
        Self {
            num_custom,
            random_portion,
        }
    }

    /// Number of custom headers with random values: `floor(num_custom * random_portion)`.
    #[must_use]
    pub fn random_count(&self) -> usize {
        let product = self.num_custom as f64 * self.random_portion.get();
        (product.floor() as usize).min(self.num_custom)
    }

    /// Number of custom headers with the fixed, fully compressible value.
    #[must_use]
    pub fn fixed_count(&self) -> usize {
        self.num_custom.saturating_sub(self.random_count())
    }

    /// Total headers in a request of this shape, fixed prefix included.
    #[must_use]
    pub const fn total_headers(&self) -> usize {
        self.num_custom.saturating_add(super::PREFIX_LEN)
    }
}
