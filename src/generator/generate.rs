use rand::Rng;

use super::params::GenerateParams;
use super::pools::{AuthorityPool, HeaderNamePool};
use super::request::Request;

pub const METHOD: &str = "GET";
pub const SCHEME: &str = "https";
pub const PATH_PREFIX: &str = "/api/v1/foo/bar/baz/abcdef?";
/// Exclusive upper bound of the numeric query suffix on `:path`.
pub const PATH_SUFFIX_BOUND: u32 = 1000;
pub const USER_AGENT: &str = "SomeUA/5.0 (really fake, thanks for all the fish)";
/// Length of every custom header value, random or fixed.
pub const CUSTOM_VALUE_LEN: usize = 40;
pub const FIXED_VALUE_CHAR: char = 'y';

/// Builds synthetic requests from a pair of read-only pools.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestGenerator {
    authorities: AuthorityPool,
    header_names: HeaderNamePool,
}

impl RequestGenerator {
    #[must_use]
    pub const fn new(authorities: AuthorityPool, header_names: HeaderNamePool) -> Self {
        Self {
            authorities,
            header_names,
        }
    }

    #[must_use]
    pub const fn authorities(&self) -> &AuthorityPool {
        &self.authorities
    }

    #[must_use]
    pub const fn header_names(&self) -> &HeaderNamePool {
        &self.header_names
    }

    /// Generates one request.
    ///
    /// The result always starts with `:method`, `:scheme`, `:authority`,
    /// `:path` and `user-agent`, followed by `params.num_custom` custom
    /// headers: the random-valued ones first, then the fixed-valued ones.
    #[must_use]
    pub fn generate<R>(&self, rng: &mut R, params: &GenerateParams) -> Request
    where
        R: Rng + ?Sized,
    {
        let mut request = Request::with_capacity(params.total_headers());

        request.push(":method", METHOD);
        request.push(":scheme", SCHEME);
        request.push(":authority", self.authorities.pick(rng));
        let suffix = rng.gen_range(0..PATH_SUFFIX_BOUND);
        request.push(":path", format!("{}{}", PATH_PREFIX, suffix));
        request.push("user-agent", USER_AGENT);

        for _ in 0..params.random_count() {
            request.push(self.header_names.pick(rng), random_value(rng));
        }

        let fixed = fixed_value();
        for _ in 0..params.fixed_count() {
            request.push(self.header_names.pick(rng), fixed.as_str());
        }

        request
    }
}

fn random_value<R>(rng: &mut R) -> String
where
    R: Rng + ?Sized,
{
    (0..CUSTOM_VALUE_LEN)
        .map(|_| char::from(rng.gen_range(b'a'..=b'z')))
        .collect()
}

fn fixed_value() -> String {
    FIXED_VALUE_CHAR.to_string().repeat(CUSTOM_VALUE_LEN)
}
