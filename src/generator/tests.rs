use std::collections::BTreeSet;

use rand::SeedableRng;
use rand::rngs::StdRng;

use super::*;
use crate::error::{AppError, AppResult, PoolKind, ValidationError};

fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

fn portion(value: f64) -> AppResult<RandomPortion> {
    RandomPortion::new(value).map_err(AppError::from)
}

fn fixed_value() -> String {
    FIXED_VALUE_CHAR.to_string().repeat(CUSTOM_VALUE_LEN)
}

fn is_random_value(value: &str) -> bool {
    value.len() == CUSTOM_VALUE_LEN && value.bytes().all(|byte| byte.is_ascii_lowercase())
}

fn custom_headers(request: &Request) -> &[Header] {
    request.headers().get(PREFIX_LEN..).unwrap_or_default()
}

#[test]
fn default_request_has_fixed_prefix() -> AppResult<()> {
    let generator = RequestGenerator::default();
    let mut rng = seeded(7);
    let request = generator.generate(&mut rng, &GenerateParams::default());

    let names: Vec<&str> = request
        .headers()
        .iter()
        .take(PREFIX_LEN)
        .map(|header| header.name.as_str())
        .collect();
    if names != PREFIX_NAMES {
        return Err(AppError::validation(format!("Unexpected prefix: {:?}", names)));
    }
    if request.get(":method") != Some(METHOD) || request.get(":scheme") != Some(SCHEME) {
        return Err(AppError::validation("Unexpected :method/:scheme"));
    }
    if request.get("user-agent") != Some(USER_AGENT) {
        return Err(AppError::validation("Unexpected user-agent"));
    }
    let pseudo = request.headers().iter().filter(|header| header.is_pseudo()).count();
    if pseudo != 4 {
        return Err(AppError::validation("Expected exactly four pseudo-headers"));
    }
    Ok(())
}

#[test]
fn header_count_matches_custom_count() -> AppResult<()> {
    let generator = RequestGenerator::default();
    let mut rng = seeded(11);
    for num_custom in [0_usize, 1, 4, 10, 33] {
        for value in [0.0, 0.25, 0.5, 0.9, 1.0] {
            let params = GenerateParams::new(num_custom, portion(value)?);
            let request = generator.generate(&mut rng, &params);
            if request.len() != PREFIX_LEN.saturating_add(num_custom) {
                return Err(AppError::validation(format!(
                    "num_custom={} portion={} produced {} headers",
                    num_custom,
                    value,
                    request.len()
                )));
            }
        }
    }
    Ok(())
}

#[test]
fn default_split_is_five_random_then_five_fixed() -> AppResult<()> {
    let generator = RequestGenerator::default();
    let mut rng = seeded(3);
    let request = generator.generate(&mut rng, &GenerateParams::default());
    let custom = custom_headers(&request);
    if custom.len() != 10 {
        return Err(AppError::validation("Expected 10 custom headers"));
    }

    let fixed = fixed_value();
    let (random_part, fixed_part) = custom.split_at(5);
    for header in random_part {
        if !is_random_value(&header.value) {
            return Err(AppError::validation(format!(
                "Expected random value, got '{}'",
                header.value
            )));
        }
        if !(HEADER_NAME_MIN_LEN..=HEADER_NAME_MAX_LEN).contains(&header.name.len()) {
            return Err(AppError::validation("Custom header name length out of range"));
        }
    }
    for header in fixed_part {
        if header.value != fixed {
            return Err(AppError::validation(format!(
                "Expected fixed value, got '{}'",
                header.value
            )));
        }
        if !generator.header_names().contains(&header.name) {
            return Err(AppError::validation("Custom header name not from pool"));
        }
    }
    Ok(())
}

#[test]
fn split_truncates_instead_of_rounding() -> AppResult<()> {
    let quarter = GenerateParams::new(4, portion(0.25)?);
    if quarter.random_count() != 1 || quarter.fixed_count() != 3 {
        return Err(AppError::validation("Expected 1 random + 3 fixed"));
    }
    let almost_all = GenerateParams::new(3, portion(0.9)?);
    if almost_all.random_count() != 2 || almost_all.fixed_count() != 1 {
        return Err(AppError::validation("Expected floor(2.7) = 2 random headers"));
    }
    let tiny = GenerateParams::new(1, portion(0.99)?);
    if tiny.random_count() != 0 {
        return Err(AppError::validation("Expected floor(0.99) = 0 random headers"));
    }

    let generator = RequestGenerator::default();
    let mut rng = seeded(5);
    let request = generator.generate(&mut rng, &quarter);
    let custom = custom_headers(&request);
    let fixed = fixed_value();
    let random_values = custom
        .iter()
        .take_while(|header| header.value != fixed)
        .count();
    let fixed_values = custom.iter().filter(|header| header.value == fixed).count();
    if random_values != 1 || fixed_values != 3 {
        return Err(AppError::validation(format!(
            "Unexpected split: {} random, {} fixed",
            random_values, fixed_values
        )));
    }
    Ok(())
}

#[test]
fn extreme_portions_use_a_single_kind() -> AppResult<()> {
    let generator = RequestGenerator::default();
    let mut rng = seeded(9);
    let fixed = fixed_value();

    let none = generator.generate(&mut rng, &GenerateParams::new(6, RandomPortion::NONE));
    if custom_headers(&none).iter().any(|header| header.value != fixed) {
        return Err(AppError::validation("Expected only fixed values at portion 0"));
    }

    let all = generator.generate(&mut rng, &GenerateParams::new(6, RandomPortion::ALL));
    if !custom_headers(&all)
        .iter()
        .all(|header| is_random_value(&header.value))
    {
        return Err(AppError::validation("Expected only random values at portion 1"));
    }
    Ok(())
}

#[test]
fn path_suffix_stays_below_bound() -> AppResult<()> {
    let generator = RequestGenerator::default();
    let mut rng = seeded(13);
    for _ in 0..2_000 {
        let request = generator.generate(&mut rng, &GenerateParams::new(0, RandomPortion::NONE));
        let path = request
            .get(":path")
            .ok_or_else(|| AppError::validation("Missing :path"))?;
        let suffix = path
            .strip_prefix(PATH_PREFIX)
            .ok_or_else(|| AppError::validation(format!("Unexpected :path '{}'", path)))?;
        let number: u32 = suffix
            .parse()
            .map_err(|err| AppError::validation(format!("Bad suffix '{}': {}", suffix, err)))?;
        if number >= PATH_SUFFIX_BOUND {
            return Err(AppError::validation("Path suffix out of range"));
        }
    }
    Ok(())
}

#[test]
fn authorities_cover_whole_pool() -> AppResult<()> {
    let generator = RequestGenerator::default();
    let mut rng = seeded(17);
    let mut seen = BTreeSet::new();
    for _ in 0..10_000 {
        let request = generator.generate(&mut rng, &GenerateParams::new(0, RandomPortion::NONE));
        let authority = request
            .get(":authority")
            .ok_or_else(|| AppError::validation("Missing :authority"))?;
        if !generator.authorities().contains(authority) {
            return Err(AppError::validation(format!(
                "Authority '{}' not in pool",
                authority
            )));
        }
        seen.insert(authority.to_owned());
    }
    if seen.len() != DEFAULT_AUTHORITIES.len() {
        return Err(AppError::validation(format!(
            "Only saw {} of {} authorities",
            seen.len(),
            DEFAULT_AUTHORITIES.len()
        )));
    }
    Ok(())
}

#[test]
fn custom_pools_are_honoured() -> AppResult<()> {
    let generator = RequestGenerator::new(
        AuthorityPool::new(["only.example:443"])?,
        HeaderNamePool::new(["x-one"])?,
    );
    let mut rng = seeded(21);
    let request = generator.generate(&mut rng, &GenerateParams::default());
    if request.get(":authority") != Some("only.example:443") {
        return Err(AppError::validation("Expected the single authority"));
    }
    if custom_headers(&request)
        .iter()
        .any(|header| header.name != "x-one")
    {
        return Err(AppError::validation("Expected every custom header to be x-one"));
    }
    Ok(())
}

#[test]
fn default_pools_match_reference_shape() -> AppResult<()> {
    let names = HeaderNamePool::default();
    let lengths: Vec<usize> = names.as_slice().iter().map(String::len).collect();
    let expected: Vec<usize> = (HEADER_NAME_MIN_LEN..=HEADER_NAME_MAX_LEN).collect();
    if lengths != expected {
        return Err(AppError::validation(format!("Unexpected lengths: {:?}", lengths)));
    }
    if !names
        .as_slice()
        .iter()
        .all(|name| name.chars().all(|ch| ch == HEADER_NAME_CHAR))
    {
        return Err(AppError::validation("Expected names of repeated 'x'"));
    }
    if AuthorityPool::default().as_slice().len() != 6 {
        return Err(AppError::validation("Expected six default authorities"));
    }
    Ok(())
}

#[test]
fn empty_pools_are_rejected() -> AppResult<()> {
    let empty: [&str; 0] = [];
    match AuthorityPool::new(empty) {
        Err(ValidationError::EmptyPool {
            kind: PoolKind::Authority,
        }) => {}
        Err(err) => return Err(AppError::validation(format!("Unexpected error: {}", err))),
        Ok(_) => return Err(AppError::validation("Expected empty authority pool error")),
    }
    match HeaderNamePool::new(empty) {
        Err(ValidationError::EmptyPool {
            kind: PoolKind::HeaderName,
        }) => {}
        Err(err) => return Err(AppError::validation(format!("Unexpected error: {}", err))),
        Ok(_) => return Err(AppError::validation("Expected empty header name pool error")),
    }
    Ok(())
}

#[test]
fn random_portion_rejects_out_of_range() -> AppResult<()> {
    for value in [-0.1, 1.000_001, 2.0] {
        if !matches!(
            RandomPortion::new(value),
            Err(ValidationError::RandomPortionOutOfRange { .. })
        ) {
            return Err(AppError::validation(format!("Expected {} to be rejected", value)));
        }
    }
    for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        if !matches!(
            RandomPortion::new(value),
            Err(ValidationError::RandomPortionNotFinite)
        ) {
            return Err(AppError::validation("Expected non-finite value to be rejected"));
        }
    }
    if "abc".parse::<RandomPortion>().is_ok() {
        return Err(AppError::validation("Expected parse failure for 'abc'"));
    }
    let parsed: RandomPortion = " 0.75 ".parse()?;
    if parsed != portion(0.75)? {
        return Err(AppError::validation("Expected 0.75"));
    }
    Ok(())
}

#[test]
fn same_seed_reproduces_requests() -> AppResult<()> {
    let generator = RequestGenerator::default();
    let params = GenerateParams::default();
    let mut first = seeded(42);
    let mut second = seeded(42);
    for _ in 0..50 {
        if generator.generate(&mut first, &params) != generator.generate(&mut second, &params) {
            return Err(AppError::validation("Expected identical requests for one seed"));
        }
    }
    Ok(())
}

#[test]
fn display_renders_one_line_per_header() -> AppResult<()> {
    let generator = RequestGenerator::default();
    let mut rng = seeded(1);
    let request = generator.generate(&mut rng, &GenerateParams::new(2, RandomPortion::NONE));
    let rendered = request.to_string();
    let lines: Vec<&str> = rendered.lines().collect();
    if lines.len() != request.len() || !rendered.ends_with('\n') {
        return Err(AppError::validation(format!("Unexpected rendering: {}", rendered)));
    }
    if lines.first() != Some(&":method: GET") || lines.get(1) != Some(&":scheme: https") {
        return Err(AppError::validation("Unexpected leading lines"));
    }
    Ok(())
}
