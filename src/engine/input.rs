//! Validation of caller-supplied parameters
//!
//! Everything here runs before a run is created, so a rejected request never
//! leaves partial state behind.

use super::constants::*;
use super::errors::EngineError;
use rand::Rng;
use std::time::Duration;

/// Parse a list of integers separated by commas and/or whitespace
pub fn parse_values(text: &str) -> Result<Vec<i64>, EngineError> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<i64>()
                .map_err(|_| EngineError::invalid("values", format!("'{}' is not an integer", token)))
        })
        .collect()
}

/// Check a step delay and turn it into a [`Duration`]
pub fn validate_delay(delay_ms: u64) -> Result<Duration, EngineError> {
    if !(MIN_DELAY_MS..=MAX_DELAY_MS).contains(&delay_ms) {
        return Err(EngineError::invalid(
            "delay",
            format!(
                "{} ms is outside {}..={} ms",
                delay_ms, MIN_DELAY_MS, MAX_DELAY_MS
            ),
        ));
    }
    Ok(Duration::from_millis(delay_ms))
}

pub fn validate_array_len(len: usize) -> Result<usize, EngineError> {
    if !(MIN_ARRAY_LEN..=MAX_ARRAY_LEN).contains(&len) {
        return Err(EngineError::invalid(
            "length",
            format!("{} is outside {}..={}", len, MIN_ARRAY_LEN, MAX_ARRAY_LEN),
        ));
    }
    Ok(len)
}

pub fn validate_levels(levels: u32) -> Result<u32, EngineError> {
    if !(MIN_TREE_LEVELS..=MAX_TREE_LEVELS).contains(&levels) {
        return Err(EngineError::invalid(
            "levels",
            format!(
                "{} is outside {}..={}",
                levels, MIN_TREE_LEVELS, MAX_TREE_LEVELS
            ),
        ));
    }
    Ok(levels)
}

/// Fresh array of `len` values in `1..=RANDOM_VALUE_MAX`
pub fn random_values<R: Rng + ?Sized>(len: usize, rng: &mut R) -> Vec<i64> {
    (0..len)
        .map(|_| rng.random_range(1..=RANDOM_VALUE_MAX))
        .collect()
}
