//! Parsing of numeric sequences and targets from command line text.
//!
//! Values may be separated by commas, whitespace or newlines, so both
//! `"2,4,8"` and one-number-per-line files are accepted.

use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;

use crate::{CliError, Result};

/// Parse every number in `text`, in order.
pub fn parse_values<K>(text: &str) -> Result<Vec<K>>
where
    K: FromStr,
    K::Err: Display,
{
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<K>().map_err(|e| {
                CliError::parse(format!("value #{} '{}': {}", position + 1, token, e))
            })
        })
        .collect()
}

/// Parse a single search target.
pub fn parse_target<K>(text: &str) -> Result<K>
where
    K: FromStr,
    K::Err: Display,
{
    let token = text.trim();
    token
        .parse::<K>()
        .map_err(|e| CliError::parse(format!("target '{}': {}", token, e)))
}

/// Read and parse a file of numbers.
pub fn read_values_file<K>(path: &Path) -> Result<Vec<K>>
where
    K: FromStr,
    K::Err: Display,
{
    if !path.exists() {
        return Err(CliError::FileNotFound(path.display().to_string()));
    }
    let content = std::fs::read_to_string(path)?;
    parse_values(&content)
}
