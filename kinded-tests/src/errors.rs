//! Error types for the widening scenarios: two narrow errors and their union.
use kinded::{either, Either};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("not a number: {0:?}")]
    NotANumber(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    #[error("{0} is out of range")]
    OutOfRange(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Range(#[from] RangeError),
}

pub fn parse(s: &str) -> Either<ParseError, i64> {
    s.trim()
        .parse::<i64>()
        .map_err(|_| ParseError::NotANumber(s.to_string()))
        .into()
}

pub fn in_range(n: i64) -> Either<RangeError, i64> {
    if (0..=100).contains(&n) {
        either::right(n)
    } else {
        either::left(RangeError::OutOfRange(n))
    }
}

/// parse then range-check, widening both errors into [`InputError`]
pub fn parse_percent(s: &str) -> Either<InputError, i64> {
    parse(s).flat_map_widen(in_range)
}
