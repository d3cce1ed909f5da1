//! Token-level parsers for identifiers, timestamps and availability flags
//!
//! Numeric tokens accept an optional leading sign followed by ASCII digits.
//! Identifiers must land in `[0, 2^32 - 1]`; timestamps must be non-negative
//! but are otherwise unbounded.

use crate::constants::{MAX_IDENTIFIER, availability};
use crate::error::{Field, Result, UptimeError};
use num_bigint::{BigInt, BigUint};
use std::num::IntErrorKind;

/// Check for `[+-]?[0-9]+`
fn is_integer_literal(token: &str) -> bool {
    let digits = token
        .strip_prefix('+')
        .or_else(|| token.strip_prefix('-'))
        .unwrap_or(token);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Parse a station or charger identifier
pub fn parse_identifier(token: &str, field: Field, line: usize) -> Result<u32> {
    if !is_integer_literal(token) {
        return Err(UptimeError::numeric_format(field, token, line));
    }

    let value = token.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
            UptimeError::numeric_range(field, token, line)
        }
        _ => UptimeError::numeric_format(field, token, line),
    })?;

    if !(0..=MAX_IDENTIFIER).contains(&value) {
        return Err(UptimeError::numeric_range(field, token, line));
    }

    u32::try_from(value).map_err(|_| UptimeError::numeric_range(field, token, line))
}

/// Parse a non-negative timestamp of arbitrary magnitude
pub fn parse_timestamp(token: &str, field: Field, line: usize) -> Result<BigUint> {
    if !is_integer_literal(token) {
        return Err(UptimeError::numeric_format(field, token, line));
    }

    let value: BigInt = token
        .parse()
        .map_err(|_| UptimeError::numeric_format(field, token, line))?;

    value
        .to_biguint()
        .ok_or_else(|| UptimeError::numeric_range(field, token, line))
}

/// Parse the up/down flag (case-insensitive `true`/`false`)
pub fn parse_availability(token: &str, line: usize) -> Result<bool> {
    match token.to_lowercase().as_str() {
        availability::UP => Ok(true),
        availability::DOWN => Ok(false),
        _ => Err(UptimeError::InvalidBoolean {
            token: token.to_string(),
            line,
        }),
    }
}
