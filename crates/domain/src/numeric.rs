//! Strict numeric field parsing.
//!
//! `from_str_radix` accepts a leading `+`, which never appears in a log
//! field, so digits are checked before parsing.

use crate::DomainError;

pub fn parse_hex_u16(field: &'static str, value: &str) -> Result<u16, DomainError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(DomainError::invalid_hex(field, value));
    }
    u16::from_str_radix(value, 16).map_err(|_| DomainError::invalid_hex(field, value))
}

pub fn parse_hex_u128(field: &'static str, value: &str) -> Result<u128, DomainError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(DomainError::invalid_hex(field, value));
    }
    u128::from_str_radix(value, 16).map_err(|_| DomainError::invalid_hex(field, value))
}

pub fn parse_decimal_u64(field: &'static str, value: &str) -> Result<u64, DomainError> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::invalid_number(field, value));
    }
    value
        .parse::<u64>()
        .map_err(|_| DomainError::invalid_number(field, value))
}

pub fn parse_decimal_u16(field: &'static str, value: &str) -> Result<u16, DomainError> {
    let n = parse_decimal_u64(field, value)?;
    u16::try_from(n).map_err(|_| DomainError::invalid_number(field, value))
}
