use crate::numeric::parse_hex_u128;
use crate::DomainError;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// `::ffff:0.0.0.0` as a 128-bit integer.
const MAPPED_FLOOR: u128 = 0xffff_0000_0000;
/// `::ffff:255.255.255.255` as a 128-bit integer.
const MAPPED_CEILING: u128 = 0xffff_ffff_ffff;

/// An address as logged by tinydns/dnscache: 8 hex digits for IPv4, 32 for IPv6.
///
/// The variant is chosen from the numeric value, not the digit count, so a
/// 32-digit IPv4-mapped address renders as plain dotted-decimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressValue {
    V4(Ipv4Addr),
    Mapped(Ipv4Addr),
    V6(Ipv6Addr),
}

impl AddressValue {
    pub fn from_hex(hex: &str) -> Result<Self, DomainError> {
        let n = parse_hex_u128("address", hex)?;
        Ok(Self::from_u128(n))
    }

    pub fn from_u128(n: u128) -> Self {
        // 0 and 255.255.255.255 are left to the IPv6 branch.
        if let Ok(v4) = u32::try_from(n) {
            if v4 > 0 && v4 < u32::MAX {
                return AddressValue::V4(Ipv4Addr::from(v4));
            }
        }
        if MAPPED_FLOOR < n && n < MAPPED_CEILING {
            return AddressValue::Mapped(Ipv4Addr::from((n & 0xffff_ffff) as u32));
        }
        AddressValue::V6(Ipv6Addr::from(n))
    }
}

impl fmt::Display for AddressValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressValue::V4(ip) | AddressValue::Mapped(ip) => write!(f, "{}", ip),
            AddressValue::V6(ip) => write!(f, "[{}]", ip),
        }
    }
}

/// Converts a hex-encoded address into its readable textual form.
pub fn normalize_address(hex: &str) -> Result<String, DomainError> {
    AddressValue::from_hex(hex).map(|addr| addr.to_string())
}
