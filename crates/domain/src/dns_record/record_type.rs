use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Record types that appear in tinydns and dnscache logs.
///
/// The mnemonic is lowercase because that is how both servers spell the
/// types they print by name (`cname`, `ns`, `nxdomain`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordType {
    A,
    NS,
    CNAME,
    SOA,
    PTR,
    HINFO,
    MX,
    TXT,
    RP,
    SIG,
    KEY,
    AAAA,
    A6,
    AXFR,
    ANY,
}

impl RecordType {
    pub const ALL: [RecordType; 15] = [
        RecordType::A,
        RecordType::NS,
        RecordType::CNAME,
        RecordType::SOA,
        RecordType::PTR,
        RecordType::HINFO,
        RecordType::MX,
        RecordType::TXT,
        RecordType::RP,
        RecordType::SIG,
        RecordType::KEY,
        RecordType::AAAA,
        RecordType::A6,
        RecordType::AXFR,
        RecordType::ANY,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "a",
            RecordType::NS => "ns",
            RecordType::CNAME => "cname",
            RecordType::SOA => "soa",
            RecordType::PTR => "ptr",
            RecordType::HINFO => "hinfo",
            RecordType::MX => "mx",
            RecordType::TXT => "txt",
            RecordType::RP => "rp",
            RecordType::SIG => "sig",
            RecordType::KEY => "key",
            RecordType::AAAA => "aaaa",
            RecordType::A6 => "a6",
            RecordType::AXFR => "axfr",
            RecordType::ANY => "any",
        }
    }

    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::SOA => 6,
            RecordType::PTR => 12,
            RecordType::HINFO => 13,
            RecordType::MX => 15,
            RecordType::TXT => 16,
            RecordType::RP => 17,
            RecordType::SIG => 24,
            RecordType::KEY => 25,
            RecordType::AAAA => 28,
            RecordType::A6 => 38,
            RecordType::AXFR => 252,
            RecordType::ANY => 255,
        }
    }

    pub fn from_u16(code: u16) -> Option<Self> {
        match code {
            1 => Some(RecordType::A),
            2 => Some(RecordType::NS),
            5 => Some(RecordType::CNAME),
            6 => Some(RecordType::SOA),
            12 => Some(RecordType::PTR),
            13 => Some(RecordType::HINFO),
            15 => Some(RecordType::MX),
            16 => Some(RecordType::TXT),
            17 => Some(RecordType::RP),
            24 => Some(RecordType::SIG),
            25 => Some(RecordType::KEY),
            28 => Some(RecordType::AAAA),
            38 => Some(RecordType::A6),
            252 => Some(RecordType::AXFR),
            255 => Some(RecordType::ANY),
            _ => None,
        }
    }
}

/// Renders a numeric type code: the mnemonic when known, the decimal code otherwise.
pub fn type_name(code: u16) -> Cow<'static, str> {
    match RecordType::from_u16(code) {
        Some(rtype) => Cow::Borrowed(rtype.as_str()),
        None => Cow::Owned(code.to_string()),
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecordType::ALL
            .iter()
            .copied()
            .find(|rtype| rtype.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("Unknown record type: {}", s))
    }
}
