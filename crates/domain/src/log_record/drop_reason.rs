use std::fmt;

/// Why tinydns refused to answer a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DropReason {
    NoAuthority,
    InvalidQuery,
    InvalidClass,
}

impl DropReason {
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            '-' => Some(DropReason::NoAuthority),
            'I' => Some(DropReason::InvalidQuery),
            'C' => Some(DropReason::InvalidClass),
            _ => None,
        }
    }

    pub fn code(&self) -> char {
        match self {
            DropReason::NoAuthority => '-',
            DropReason::InvalidQuery => 'I',
            DropReason::InvalidClass => 'C',
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DropReason::NoAuthority => "no authority",
            DropReason::InvalidQuery => "invalid query",
            DropReason::InvalidClass => "invalid class",
        }
    }
}

impl fmt::Display for DropReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
