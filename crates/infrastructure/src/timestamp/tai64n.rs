use chrono::{DateTime, TimeZone, Utc};

/// Length of `@` + 16 hex digits of seconds + 8 hex digits of nanoseconds.
pub const TAG_LEN: usize = 25;

/// TAI64 label of 1970-01-01 00:00:00 UTC, 10 leap seconds included.
pub const UNIX_EPOCH_LABEL: u64 = (1 << 62) + 10;

const NANOS_PER_SEC: u32 = 1_000_000_000;

/// A TAI64N timestamp as written by multilog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tai64n {
    pub label: u64,
    pub nanos: u32,
}

impl Tai64n {
    /// Parses the leading tag of `line`, returning it and the rest of the line.
    pub fn split_tag(line: &str) -> Option<(Self, &str)> {
        let tag = line.get(..TAG_LEN)?;
        let hex = tag.strip_prefix('@')?;
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }

        let label = u64::from_str_radix(&hex[..16], 16).ok()?;
        let nanos = u32::from_str_radix(&hex[16..], 16).ok()?;
        if nanos >= NANOS_PER_SEC {
            return None;
        }

        Some((Self { label, nanos }, &line[TAG_LEN..]))
    }

    pub fn unix_seconds(&self) -> Option<i64> {
        let secs = self.label.checked_sub(UNIX_EPOCH_LABEL)?;
        i64::try_from(secs).ok()
    }

    pub fn to_datetime<Tz: TimeZone>(&self, tz: &Tz) -> Option<DateTime<Tz>> {
        let utc = DateTime::<Utc>::from_timestamp(self.unix_seconds()?, self.nanos)?;
        Some(utc.with_timezone(tz))
    }
}

/// `YYYY-MM-DD HH:MM:SS.nnnnnnnnn`, the format `tai64nlocal` prints.
pub fn format_civil<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%Y-%m-%d %H:%M:%S%.9f").to_string()
}
