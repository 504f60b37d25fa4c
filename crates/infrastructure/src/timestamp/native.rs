use async_trait::async_trait;
use chrono::{Local, Utc};
use dnslog_application::ports::TimestampConverter;
use dnslog_domain::DomainError;
use tracing::trace;

use super::tai64n::{format_civil, Tai64n};

/// Converts TAI64N tags in process, the way `tai64nlocal` does.
///
/// Lines without a valid leading tag are returned unchanged.
pub struct NativeTai64nConverter {
    utc: bool,
}

impl NativeTai64nConverter {
    pub fn new(utc: bool) -> Self {
        Self { utc }
    }

    pub fn local() -> Self {
        Self::new(false)
    }

    pub fn utc() -> Self {
        Self::new(true)
    }

    pub fn convert_line(&self, raw_line: &str) -> String {
        let Some((stamp, rest)) = Tai64n::split_tag(raw_line) else {
            return raw_line.to_string();
        };

        let civil = if self.utc {
            stamp.to_datetime(&Utc).map(|dt| format_civil(&dt))
        } else {
            stamp.to_datetime(&Local).map(|dt| format_civil(&dt))
        };

        match civil {
            Some(civil) => format!("{}{}", civil, rest),
            None => {
                trace!(label = stamp.label, "TAI64N label outside the calendar");
                raw_line.to_string()
            }
        }
    }
}

impl Default for NativeTai64nConverter {
    fn default() -> Self {
        Self::local()
    }
}

#[async_trait]
impl TimestampConverter for NativeTai64nConverter {
    async fn convert(&self, raw_line: &str) -> Result<String, DomainError> {
        Ok(self.convert_line(raw_line))
    }
}
