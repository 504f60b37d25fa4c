#![allow(dead_code)]

use async_trait::async_trait;
use dnslog_application::ports::TimestampConverter;
use dnslog_domain::DomainError;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const TIMESTAMP: &str = "2024-01-02 03:04:05.123456789";

/// Replaces a leading `@` + 24 hex digit tag with [`TIMESTAMP`].
pub struct FakeTimestampConverter {
    calls: AtomicUsize,
    fail_after: Option<usize>,
}

impl FakeTimestampConverter {
    pub fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_after: None,
        }
    }

    /// Converts `lines` lines, then behaves like a converter whose pipe closed.
    pub fn failing_after(lines: usize) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail_after: Some(lines),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Default for FakeTimestampConverter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TimestampConverter for FakeTimestampConverter {
    async fn convert(&self, raw_line: &str) -> Result<String, DomainError> {
        let calls = self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(limit) = self.fail_after {
            if calls >= limit {
                return Err(DomainError::TimestampConverter(
                    "converter closed its output".to_string(),
                ));
            }
        }

        let tagged = raw_line.len() >= 25
            && raw_line.starts_with('@')
            && raw_line.as_bytes()[1..25].iter().all(|b| b.is_ascii_hexdigit());
        if tagged {
            Ok(format!("{}{}", TIMESTAMP, &raw_line[25..]))
        } else {
            Ok(raw_line.to_string())
        }
    }
}

/// A converted line: the fake timestamp, a space, then `payload`.
pub fn line(payload: &str) -> String {
    format!("{} {}", TIMESTAMP, payload)
}

/// A raw line as tinydns/dnscache write it under multilog.
pub fn raw(payload: &str) -> String {
    format!("@400000006593bd4507606d1c {}", payload)
}
