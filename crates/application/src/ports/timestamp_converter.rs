use async_trait::async_trait;
use dnslog_domain::DomainError;

/// Replaces the leading TAI64N tag of a raw log line with local civil time.
///
/// Calls are strictly one line in, one line out, in order. An error is fatal
/// to the run, not to the line.
#[async_trait]
pub trait TimestampConverter: Send + Sync {
    async fn convert(&self, raw_line: &str) -> Result<String, DomainError>;

    async fn shutdown(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
