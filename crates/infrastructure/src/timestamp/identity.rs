use async_trait::async_trait;
use dnslog_application::ports::TimestampConverter;
use dnslog_domain::DomainError;

/// For input whose timestamps were converted upstream.
#[derive(Debug, Default)]
pub struct IdentityTimestampConverter;

#[async_trait]
impl TimestampConverter for IdentityTimestampConverter {
    async fn convert(&self, raw_line: &str) -> Result<String, DomainError> {
        Ok(raw_line.to_string())
    }
}
