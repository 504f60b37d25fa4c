use dnslog_application::ports::TimestampConverter;
use dnslog_domain::{config::TimestampConfig, TimestampMode};
use dnslog_infrastructure::timestamp::{
    IdentityTimestampConverter, NativeTai64nConverter, ProcessTimestampConverter,
};
use std::sync::Arc;
use tracing::info;

pub fn build_converter(cfg: &TimestampConfig) -> anyhow::Result<Arc<dyn TimestampConverter>> {
    let converter: Arc<dyn TimestampConverter> = match cfg.mode {
        TimestampMode::External => {
            Arc::new(ProcessTimestampConverter::spawn(&cfg.program, &cfg.args)?)
        }
        TimestampMode::Native => Arc::new(NativeTai64nConverter::new(cfg.utc)),
        TimestampMode::None => Arc::new(IdentityTimestampConverter),
    };

    info!(mode = %cfg.mode, "Timestamp converter ready");
    Ok(converter)
}
