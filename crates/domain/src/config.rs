pub mod decode;
pub mod errors;
pub mod logging;
pub mod root;
pub mod timestamp;

pub use decode::{DecodeConfig, DecodePolicy};
pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use timestamp::{TimestampConfig, TimestampMode};
