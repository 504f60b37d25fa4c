//! dnslog domain layer: record model, code tables and address rendering
pub mod address;
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod log_record;
pub mod numeric;

pub use address::{normalize_address, AddressValue};
pub use config::{CliOverrides, Config, ConfigError, DecodePolicy, LogFormat, TimestampMode};
pub use dns_record::{type_name, RecordType};
pub use errors::DomainError;
pub use log_record::{DropReason, EventKind, EventRecord, FixedRecord};
