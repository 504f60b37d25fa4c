//! dnslog infrastructure: timestamp converters and log sources
pub mod input;
pub mod timestamp;
