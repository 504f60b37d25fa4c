//! dnslog application layer: line classification, field decoding and the decode use case
pub mod ports;
pub mod services;
pub mod use_cases;
