pub mod decode_log;

pub use decode_log::{DecodeLogUseCase, DecodeStats};
