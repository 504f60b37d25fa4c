pub mod source;

pub use source::LogSource;
