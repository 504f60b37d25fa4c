mod timestamp_converter;

pub use timestamp_converter::TimestampConverter;
