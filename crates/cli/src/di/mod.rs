mod converter;

pub use converter::build_converter;
