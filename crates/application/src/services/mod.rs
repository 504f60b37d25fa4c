pub mod event_record_decoder;
pub mod field_transform;
pub mod fixed_record_decoder;
pub mod line_classifier;
pub mod line_decoder;

pub use event_record_decoder::EventRecordDecoder;
pub use field_transform::FieldTransform;
pub use fixed_record_decoder::FixedRecordDecoder;
pub use line_classifier::{ClassifiedLine, LineClassifier};
pub use line_decoder::{DecodedLine, LineDecoder};
