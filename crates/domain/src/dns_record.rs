pub mod record_type;

pub use record_type::{type_name, RecordType};
