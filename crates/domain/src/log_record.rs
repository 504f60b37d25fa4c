pub mod drop_reason;
pub mod event;
pub mod fixed;

pub use drop_reason::DropReason;
pub use event::{EventKind, EventRecord};
pub use fixed::FixedRecord;
