pub mod identity;
pub mod native;
pub mod process;
pub mod tai64n;

pub use identity::IdentityTimestampConverter;
pub use native::NativeTai64nConverter;
pub use process::ProcessTimestampConverter;
pub use tai64n::Tai64n;
