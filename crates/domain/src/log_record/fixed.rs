/// A tinydns query line: `addr:port:id code type name`.
///
/// Every field borrows from the line it was captured from; hex fields are
/// kept raw until decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedRecord<'a> {
    pub timestamp: &'a str,
    pub address_hex: &'a str,
    pub port_hex: &'a str,
    pub request_id_hex: &'a str,
    pub outcome_code: char,
    pub type_hex: &'a str,
    pub name: &'a str,
}
