use dnslog_domain::numeric::{parse_decimal_u16, parse_decimal_u64, parse_hex_u16};
use dnslog_domain::{normalize_address, type_name, DomainError};
use std::fmt::Write;

const ELLIPSIS: &str = "...";

/// A rewrite of one positional word of an event record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldTransform {
    /// Hex address to dotted-decimal or bracketed IPv6.
    Address,
    /// Decimal TTL to `TTL=n`.
    Ttl,
    /// Decimal serial to `#n`.
    Serial,
    /// Decimal type code to its mnemonic.
    TypeName,
    /// `addr:port[:id]` in hex to `addr:port[ (id n)]`.
    Client,
    /// Decimal value to `label=n`.
    Tag(&'static str),
    /// Length-prefixed hex text to `len:"text"`.
    UnpackedText,
}

impl FieldTransform {
    pub fn apply(&self, word: &str) -> Result<String, DomainError> {
        match self {
            FieldTransform::Address => normalize_address(word),
            FieldTransform::Ttl => Ok(format!("TTL={}", parse_decimal_u64("ttl", word)?)),
            FieldTransform::Serial => Ok(format!("#{}", parse_decimal_u64("serial", word)?)),
            FieldTransform::TypeName => Ok(type_name(parse_decimal_u16("type", word)?).into_owned()),
            FieldTransform::Client => decode_client(word),
            FieldTransform::Tag(label) => Ok(format!("{}={}", label, parse_decimal_u64(*label, word)?)),
            FieldTransform::UnpackedText => unpack_text(word),
        }
    }
}

fn decode_client(word: &str) -> Result<String, DomainError> {
    let parts: Vec<&str> = word.split(':').collect();
    match parts.as_slice() {
        [addr, port] => Ok(format!(
            "{}:{}",
            normalize_address(addr)?,
            parse_hex_u16("port", port)?
        )),
        [addr, port, id] => Ok(format!(
            "{}:{} (id {})",
            normalize_address(addr)?,
            parse_hex_u16("port", port)?,
            parse_hex_u16("request id", id)?
        )),
        _ => Ok(word.to_string()),
    }
}

/// Unpacks a TXT record logged as hex: one length byte, then one byte per
/// character, optionally followed by `...` when dnscache truncated it.
///
/// An odd trailing hex digit is dropped. Control characters are written as
/// `\xNN` so the result stays on one line.
fn unpack_text(word: &str) -> Result<String, DomainError> {
    let (hex, ellipsis) = match word.strip_suffix(ELLIPSIS) {
        Some(hex) => (hex, ELLIPSIS),
        None => (word, ""),
    };

    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(DomainError::invalid_hex("text", word));
    }
    if hex.len() < 2 {
        return Err(DomainError::InvalidPackedText(format!(
            "no length byte in {:?}",
            word
        )));
    }

    let length = hex_byte(&hex.as_bytes()[..2]);
    let mut text = String::with_capacity(hex.len() / 2);
    for pair in hex.as_bytes()[2..].chunks_exact(2) {
        let c = char::from(hex_byte(pair));
        if c.is_control() {
            let _ = write!(text, "\\x{:02x}", u32::from(c));
        } else {
            text.push(c);
        }
    }

    Ok(format!("{}:\"{}{}\"", length, text, ellipsis))
}

/// Two ASCII hex digits, already validated, to a byte.
fn hex_byte(pair: &[u8]) -> u8 {
    let nibble = |b: u8| match b {
        b'0'..=b'9' => b - b'0',
        b'a'..=b'f' => b - b'a' + 10,
        b'A'..=b'F' => b - b'A' + 10,
        _ => 0,
    };
    (nibble(pair[0]) << 4) | nibble(pair[1])
}
