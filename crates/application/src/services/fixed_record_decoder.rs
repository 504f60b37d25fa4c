use dnslog_domain::numeric::parse_hex_u16;
use dnslog_domain::{normalize_address, type_name, DomainError, DropReason, FixedRecord};

/// Renders tinydns query lines as sentences.
pub struct FixedRecordDecoder;

impl FixedRecordDecoder {
    pub fn decode(record: &FixedRecord<'_>) -> Result<String, DomainError> {
        let addr = normalize_address(record.address_hex)?;
        let port = parse_hex_u16("port", record.port_hex)?;
        let id = parse_hex_u16("request id", record.request_id_hex)?;
        let rtype = type_name(parse_hex_u16("type", record.type_hex)?);
        let name = record.name;

        let body = match record.outcome_code {
            '+' => format!("sent response to {addr}:{port} (id {id}): {rtype} {name}"),
            code @ ('-' | 'I' | 'C') => {
                let reason =
                    DropReason::from_code(code).ok_or(DomainError::UnmappedDropCode(code))?;
                format!("dropped query ({reason}) from {addr}:{port} (id {id}): {rtype} {name}")
            }
            '/' => format!("dropped query (couldn't parse) from {addr}:{port}"),
            code => format!("{code} from {addr}:{port} (id {id}): {rtype} {name}"),
        };

        Ok(format!("{} {}", record.timestamp, body))
    }
}
