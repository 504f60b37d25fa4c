use dnslog_domain::{DomainError, EventKind, EventRecord};
use std::borrow::Cow;

use super::field_transform::FieldTransform;

/// `cached` lines already name these instead of giving a code.
const CACHED_NAMED: [&str; 3] = ["cname", "ns", "nxdomain"];

/// `rr` lines already name these instead of giving a code.
const RR_NAMED: [&str; 5] = ["cname", "mx", "ns", "ptr", "soa"];

/// Recipes whose steps do not depend on the words themselves.
fn fixed_recipe(kind: EventKind) -> &'static [(usize, FieldTransform)] {
    use FieldTransform::*;
    match kind {
        EventKind::Drop | EventKind::Sent => &[(0, Serial)],
        EventKind::Lame => &[(0, Address)],
        EventKind::Nodata => &[(0, Address), (1, Ttl), (2, TypeName)],
        EventKind::Nxdomain => &[(0, Address), (1, Ttl)],
        EventKind::Query => &[(0, Serial), (1, Client), (2, TypeName)],
        EventKind::Rr => &[(0, Address), (1, Ttl)],
        EventKind::Stats => &[
            (0, Tag("count")),
            (1, Tag("motion")),
            (2, Tag("udp-active")),
            (3, Tag("tcp-active")),
        ],
        EventKind::Tx => &[(0, Tag("g")), (1, TypeName)],
        EventKind::TcpOpen | EventKind::TcpClose => &[(0, Client)],
        EventKind::Cached => &[],
    }
}

/// The rewritten words of one event record.
///
/// Built from the record's words and rewritten by position; the record
/// itself is never touched.
struct Fields<'a> {
    words: Vec<Cow<'a, str>>,
}

impl<'a> Fields<'a> {
    fn new(words: &[&'a str]) -> Self {
        Self {
            words: words.iter().map(|w| Cow::Borrowed(*w)).collect(),
        }
    }

    fn get(&self, index: usize) -> Option<&str> {
        self.words.get(index).map(|w| w.as_ref())
    }

    fn apply(&mut self, index: usize, transform: FieldTransform) -> Result<(), DomainError> {
        let word = self
            .words
            .get(index)
            .ok_or(DomainError::MissingField { index })?;
        let rewritten = transform.apply(word)?;
        self.words[index] = Cow::Owned(rewritten);
        Ok(())
    }

    fn join(&self) -> String {
        self.words.join(" ")
    }
}

/// Rewrites dnscache event lines word by word.
pub struct EventRecordDecoder;

impl EventRecordDecoder {
    /// Returns `None` for events without a recipe.
    pub fn decode(record: &EventRecord<'_>) -> Result<Option<String>, DomainError> {
        let Some(kind) = record.kind() else {
            return Ok(None);
        };

        let mut fields = Fields::new(&record.words);
        for &(index, transform) in fixed_recipe(kind) {
            fields.apply(index, transform)?;
        }

        match kind {
            EventKind::Cached => {
                let word = fields.get(0).ok_or(DomainError::MissingField { index: 0 })?;
                if !CACHED_NAMED.iter().any(|named| *named == word) {
                    fields.apply(0, FieldTransform::TypeName)?;
                }
            }
            EventKind::Rr => {
                let word = fields.get(2).ok_or(DomainError::MissingField { index: 2 })?;
                if !RR_NAMED.iter().any(|named| *named == word) {
                    fields.apply(2, FieldTransform::TypeName)?;
                    let data = match fields.get(2) {
                        Some("a") => Some(FieldTransform::Address),
                        Some("txt") => Some(FieldTransform::UnpackedText),
                        _ => None,
                    };
                    if let Some(transform) = data {
                        fields.apply(4, transform)?;
                    }
                }
            }
            EventKind::Stats if fields.words.len() >= 6 => {
                fields.apply(4, FieldTransform::Tag("hit"))?;
                fields.apply(5, FieldTransform::Tag("miss"))?;
            }
            EventKind::Tx => {
                for index in 4..fields.words.len() {
                    fields.apply(index, FieldTransform::Address)?;
                }
            }
            _ => {}
        }

        Ok(Some(format!(
            "{} {} {}",
            record.timestamp,
            record.event_name,
            fields.join()
        )))
    }
}
