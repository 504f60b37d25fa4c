use dnslog_domain::{DomainError, EventRecord, FixedRecord};
use fancy_regex::{Captures, Regex};
use tracing::trace;

/// Local time as rendered by `tai64nlocal` (`2024-01-02 03:04:05.123456789`)
/// or with a slash-separated date.
const TIMESTAMP: &str = r"[0-9/\-]+ [0-9:\.]+";

/// Which grammar a line follows, with its fields borrowed from the line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassifiedLine<'a> {
    Fixed(FixedRecord<'a>),
    Event(EventRecord<'a>),
    Unmatched,
}

pub struct LineClassifier {
    fixed: Regex,
    event: Regex,
}

impl LineClassifier {
    pub fn new() -> Result<Self, DomainError> {
        let fixed = Regex::new(&format!(
            r"^({TIMESTAMP}) ([0-9a-f]{{8,32}}):([0-9a-f]{{4}}):([0-9a-f]{{4}}) ([\+\-IC/]) ([0-9a-f]{{4}}) (.*)$"
        ))
        .map_err(|e| DomainError::Pattern(e.to_string()))?;

        let event = Regex::new(&format!(r"^({TIMESTAMP}) (\w+)(.*)$"))
            .map_err(|e| DomainError::Pattern(e.to_string()))?;

        Ok(Self { fixed, event })
    }

    /// Tries the tinydns grammar first, then the dnscache one.
    pub fn classify<'a>(&self, line: &'a str) -> ClassifiedLine<'a> {
        if let Some(record) = self.match_fixed(line) {
            trace!(line, "Matched fixed record");
            return ClassifiedLine::Fixed(record);
        }

        if let Some(record) = self.match_event(line) {
            trace!(line, event = record.event_name, "Matched event record");
            return ClassifiedLine::Event(record);
        }

        ClassifiedLine::Unmatched
    }

    fn match_fixed<'a>(&self, line: &'a str) -> Option<FixedRecord<'a>> {
        let caps = self.fixed.captures(line).ok().flatten()?;
        let outcome_code = group(&caps, 5)?.chars().next()?;

        Some(FixedRecord {
            timestamp: group(&caps, 1)?,
            address_hex: group(&caps, 2)?,
            port_hex: group(&caps, 3)?,
            request_id_hex: group(&caps, 4)?,
            outcome_code,
            type_hex: group(&caps, 6)?,
            name: group(&caps, 7)?,
        })
    }

    fn match_event<'a>(&self, line: &'a str) -> Option<EventRecord<'a>> {
        let caps = self.event.captures(line).ok().flatten()?;

        Some(EventRecord::new(
            group(&caps, 1)?,
            group(&caps, 2)?,
            group(&caps, 3)?,
        ))
    }
}

fn group<'a>(caps: &Captures<'a>, index: usize) -> Option<&'a str> {
    caps.get(index).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TS: &str = "2024-01-02 03:04:05.123456789";

    #[test]
    fn test_fixed_record_fields() {
        let classifier = LineClassifier::new().unwrap();
        let line = format!("{TS} 7f000001:9d61:be69 - 0001 www.example.com");

        match classifier.classify(&line) {
            ClassifiedLine::Fixed(record) => {
                assert_eq!(record.timestamp, TS);
                assert_eq!(record.address_hex, "7f000001");
                assert_eq!(record.port_hex, "9d61");
                assert_eq!(record.request_id_hex, "be69");
                assert_eq!(record.outcome_code, '-');
                assert_eq!(record.type_hex, "0001");
                assert_eq!(record.name, "www.example.com");
            }
            other => panic!("expected fixed record, got {:?}", other),
        }
    }

    #[test]
    fn test_slash_dated_lines_classify() {
        let classifier = LineClassifier::new().unwrap();
        let ts = "2024/01/02 03:04:05.123";

        match classifier.classify(&format!("{ts} 7f000001:9d61:be69 + 0001 www.example.com")) {
            ClassifiedLine::Fixed(record) => assert_eq!(record.timestamp, ts),
            other => panic!("expected fixed record, got {:?}", other),
        }
        match classifier.classify(&format!("{ts} drop 662478551 timed out")) {
            ClassifiedLine::Event(record) => {
                assert_eq!(record.timestamp, ts);
                assert_eq!(record.event_name, "drop");
            }
            other => panic!("expected event record, got {:?}", other),
        }
    }

    #[test]
    fn test_fixed_name_keeps_spaces() {
        let classifier = LineClassifier::new().unwrap();
        let line = format!("{TS} 7f000001:9d61:be69 + 0010 odd name.example");

        match classifier.classify(&line) {
            ClassifiedLine::Fixed(record) => assert_eq!(record.name, "odd name.example"),
            other => panic!("expected fixed record, got {:?}", other),
        }
    }

    #[test]
    fn test_short_address_is_not_fixed() {
        let classifier = LineClassifier::new().unwrap();
        let line = format!("{TS} 7f0001:9d61:be69 + 0001 www.example.com");

        assert!(!matches!(classifier.classify(&line), ClassifiedLine::Fixed(_)));
    }

    #[test]
    fn test_unknown_code_is_not_fixed() {
        let classifier = LineClassifier::new().unwrap();
        let line = format!("{TS} 7f000001:9d61:be69 X 0001 www.example.com");

        assert!(!matches!(classifier.classify(&line), ClassifiedLine::Fixed(_)));
    }

    #[test]
    fn test_event_record() {
        let classifier = LineClassifier::new().unwrap();
        let line = format!("{TS} drop 662478551 timed out");

        match classifier.classify(&line) {
            ClassifiedLine::Event(record) => {
                assert_eq!(record.timestamp, TS);
                assert_eq!(record.event_name, "drop");
                assert_eq!(record.words, vec!["662478551", "timed", "out"]);
            }
            other => panic!("expected event record, got {:?}", other),
        }
    }

    #[test]
    fn test_raw_tai64n_line_is_unmatched() {
        let classifier = LineClassifier::new().unwrap();

        assert_eq!(
            classifier.classify("@400000003b4a39c23294b13c starting"),
            ClassifiedLine::Unmatched
        );
        assert_eq!(classifier.classify(""), ClassifiedLine::Unmatched);
        assert_eq!(classifier.classify(TS), ClassifiedLine::Unmatched);
    }
}
