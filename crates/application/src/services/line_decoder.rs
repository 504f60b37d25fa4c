use dnslog_domain::DomainError;

use super::event_record_decoder::EventRecordDecoder;
use super::fixed_record_decoder::FixedRecordDecoder;
use super::line_classifier::{ClassifiedLine, LineClassifier};

/// Result of decoding one timestamp-converted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedLine {
    /// A tinydns query line, rendered as a sentence.
    Fixed(String),
    /// A dnscache event with a recipe, rewritten word by word.
    Event(String),
    /// A dnscache event without a recipe; echo the line as is.
    UnknownEvent,
    /// Neither grammar matched; echo the line as is.
    PassThrough,
}

/// Classifies a line and runs the matching decoder. Pure; no I/O.
pub struct LineDecoder {
    classifier: LineClassifier,
}

impl LineDecoder {
    pub fn new() -> Result<Self, DomainError> {
        Ok(Self {
            classifier: LineClassifier::new()?,
        })
    }

    pub fn decode(&self, line: &str) -> Result<DecodedLine, DomainError> {
        match self.classifier.classify(line) {
            ClassifiedLine::Fixed(record) => FixedRecordDecoder::decode(&record).map(DecodedLine::Fixed),
            ClassifiedLine::Event(record) => Ok(match EventRecordDecoder::decode(&record)? {
                Some(decoded) => DecodedLine::Event(decoded),
                None => DecodedLine::UnknownEvent,
            }),
            ClassifiedLine::Unmatched => Ok(DecodedLine::PassThrough),
        }
    }

    /// The text to emit for `line`: decoded when possible, the line itself otherwise.
    pub fn render(&self, line: &str) -> Result<String, DomainError> {
        Ok(match self.decode(line)? {
            DecodedLine::Fixed(decoded) | DecodedLine::Event(decoded) => decoded,
            DecodedLine::UnknownEvent | DecodedLine::PassThrough => line.to_string(),
        })
    }
}
