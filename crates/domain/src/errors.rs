use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid hex in {field}: {value:?}")]
    InvalidHex { field: &'static str, value: String },

    #[error("Invalid number in {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Missing field at word {index}")]
    MissingField { index: usize },

    #[error("Drop code {0:?} has no reason (decoder bug)")]
    UnmappedDropCode(char),

    #[error("Invalid packed text: {0}")]
    InvalidPackedText(String),

    #[error("Invalid line pattern: {0}")]
    Pattern(String),

    #[error("Timestamp converter failed: {0}")]
    TimestampConverter(String),

    #[error("I/O error: {0}")]
    IoError(String),
}

impl DomainError {
    pub fn invalid_hex(field: &'static str, value: &str) -> Self {
        DomainError::InvalidHex {
            field,
            value: value.to_string(),
        }
    }

    pub fn invalid_number(field: &'static str, value: &str) -> Self {
        DomainError::InvalidNumber {
            field,
            value: value.to_string(),
        }
    }

    /// Whether the error is about the content of a single line rather than the run.
    pub fn is_line_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidHex { .. }
                | DomainError::InvalidNumber { .. }
                | DomainError::MissingField { .. }
                | DomainError::InvalidPackedText(_)
        )
    }
}
