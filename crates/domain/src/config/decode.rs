use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DecodeConfig {
    /// Abort on the first line that fails to decode instead of echoing it.
    #[serde(default)]
    pub strict: bool,
}

/// What to do with a line whose fields do not decode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Echo the line as received and keep going.
    #[default]
    Lenient,
    /// Stop the run with the decoding error.
    Strict,
}

impl DecodeConfig {
    pub fn policy(&self) -> DecodePolicy {
        if self.strict {
            DecodePolicy::Strict
        } else {
            DecodePolicy::Lenient
        }
    }
}
