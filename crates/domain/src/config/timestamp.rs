use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimestampConfig {
    #[serde(default)]
    pub mode: TimestampMode,

    /// Converter spawned in `external` mode.
    #[serde(default = "default_program")]
    pub program: String,

    #[serde(default)]
    pub args: Vec<String>,

    /// Render native conversions in UTC instead of local time.
    #[serde(default)]
    pub utc: bool,
}

/// How the leading TAI64N tag of each line becomes local time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampMode {
    /// Pipe every line through an external `tai64nlocal`.
    #[default]
    External,
    /// Convert the tag in process.
    Native,
    /// Lines are already converted.
    None,
}

impl TimestampMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimestampMode::External => "external",
            TimestampMode::Native => "native",
            TimestampMode::None => "none",
        }
    }
}

impl fmt::Display for TimestampMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimestampMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "external" => Ok(TimestampMode::External),
            "native" => Ok(TimestampMode::Native),
            "none" => Ok(TimestampMode::None),
            _ => Err(format!("Unknown timestamp mode: {}", s)),
        }
    }
}

impl Default for TimestampConfig {
    fn default() -> Self {
        Self {
            mode: TimestampMode::default(),
            program: default_program(),
            args: Vec::new(),
            utc: false,
        }
    }
}

fn default_program() -> String {
    "tai64nlocal".to_string()
}
