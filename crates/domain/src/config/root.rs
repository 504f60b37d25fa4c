use serde::{Deserialize, Serialize};

use super::decode::DecodeConfig;
use super::errors::ConfigError;
use super::logging::{LoggingConfig, LOG_LEVELS};
use super::timestamp::{TimestampConfig, TimestampMode};

const LOCAL_CONFIG: &str = "dnslog.toml";
const SYSTEM_CONFIG: &str = "/etc/dnslog/config.toml";

/// Main configuration structure for dnslog
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Field decoding behaviour
    #[serde(default)]
    pub decode: DecodeConfig,

    /// Timestamp conversion
    #[serde(default)]
    pub timestamp: TimestampConfig,

    /// Diagnostics on stderr
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnslog.toml in current directory
    /// 3. /etc/dnslog/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let path = path.map(str::to_string).or_else(Self::get_config_path);
        let mut config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    /// Load configuration from a specific file
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if overrides.strict {
            self.decode.strict = true;
        }
        if let Some(mode) = overrides.timestamp_mode {
            self.timestamp.mode = mode;
        }
        if let Some(program) = overrides.timestamp_program {
            self.timestamp.program = program;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timestamp.mode == TimestampMode::External && self.timestamp.program.trim().is_empty()
        {
            return Err(ConfigError::Validation(
                "External timestamp mode needs a program".to_string(),
            ));
        }

        let level = self.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unknown log level '{}'",
                self.logging.level
            )));
        }

        Ok(())
    }

    /// The configuration as TOML, in the shape `from_file` reads back
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::Parse(format!("Failed to serialize config: {}", e)))
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        if std::path::Path::new(LOCAL_CONFIG).exists() {
            Some(LOCAL_CONFIG.to_string())
        } else if std::path::Path::new(SYSTEM_CONFIG).exists() {
            Some(SYSTEM_CONFIG.to_string())
        } else {
            None
        }
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub strict: bool,
    pub timestamp_mode: Option<TimestampMode>,
    pub timestamp_program: Option<String>,
    pub log_level: Option<String>,
}
