use dnslog_domain::DomainError;
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs::File;
use tokio::io::{AsyncBufRead, BufReader};
use tracing::debug;

pub type LogReader = Box<dyn AsyncBufRead + Unpin + Send>;

/// Where raw log lines come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSource {
    Stdin,
    File(PathBuf),
}

impl LogSource {
    /// One source per argument, in order; `-` is stdin, no arguments means stdin.
    pub fn from_args(paths: &[PathBuf]) -> Vec<LogSource> {
        if paths.is_empty() {
            return vec![LogSource::Stdin];
        }

        paths
            .iter()
            .map(|path| {
                if path.as_os_str() == "-" {
                    LogSource::Stdin
                } else {
                    LogSource::File(path.clone())
                }
            })
            .collect()
    }

    pub async fn open(&self) -> Result<LogReader, DomainError> {
        match self {
            LogSource::Stdin => Ok(Box::new(BufReader::new(tokio::io::stdin()))),
            LogSource::File(path) => {
                let file = File::open(path).await.map_err(|e| {
                    DomainError::IoError(format!("Failed to open {}: {}", path.display(), e))
                })?;
                debug!(path = %path.display(), "Opened log file");
                Ok(Box::new(BufReader::new(file)))
            }
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            LogSource::Stdin => None,
            LogSource::File(path) => Some(path),
        }
    }
}

impl fmt::Display for LogSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogSource::Stdin => f.write_str("<stdin>"),
            LogSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}
