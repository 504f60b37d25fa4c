use async_trait::async_trait;
use dnslog_application::ports::TimestampConverter;
use dnslog_domain::DomainError;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tokio::sync::Mutex;
use tracing::{debug, error, info};

struct Pipe {
    child: Child,
    stdin: Option<ChildStdin>,
    stdout: BufReader<ChildStdout>,
}

/// Runs an external converter (normally `tai64nlocal`) and talks to it one
/// line at a time: each call writes a line and waits for its answer.
pub struct ProcessTimestampConverter {
    program: String,
    pipe: Mutex<Pipe>,
}

impl ProcessTimestampConverter {
    /// Spawns `program`. Must be called from within a tokio runtime.
    pub fn spawn(program: &str, args: &[String]) -> Result<Self, DomainError> {
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| {
                DomainError::TimestampConverter(format!("failed to start {}: {}", program, e))
            })?;

        let stdin = child.stdin.take().ok_or_else(|| {
            DomainError::TimestampConverter(format!("{} has no stdin", program))
        })?;
        let stdout = child.stdout.take().ok_or_else(|| {
            DomainError::TimestampConverter(format!("{} has no stdout", program))
        })?;

        info!(program, pid = child.id(), "Timestamp converter started");

        Ok(Self {
            program: program.to_string(),
            pipe: Mutex::new(Pipe {
                child,
                stdin: Some(stdin),
                stdout: BufReader::new(stdout),
            }),
        })
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    fn failure(&self, what: &str, detail: impl std::fmt::Display) -> DomainError {
        error!(program = %self.program, error = %detail, "{}", what);
        DomainError::TimestampConverter(format!("{} ({}): {}", what, self.program, detail))
    }
}

#[async_trait]
impl TimestampConverter for ProcessTimestampConverter {
    async fn convert(&self, raw_line: &str) -> Result<String, DomainError> {
        let mut pipe = self.pipe.lock().await;

        let stdin = pipe
            .stdin
            .as_mut()
            .ok_or_else(|| self.failure("Converter already shut down", "stdin closed"))?;
        stdin
            .write_all(raw_line.as_bytes())
            .await
            .map_err(|e| self.failure("Failed to write to converter", e))?;
        stdin
            .write_all(b"\n")
            .await
            .map_err(|e| self.failure("Failed to write to converter", e))?;
        stdin
            .flush()
            .await
            .map_err(|e| self.failure("Failed to write to converter", e))?;

        let mut converted = String::new();
        let read = pipe
            .stdout
            .read_line(&mut converted)
            .await
            .map_err(|e| self.failure("Failed to read from converter", e))?;
        if read == 0 {
            return Err(self.failure("Converter closed its output", "end of stream"));
        }

        let len = converted.trim_end_matches(['\n', '\r']).len();
        converted.truncate(len);
        Ok(converted)
    }

    async fn shutdown(&self) -> Result<(), DomainError> {
        let mut pipe = self.pipe.lock().await;
        // closing stdin lets the converter see end of input
        drop(pipe.stdin.take());

        let status = pipe
            .child
            .wait()
            .await
            .map_err(|e| self.failure("Failed to wait for converter", e))?;
        debug!(program = %self.program, %status, "Timestamp converter exited");
        Ok(())
    }
}
