use crate::ports::TimestampConverter;
use crate::services::{DecodedLine, LineDecoder};
use dnslog_domain::{DecodePolicy, DomainError};
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, instrument, warn};

/// Per-run line counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
    pub lines: u64,
    pub fixed: u64,
    pub events: u64,
    pub unknown_events: u64,
    pub passed_through: u64,
    pub failed: u64,
}

impl DecodeStats {
    pub fn merge(&mut self, other: DecodeStats) {
        self.lines += other.lines;
        self.fixed += other.fixed;
        self.events += other.events;
        self.unknown_events += other.unknown_events;
        self.passed_through += other.passed_through;
        self.failed += other.failed;
    }
}

pub struct DecodeLogUseCase {
    converter: Arc<dyn TimestampConverter>,
    decoder: Arc<LineDecoder>,
    policy: DecodePolicy,
}

impl DecodeLogUseCase {
    pub fn new(
        converter: Arc<dyn TimestampConverter>,
        decoder: Arc<LineDecoder>,
        policy: DecodePolicy,
    ) -> Self {
        Self {
            converter,
            decoder,
            policy,
        }
    }

    /// Decodes every line of `reader` into `writer`, one output line per input line.
    ///
    /// `writer` is flushed even when the run stops early, so every line
    /// decoded before the failure reaches the sink.
    #[instrument(skip_all, fields(policy = ?self.policy))]
    pub async fn execute<R, W>(&self, mut reader: R, writer: &mut W) -> Result<DecodeStats, DomainError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut stats = DecodeStats::default();
        let decoded = self.decode_lines(&mut reader, writer, &mut stats).await;
        let flushed = writer
            .flush()
            .await
            .map_err(|e| DomainError::IoError(e.to_string()));

        debug!(
            lines = stats.lines,
            fixed = stats.fixed,
            events = stats.events,
            failed = stats.failed,
            "Input decoded"
        );
        decoded?;
        flushed?;
        Ok(stats)
    }

    async fn decode_lines<R, W>(
        &self,
        reader: &mut R,
        writer: &mut W,
        stats: &mut DecodeStats,
    ) -> Result<(), DomainError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();

        loop {
            buf.clear();
            let read = reader
                .read_until(b'\n', &mut buf)
                .await
                .map_err(|e| DomainError::IoError(e.to_string()))?;
            if read == 0 {
                return Ok(());
            }
            stats.lines += 1;

            let raw = String::from_utf8_lossy(trim_newline(&buf));
            let line = self.converter.convert(&raw).await?;
            let output = self.decode_line(&line, stats.lines, stats)?;

            writer
                .write_all(output.as_bytes())
                .await
                .map_err(|e| DomainError::IoError(e.to_string()))?;
            writer
                .write_all(b"\n")
                .await
                .map_err(|e| DomainError::IoError(e.to_string()))?;
        }
    }

    fn decode_line(
        &self,
        line: &str,
        line_number: u64,
        stats: &mut DecodeStats,
    ) -> Result<String, DomainError> {
        match self.decoder.decode(line) {
            Ok(DecodedLine::Fixed(decoded)) => {
                stats.fixed += 1;
                Ok(decoded)
            }
            Ok(DecodedLine::Event(decoded)) => {
                stats.events += 1;
                Ok(decoded)
            }
            Ok(DecodedLine::UnknownEvent) => {
                stats.unknown_events += 1;
                Ok(line.to_string())
            }
            Ok(DecodedLine::PassThrough) => {
                stats.passed_through += 1;
                Ok(line.to_string())
            }
            Err(e) if e.is_line_error() && self.policy == DecodePolicy::Lenient => {
                warn!(line_number, error = %e, "Failed to decode line, passing it through");
                stats.failed += 1;
                Ok(line.to_string())
            }
            Err(e) => {
                warn!(line_number, error = %e, "Failed to decode line");
                Err(e)
            }
        }
    }
}

fn trim_newline(buf: &[u8]) -> &[u8] {
    let buf = buf.strip_suffix(b"\n").unwrap_or(buf);
    buf.strip_suffix(b"\r").unwrap_or(buf)
}
