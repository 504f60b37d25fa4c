use clap::Parser;
use dnslog_application::services::LineDecoder;
use dnslog_application::use_cases::{DecodeLogUseCase, DecodeStats};
use dnslog_domain::{CliOverrides, TimestampMode};
use dnslog_infrastructure::input::LogSource;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::BufWriter;
use tracing::{error, info};

mod bootstrap;
mod di;

#[derive(Parser)]
#[command(name = "dnslog")]
#[command(version)]
#[command(about = "Decode tinydns and dnscache logs into readable text")]
struct Cli {
    /// Log files to decode, `-` or nothing for stdin
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Abort on the first line that fails to decode
    #[arg(long)]
    strict: bool,

    /// Timestamp conversion (external, native, none)
    #[arg(long, value_name = "MODE")]
    timestamps: Option<TimestampMode>,

    /// Program used for external timestamp conversion
    #[arg(long, value_name = "PROGRAM")]
    tai64nlocal: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        strict: cli.strict,
        timestamp_mode: cli.timestamps,
        timestamp_program: cli.tai64nlocal.clone(),
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;
    if cli.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }
    bootstrap::init_logging(&config);

    let converter = di::build_converter(&config.timestamp)?;
    let decoder = Arc::new(LineDecoder::new()?);
    let use_case = DecodeLogUseCase::new(converter.clone(), decoder, config.decode.policy());

    let mut out = BufWriter::new(tokio::io::stdout());
    let mut total = DecodeStats::default();

    for source in LogSource::from_args(&cli.files) {
        let result = match source.open().await {
            Ok(reader) => use_case.execute(reader, &mut out).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(stats) => total.merge(stats),
            Err(e) => {
                error!(source = %source, error = %e, "Decoding stopped");
                if let Err(shutdown) = converter.shutdown().await {
                    error!(error = %shutdown, "Failed to stop timestamp converter");
                }
                return Err(e.into());
            }
        }
    }

    converter.shutdown().await?;

    info!(
        lines = total.lines,
        fixed = total.fixed,
        events = total.events,
        unknown_events = total.unknown_events,
        passed_through = total.passed_through,
        failed = total.failed,
        "Decoding complete"
    );
    Ok(())
}
