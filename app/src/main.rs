// In app/src/main.rs

use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::prelude::*;

mod emitter;
mod pipeline;
mod tracing_layer;

use self::tracing_layer::LogFileLayer;

/// Exit code when the job ran but its result document could not be written.
const EXIT_OUTPUT_FAILED: u8 = 2;

// --- Command-Line Interface Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Computes a rolling-mean trading signal over a CSV price series and reports the signal rate as JSON."
)]
struct Cli {
    /// CSV file with a header row and a numeric `close` column.
    #[arg(long)]
    input: PathBuf,

    /// Job configuration (YAML, or TOML/JSON by extension) with `seed`, `window` and `version`.
    #[arg(long)]
    config: PathBuf,

    /// Where the JSON result document is written.
    #[arg(long)]
    output: PathBuf,

    /// Log file, appended to.
    #[arg(long)]
    log_file: PathBuf,
}

// --- Main Application Entry Point ---

fn main() -> ExitCode {
    let cli = Cli::parse();
    let started = Instant::now();

    if let Err(err) = init_tracing(&cli.log_file) {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Job started");

    let report = pipeline::run_job(&cli.input, &cli.config, started);

    if let Err(err) = emitter::emit(&report, &cli.output, &mut io::stdout().lock()) {
        tracing::error!("{:#}", err);
        return ExitCode::from(EXIT_OUTPUT_FAILED);
    }

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Installs the log file sink plus a stderr layer for warnings and errors.
///
/// Stdout is reserved for the result document.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file_layer = LogFileLayer::open(log_file)?.with_filter(LevelFilter::INFO);
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(io::stderr)
        .with_filter(Targets::new().with_default(tracing::Level::WARN));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .try_init()?;
    Ok(())
}
