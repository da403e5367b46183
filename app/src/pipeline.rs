// In app/src/pipeline.rs

use analytics::engine::METRIC_DECIMALS;
use analytics::{AnalyticsEngine, RunReport};
use anyhow::Result;
use std::path::Path;
use std::time::Instant;
use strategies::sma_trend::SmaTrend;
use strategies::types::SmaTrendSettings;
use strategies::Strategy;

/// Runs the whole job and returns the document describing its outcome.
///
/// Any failure is logged once and turned into the error document; it carries
/// the configured version if the configuration had been loaded by then.
pub fn run_job(input: &Path, config: &Path, started: Instant) -> RunReport {
    let mut version = None;
    match execute(input, config, started, &mut version) {
        Ok(report) => report,
        Err(err) => {
            let message = err.to_string();
            tracing::error!("Error occurred: {}", message);
            RunReport::failure(version.as_deref(), message)
        }
    }
}

fn execute(input: &Path, config: &Path, started: Instant, version: &mut Option<String>) -> Result<RunReport> {
    // --- 1. Configuration ---
    let config = app_config::load_job_config(config)?;
    *version = Some(config.version.clone());
    tracing::info!(
        "Config loaded: seed={}, window={}, version={}",
        config.seed,
        config.window,
        config.version
    );

    // --- 2. Input data ---
    let series = market_data::load_price_series(input)?;
    let rows_processed = series.len();
    tracing::info!("Data loaded: {} rows", rows_processed);

    // --- 3. Rolling mean and signals ---
    let strategy = SmaTrend::new(SmaTrendSettings {
        window: config.window,
    });
    tracing::debug!(strategy = strategy.name(), "Generating signals.");
    let frame = strategy.generate(&series)?;

    // --- 4. Metrics ---
    let engine = AnalyticsEngine::new();
    let signal_rate = engine.round_to(engine.signal_rate(&frame)?, METRIC_DECIMALS)?;
    let latency_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

    tracing::info!(
        "Metrics: signal_rate={:?}, rows_processed={}",
        signal_rate,
        rows_processed
    );
    tracing::info!("Job completed successfully in {}ms", latency_ms);

    Ok(RunReport::success(
        config.version,
        rows_processed,
        signal_rate,
        latency_ms,
        config.seed,
    ))
}
