// In crates/analytics/src/types.rs

use serde::{Deserialize, Serialize};

/// Version reported when a run fails before its configuration is known.
pub const UNKNOWN_VERSION: &str = "unknown";

/// The metric a run reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    SignalRate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunStatus {
    Success,
    Error,
}

/// The summary written after a successful run.
///
/// Field order is the serialised key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SuccessReport {
    pub version: String,
    pub rows_processed: usize,
    pub metric: Metric,
    /// The metric value, already rounded for reporting.
    pub value: f64,
    pub latency_ms: u64,
    pub seed: i64,
    pub status: RunStatus,
}

/// The summary written when any stage of a run fails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorReport {
    pub version: String,
    pub status: RunStatus,
    pub error_message: String,
}

/// The single document a run produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RunReport {
    Success(SuccessReport),
    Failure(ErrorReport),
}

impl RunReport {
    pub fn success(version: String, rows_processed: usize, value: f64, latency_ms: u64, seed: i64) -> Self {
        RunReport::Success(SuccessReport {
            version,
            rows_processed,
            metric: Metric::SignalRate,
            value,
            latency_ms,
            seed,
            status: RunStatus::Success,
        })
    }

    /// Builds the failure document. `version` is `None` when the failure
    /// happened before the configuration was loaded.
    pub fn failure(version: Option<&str>, error_message: impl Into<String>) -> Self {
        RunReport::Failure(ErrorReport {
            version: version.unwrap_or(UNKNOWN_VERSION).to_string(),
            status: RunStatus::Error,
            error_message: error_message.into(),
        })
    }

    pub fn status(&self) -> RunStatus {
        match self {
            RunReport::Success(report) => report.status,
            RunReport::Failure(report) => report.status,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status() == RunStatus::Success
    }
}
