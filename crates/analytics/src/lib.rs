// In crates/analytics/src/lib.rs

pub mod engine;
pub mod error;
pub mod types;

pub use engine::AnalyticsEngine;
pub use error::{Error, Result};
pub use types::{ErrorReport, Metric, RunReport, RunStatus, SuccessReport, UNKNOWN_VERSION};
