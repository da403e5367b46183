// In crates/app-config/src/types.rs

use serde::Deserialize;

/// The validated settings for one run of the signal job.
#[derive(Debug, Clone, PartialEq)]
pub struct JobConfig {
    /// Seed for any randomised component. Reported back in the success document.
    pub seed: i64,
    /// Rolling window length, always >= 1.
    pub window: usize,
    /// Free-form version label echoed in every result document.
    pub version: String,
}

/// The config file as parsed, before the required keys are checked.
///
/// Every field is optional so that an absent key is reported as an invalid
/// structure rather than a deserialisation failure.
#[derive(Deserialize, Debug, Default)]
pub(crate) struct RawJobConfig {
    #[serde(default)]
    pub seed: Option<i64>,
    #[serde(default)]
    pub window: Option<i64>,
    #[serde(default)]
    pub version: Option<String>,
}
