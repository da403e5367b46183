// In crates/analytics/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Cannot compute a metric over an empty signal series.")]
    EmptySeries,

    #[error("Metric value {0} cannot be represented as a decimal.")]
    NotRepresentable(f64),
}

pub type Result<T> = std::result::Result<T, Error>;
