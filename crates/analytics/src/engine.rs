use crate::{Error, Result};
use rust_decimal::prelude::*;
use strategies::SignalFrame;

/// Decimal places kept in reported metric values.
pub const METRIC_DECIMALS: u32 = 4;

/// The engine responsible for calculating job metrics from a signal frame.
#[derive(Default)]
pub struct AnalyticsEngine;

impl AnalyticsEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fraction of rows whose signal is long.
    ///
    /// Every row counts, including warm-up rows, which are always flat.
    pub fn signal_rate(&self, frame: &SignalFrame) -> Result<f64> {
        if frame.is_empty() {
            return Err(Error::EmptySeries);
        }

        let longs = frame.signals.iter().map(|s| u64::from(s.as_flag())).sum::<u64>();
        Ok(longs as f64 / frame.len() as f64)
    }

    /// Rounds `value` to `dp` decimal places, ties to even.
    ///
    /// The rounding is done on the exact binary value of `value`, so e.g.
    /// `0.12345` (stored as slightly more than that) rounds up.
    pub fn round_to(&self, value: f64, dp: u32) -> Result<f64> {
        let decimal = Decimal::from_f64_retain(value).ok_or(Error::NotRepresentable(value))?;
        decimal
            .round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven)
            .to_f64()
            .ok_or(Error::NotRepresentable(value))
    }
}
