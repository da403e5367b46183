// In crates/strategies/src/sma_trend.rs

use crate::rolling::{exceeds, rolling_mean};
use crate::types::{SignalFrame, SmaTrendSettings};
use crate::{Error, Result, Strategy};
use core_types::{PriceSeries, Signal};

/// Goes long on every row whose close is strictly above the trailing simple
/// moving average of the last `window` closes.
#[derive(Debug)]
pub struct SmaTrend {
    settings: SmaTrendSettings,
}

impl SmaTrend {
    /// Creates a new `SmaTrend` strategy instance from its settings.
    pub fn new(settings: SmaTrendSettings) -> Self {
        Self { settings }
    }
}

impl Strategy for SmaTrend {
    fn name(&self) -> &'static str {
        "SmaTrend"
    }

    fn generate(&self, series: &PriceSeries) -> Result<SignalFrame> {
        let window = self.settings.window;
        if window == 0 {
            return Err(Error::InvalidWindow(window));
        }

        // 1. Indicator
        let means = rolling_mean(series.closes(), window);
        tracing::info!("Rolling mean calculated with window={}", window);

        // 2. Signals. Rows in the warm-up region compare against an undefined
        // mean and therefore stay flat.
        let signals = series
            .closes()
            .iter()
            .zip(&means)
            .map(|(close, mean)| {
                if exceeds(*close, *mean) {
                    Signal::Long
                } else {
                    Signal::Flat
                }
            })
            .collect();
        tracing::info!("Signals generated");

        Ok(SignalFrame {
            rolling_mean: means,
            signals,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strategy(window: usize) -> SmaTrend {
        SmaTrend::new(SmaTrendSettings { window })
    }

    #[test]
    fn rising_series_with_window_three() {
        let series: PriceSeries = [1.0, 2.0, 3.0, 4.0, 5.0].into_iter().collect();
        let frame = strategy(3).generate(&series).unwrap();

        assert_eq!(frame.rolling_mean, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
        // 3 > 2, 4 > 3 and 5 > 4; the two warm-up rows stay flat.
        assert_eq!(frame.flags(), vec![0, 0, 1, 1, 1]);
    }

    #[test]
    fn close_equal_to_its_decimal_mean_is_flat() {
        let series: PriceSeries = [100.1, 100.3, 100.2].into_iter().collect();
        let frame = strategy(3).generate(&series).unwrap();
        assert_eq!(frame.rolling_mean[2], Some(100.2));
        assert_eq!(frame.flags(), vec![0, 0, 0]);
    }

    #[test]
    fn falling_series_never_signals() {
        let series: PriceSeries = [5.0, 4.0, 3.0, 2.0, 1.0].into_iter().collect();
        let frame = strategy(2).generate(&series).unwrap();
        assert_eq!(frame.flags(), vec![0, 0, 0, 0, 0]);
    }

    #[test]
    fn equal_to_mean_is_flat() {
        let series: PriceSeries = [2.0, 2.0, 2.0, 3.0].into_iter().collect();
        let frame = strategy(3).generate(&series).unwrap();
        assert_eq!(frame.flags(), vec![0, 0, 0, 1]);
    }

    #[test]
    fn missing_close_is_flat() {
        let series: PriceSeries = vec![Some(1.0), Some(2.0), None, Some(9.0)].into_iter().collect();
        let frame = strategy(1).generate(&series).unwrap();
        // A window of one makes every defined close equal to its own mean.
        assert_eq!(frame.flags(), vec![0, 0, 0, 0]);
        assert_eq!(frame.rolling_mean[2], None);
    }

    #[test]
    fn one_signal_per_row() {
        let series: PriceSeries = (0..50).map(|i| (i as f64).sin()).collect();
        let frame = strategy(7).generate(&series).unwrap();
        assert_eq!(frame.len(), series.len());
        assert_eq!(frame.rolling_mean.len(), series.len());
        assert!(frame.signals[..6].iter().all(|s| *s == Signal::Flat));
    }

    #[test]
    fn zero_window_is_rejected() {
        let series: PriceSeries = [1.0].into_iter().collect();
        assert!(matches!(strategy(0).generate(&series), Err(Error::InvalidWindow(0))));
    }
}
