// In crates/strategies/src/types.rs

use core_types::Signal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SmaTrendSettings {
    // Number of trailing closes averaged into each rolling mean
    pub window: usize,
}

/// The per-row output of a strategy run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignalFrame {
    /// The indicator value per row; `None` where it is undefined (warm-up or gaps).
    pub rolling_mean: Vec<Option<f64>>,
    /// One signal per input row.
    pub signals: Vec<Signal>,
}

impl SignalFrame {
    pub fn len(&self) -> usize {
        self.signals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signals.is_empty()
    }

    /// The signals as 0/1 flags, in row order.
    pub fn flags(&self) -> Vec<u8> {
        self.signals.iter().map(|s| s.as_flag()).collect()
    }
}
