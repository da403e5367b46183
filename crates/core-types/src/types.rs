// In crates/core-types/src/types.rs

use serde::Serialize;

/// The binary trading signal derived for a single row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Signal {
    /// No position: close did not exceed its rolling mean (or either was undefined).
    #[default]
    Flat,
    /// Close is strictly above its rolling mean.
    Long,
}

impl Signal {
    /// The numeric encoding used in reports: `Long` is 1, `Flat` is 0.
    pub fn as_flag(self) -> u8 {
        match self {
            Signal::Flat => 0,
            Signal::Long => 1,
        }
    }
}

/// An ordered series of close prices, one entry per input row, in time order.
///
/// A `None` entry is a missing observation (blank or NA cell in the source data).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceSeries {
    closes: Vec<Option<f64>>,
}

impl PriceSeries {
    pub fn new(closes: Vec<Option<f64>>) -> Self {
        Self { closes }
    }

    pub fn closes(&self) -> &[Option<f64>] {
        &self.closes
    }

    /// Number of rows in the series.
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }
}

impl FromIterator<f64> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().map(Some).collect())
    }
}

impl FromIterator<Option<f64>> for PriceSeries {
    fn from_iter<I: IntoIterator<Item = Option<f64>>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signal_flags() {
        assert_eq!(Signal::Flat.as_flag(), 0);
        assert_eq!(Signal::Long.as_flag(), 1);
        assert_eq!(Signal::default(), Signal::Flat);
    }

    #[test]
    fn series_keeps_row_order_and_gaps() {
        let series: PriceSeries = vec![Some(3.0), None, Some(1.0)].into_iter().collect();
        assert_eq!(series.len(), 3);
        assert_eq!(series.closes(), &[Some(3.0), None, Some(1.0)]);
        assert!(!series.is_empty());
        assert!(PriceSeries::default().is_empty());
    }
}
