// In crates/strategies/src/lib.rs

use core_types::PriceSeries;
pub mod error;
pub mod rolling;
pub mod sma_trend;
pub mod types;

pub use error::{Error, Result};
pub use types::SignalFrame;

/// The universal interface for a batch signal strategy.
///
/// A strategy takes a full, time-ordered price series and produces one signal
/// per row, along with the intermediate indicator it derived the signals from.
pub trait Strategy {
    /// The name of the strategy.
    fn name(&self) -> &'static str;

    fn generate(&self, series: &PriceSeries) -> Result<SignalFrame>;
}
