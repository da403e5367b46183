// In crates/strategies/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Rolling window must be a positive integer, got {0}.")]
    InvalidWindow(usize),
}

pub type Result<T> = std::result::Result<T, Error>;
