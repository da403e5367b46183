// In crates/app-config/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration file not found.")]
    ConfigNotFound,

    #[error("Invalid configuration structure.")]
    InvalidConfig,

    #[error("Invalid configuration: window must be a positive integer, got {0}.")]
    InvalidWindow(i64),

    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
