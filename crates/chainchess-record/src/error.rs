//! Error types for on-chain record parsing

use thiserror::Error;

/// Record-level parse errors
#[derive(Error, Debug)]
pub enum RecordError {
    /// Status byte outside the contract's enum (7-255)
    #[error("unknown game status code: {0}")]
    InvalidStatus(u8),

    /// Malformed player address
    #[error("invalid address '{0}': expected 0x-prefixed 20-byte hex")]
    InvalidAddress(String),

    /// Malformed ETH amount string
    #[error("invalid ETH amount '{0}'")]
    InvalidAmount(String),

    /// JSON (de)serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type for record operations
pub type RecordResult<T> = Result<T, RecordError>;
