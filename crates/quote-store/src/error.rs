//! State store errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage unavailable: {0}")]
    Unavailable(#[from] std::io::Error),

    #[error("Corrupt state file: {0}")]
    Serialization(#[from] serde_json::Error),
}
