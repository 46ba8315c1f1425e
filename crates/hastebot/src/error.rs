//! Application error types.

use thiserror::Error;

/// Main application error type.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] anyhow::Error),

    #[error("Signal error: {0}")]
    Signal(#[from] signal_client::SignalError),

    #[error("Store error: {0}")]
    Store(#[from] quote_store::StoreError),
}

/// Result type alias for application errors.
pub type AppResult<T> = Result<T, AppError>;
