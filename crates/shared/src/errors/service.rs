use crate::errors::{FetchError, NormalizationError, WithdrawValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),

    #[error("Normalization error: {0}")]
    Normalization(#[from] NormalizationError),

    #[error("Withdrawal rejected: {0}")]
    Withdrawal(#[from] WithdrawValidationError),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Custom error: {0}")]
    Custom(String),
}
