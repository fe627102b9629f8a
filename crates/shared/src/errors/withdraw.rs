use thiserror::Error;

/// A withdrawal request violated the balance or amount invariants. Always
/// recoverable and user-correctable.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WithdrawValidationError {
    #[error("non_positive_amount: withdrawal amount must be greater than zero")]
    NonPositiveAmount,

    #[error("insufficient_balance: requested {requested}, available {available}")]
    InsufficientBalance { requested: f64, available: f64 },
}

impl WithdrawValidationError {
    pub fn reason(&self) -> &'static str {
        match self {
            Self::NonPositiveAmount => "non_positive_amount",
            Self::InsufficientBalance { .. } => "insufficient_balance",
        }
    }
}
