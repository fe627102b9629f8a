use thiserror::Error;

/// The provider returned a value outside the canonical enum space. Raised
/// instead of coerced so data-quality regressions stay visible.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizationError {
    #[error("unrecognized order status `{0}`")]
    UnknownOrderStatus(String),

    #[error("unrecognized payment status `{0}`")]
    UnknownPaymentStatus(String),

    #[error("unrecognized order source `{0}`")]
    UnknownOrderSource(String),

    #[error("unrecognized transaction type `{0}`")]
    UnknownTransactionType(String),

    #[error("unrecognized transaction status `{0}`")]
    UnknownTransactionStatus(String),

    #[error("unrecognized ticket status `{0}`")]
    UnknownTicketStatus(String),

    #[error("unparseable timestamp `{0}`")]
    InvalidTimestamp(String),
}
