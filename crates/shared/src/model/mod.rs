mod order;
mod payment;
mod withdraw;

pub use self::order::{FulfillmentEnvelope, LineItemRecord, OrderRecord, OrderSummaryMeta};
pub use self::payment::{PaymentEnvelope, PaymentSummaryMeta, TransactionRecord};
pub use self::withdraw::{WithdrawEnvelope, WithdrawTicketRecord};

use serde::Deserialize;

/// Pagination block shared by both list-provider envelopes. Only the fields
/// the core consumes are declared; provider extras are ignored.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub page: i32,
    pub limit: i32,
    pub total: i64,
}
