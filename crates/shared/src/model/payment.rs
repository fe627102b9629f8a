use crate::model::PageMeta;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub status: String,
    pub amount: f64,
    pub date: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
}

/// Gateway-wide statistics. Computed by the provider over its whole ledger,
/// never recomputed locally and never page-scoped.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummaryMeta {
    pub total_payments: i64,
    pub total_amount: f64,
    pub completed_payments: i64,
    pub pending_payments: i64,
    pub failed_payments: i64,
    pub completed_amount: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentEnvelope {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<TransactionRecord>,
    #[serde(default)]
    pub pagination: Option<PageMeta>,
    #[serde(default)]
    pub summary: Option<PaymentSummaryMeta>,
    #[serde(default)]
    pub error: Option<String>,
}
