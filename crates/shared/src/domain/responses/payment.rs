use crate::{
    errors::NormalizationError,
    model::{PaymentSummaryMeta, TransactionRecord},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Sale,
    Withdrawal,
    Refund,
}

impl FromStr for TransactionType {
    type Err = NormalizationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "sale" => Ok(Self::Sale),
            "withdrawal" => Ok(Self::Withdrawal),
            "refund" => Ok(Self::Refund),
            other => Err(NormalizationError::UnknownTransactionType(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TransactionStatus {
    Completed,
    Pending,
    Failed,
}

impl TransactionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::Pending => "pending",
            Self::Failed => "failed",
        }
    }
}

impl FromStr for TransactionStatus {
    type Err = NormalizationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "completed" => Ok(Self::Completed),
            "pending" => Ok(Self::Pending),
            "failed" => Ok(Self::Failed),
            other => Err(NormalizationError::UnknownTransactionStatus(
                other.to_string(),
            )),
        }
    }
}

/// Canonical ledger entry. `amount` is always positive; the sign is implied
/// by `kind`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransactionResponse {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: TransactionType,
    pub status: TransactionStatus,
    pub amount: f64,
    pub date: DateTime<Utc>,
    pub description: Option<String>,
    pub reference: Option<String>,
    pub payment_method: Option<String>,
}

impl TryFrom<TransactionRecord> for TransactionResponse {
    type Error = NormalizationError;

    fn try_from(record: TransactionRecord) -> Result<Self, Self::Error> {
        let kind = record.kind.parse::<TransactionType>()?;
        let status = record.status.parse::<TransactionStatus>()?;

        let date = DateTime::parse_from_rfc3339(&record.date)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|_| NormalizationError::InvalidTimestamp(record.date.clone()))?;

        Ok(Self {
            id: record.id,
            kind,
            status,
            amount: record.amount,
            date,
            description: record.description,
            reference: record.reference,
            payment_method: record.payment_method,
        })
    }
}

/// Pass-through of the gateway's ledger-wide summary. These numbers cover
/// the whole gateway history, not the current page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentSummaryResponse {
    pub total_payments: i64,
    pub total_amount: f64,
    pub completed_payments: i64,
    pub pending_payments: i64,
    pub failed_payments: i64,
    pub completed_amount: f64,
}

impl From<PaymentSummaryMeta> for PaymentSummaryResponse {
    fn from(meta: PaymentSummaryMeta) -> Self {
        Self {
            total_payments: meta.total_payments,
            total_amount: meta.total_amount,
            completed_payments: meta.completed_payments,
            pending_payments: meta.pending_payments,
            failed_payments: meta.failed_payments,
            completed_amount: meta.completed_amount,
        }
    }
}

impl Default for PaymentSummaryResponse {
    fn default() -> Self {
        Self {
            total_payments: 0,
            total_amount: 0.0,
            completed_payments: 0,
            pending_payments: 0,
            failed_payments: 0,
            completed_amount: 0.0,
        }
    }
}
