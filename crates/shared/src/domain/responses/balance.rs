use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Financial aggregates derived from a single page of normalized
/// transactions. Never persisted and never incremental: every fetch
/// recomputes it from scratch, so the numbers only describe the loaded page
/// unless every page has been loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSnapshotResponse {
    pub total_earnings: f64,
    pub this_month_earnings: f64,
    pub pending_withdrawals: f64,
    pub available_balance: f64,
}
