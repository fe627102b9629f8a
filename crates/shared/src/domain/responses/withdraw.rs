use crate::errors::NormalizationError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    Pending,
    Completed,
    Failed,
}

impl FromStr for TicketStatus {
    type Err = NormalizationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "completed" => Ok(Self::Completed),
            "failed" => Ok(Self::Failed),
            other => Err(NormalizationError::UnknownTicketStatus(other.to_string())),
        }
    }
}

/// An accepted withdrawal request. Stays pending until an external system
/// resolves it; the core never polls for that resolution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawTicketResponse {
    pub id: String,
    pub amount: f64,
    pub status: TicketStatus,
}
