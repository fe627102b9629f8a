use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Page cursor shared by every list endpoint. `page` and `limit` echo the
/// request; `total` and `has_more` are response-only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: i32,
    pub limit: i32,
    pub total: i64,
    pub has_more: bool,
}

impl Pagination {
    /// Sole constructor, so `has_more == (page * limit) < total` cannot
    /// drift from the stored fields.
    pub fn new(page: i32, limit: i32, total: i64) -> Self {
        Self {
            page,
            limit,
            total,
            has_more: i64::from(page) * i64::from(limit) < total,
        }
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(1, 10, 0)
    }
}
