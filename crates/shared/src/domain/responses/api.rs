use crate::domain::responses::Pagination;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub data: T,
}

/// Page envelope returned by every list operation: the page itself, the
/// pagination cursor, and a per-resource summary block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponsePagination<T, S> {
    pub status: String,
    pub message: String,
    pub data: T,
    pub pagination: Pagination,
    pub summary: S,
}
