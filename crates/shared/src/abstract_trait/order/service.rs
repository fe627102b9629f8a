use crate::{
    domain::{
        requests::{order::FindAllOrders, scope::DashboardScope},
        responses::{ApiResponsePagination, OrderResponse, OrderSummaryResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynOrderQueryService = Arc<dyn OrderQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait OrderQueryServiceTrait {
    async fn find_all(
        &self,
        scope: DashboardScope,
        req: &FindAllOrders,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>, OrderSummaryResponse>, ServiceError>;
}
