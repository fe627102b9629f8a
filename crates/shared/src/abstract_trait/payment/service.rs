use crate::{
    domain::{
        requests::{payment::FindAllPayments, scope::DashboardScope},
        responses::{
            ApiResponse, ApiResponsePagination, BalanceSnapshotResponse, PaymentSummaryResponse,
            TransactionResponse,
        },
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPaymentQueryService = Arc<dyn PaymentQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait PaymentQueryServiceTrait {
    async fn find_all(
        &self,
        scope: DashboardScope,
        req: &FindAllPayments,
    ) -> Result<
        ApiResponsePagination<Vec<TransactionResponse>, PaymentSummaryResponse>,
        ServiceError,
    >;

    /// Derives the balance snapshot from the transactions page selected by
    /// `req`. Page-scoped by construction.
    async fn balance(
        &self,
        scope: DashboardScope,
        req: &FindAllPayments,
    ) -> Result<ApiResponse<BalanceSnapshotResponse>, ServiceError>;
}
