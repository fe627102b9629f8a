use crate::{
    domain::{
        requests::{scope::DashboardScope, withdraw::CreateWithdrawRequest},
        responses::{ApiResponse, BalanceSnapshotResponse, WithdrawTicketResponse},
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynWithdrawCommandService = Arc<dyn WithdrawCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait WithdrawCommandServiceTrait {
    async fn request(
        &self,
        scope: DashboardScope,
        req: &CreateWithdrawRequest,
        snapshot: &BalanceSnapshotResponse,
    ) -> Result<ApiResponse<WithdrawTicketResponse>, ServiceError>;
}
