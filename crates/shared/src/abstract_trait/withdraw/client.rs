use crate::{errors::FetchError, model::WithdrawTicketRecord};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynWithdrawalClient = Arc<dyn WithdrawalClientTrait + Send + Sync>;

#[async_trait]
pub trait WithdrawalClientTrait {
    async fn submit(&self, amount: f64) -> Result<WithdrawTicketRecord, FetchError>;
}
