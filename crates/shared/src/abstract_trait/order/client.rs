use crate::{
    domain::requests::order::OrderProviderQuery, errors::FetchError, model::FulfillmentEnvelope,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynFulfillmentClient = Arc<dyn FulfillmentClientTrait + Send + Sync>;

/// Read-only collaborator contract for the fulfillment provider. An
/// implementation must never yield an envelope with `success == false`;
/// that case is collapsed into `FetchError::Provider`.
#[async_trait]
pub trait FulfillmentClientTrait {
    async fn fetch_orders(
        &self,
        query: &OrderProviderQuery,
    ) -> Result<FulfillmentEnvelope, FetchError>;
}
