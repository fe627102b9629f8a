use crate::{
    domain::requests::payment::PaymentProviderQuery, errors::FetchError, model::PaymentEnvelope,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynPaymentGatewayClient = Arc<dyn PaymentGatewayClientTrait + Send + Sync>;

#[async_trait]
pub trait PaymentGatewayClientTrait {
    async fn fetch_payments(
        &self,
        query: &PaymentProviderQuery,
    ) -> Result<PaymentEnvelope, FetchError>;
}
