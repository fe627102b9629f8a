use shared::{
    abstract_trait::{
        order::{DynFulfillmentClient, DynOrderQueryService},
        payment::{DynPaymentGatewayClient, DynPaymentQueryService},
        withdraw::{DynWithdrawCommandService, DynWithdrawalClient},
    },
    client::{PaymentGatewayClient, ShiprocketClient, WithdrawalClient},
    config::Config,
    service::{OrderQueryService, PaymentQueryService, WithdrawCommandService},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct DependenciesInject {
    pub order_service: DynOrderQueryService,
    pub payment_service: DynPaymentQueryService,
    pub withdraw_service: DynWithdrawCommandService,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("order_service", &"OrderQueryService")
            .field("payment_service", &"PaymentQueryService")
            .field("withdraw_service", &"WithdrawCommandService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(config: &Config) -> Self {
        let fulfillment_client: DynFulfillmentClient = Arc::new(ShiprocketClient::new(
            config.fulfillment_base_url.clone(),
            config.http_timeout_secs,
        ));
        let payment_client: DynPaymentGatewayClient = Arc::new(PaymentGatewayClient::new(
            config.payment_base_url.clone(),
            config.http_timeout_secs,
        ));
        let withdrawal_client: DynWithdrawalClient = Arc::new(WithdrawalClient::new(
            config.withdrawal_base_url.clone(),
            config.http_timeout_secs,
        ));

        let order_service =
            Arc::new(OrderQueryService::new(fulfillment_client)) as DynOrderQueryService;
        let payment_service =
            Arc::new(PaymentQueryService::new(payment_client)) as DynPaymentQueryService;
        let withdraw_service =
            Arc::new(WithdrawCommandService::new(withdrawal_client)) as DynWithdrawCommandService;

        Self {
            order_service,
            payment_service,
            withdraw_service,
        }
    }
}
