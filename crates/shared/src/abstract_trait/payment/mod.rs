pub mod client;
pub mod service;

pub use self::client::{DynPaymentGatewayClient, PaymentGatewayClientTrait};
pub use self::service::{DynPaymentQueryService, PaymentQueryServiceTrait};
