pub mod client;
pub mod service;

pub use self::client::{DynFulfillmentClient, FulfillmentClientTrait};
pub use self::service::{DynOrderQueryService, OrderQueryServiceTrait};
