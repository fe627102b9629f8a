use crate::domain::responses::{OrderSource, OrderStatus};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct FindAllOrders {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_limit")]
    pub limit: i32,

    /// Canonical order status or the sentinel "all".
    #[serde(default)]
    pub status: Option<String>,

    /// Order source or the sentinel "all".
    #[serde(default)]
    pub source: Option<String>,

    /// Free text. Never forwarded to the provider; applied over the fetched
    /// page only.
    #[serde(default)]
    pub search: Option<String>,
}

impl Default for FindAllOrders {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            status: None,
            source: None,
            search: None,
        }
    }
}

fn default_page() -> i32 {
    1
}

fn default_limit() -> i32 {
    10
}

/// Parameters actually sent to the fulfillment provider. Status and source
/// are already parsed, so only canonical values cross the wire.
#[derive(Debug, Clone, Copy)]
pub struct OrderProviderQuery {
    pub page: i32,
    pub limit: i32,
    pub status: Option<OrderStatus>,
    pub source: Option<OrderSource>,
}
