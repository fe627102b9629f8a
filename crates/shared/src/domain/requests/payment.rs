use crate::domain::responses::TransactionStatus;
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Validate, IntoParams)]
pub struct FindAllPayments {
    #[serde(default = "default_page")]
    pub page: i32,

    #[serde(default = "default_limit")]
    pub limit: i32,

    /// Canonical transaction status or the sentinel "all".
    #[serde(default)]
    pub status: Option<String>,

    #[serde(default)]
    pub search: Option<String>,
}

impl Default for FindAllPayments {
    fn default() -> Self {
        Self {
            page: default_page(),
            limit: default_limit(),
            status: None,
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

#[derive(Debug, Clone, Copy)]
pub struct PaymentProviderQuery {
    pub page: i32,
    pub limit: i32,
    pub status: Option<TransactionStatus>,
}
