use crate::model::PageMeta;
use serde::Deserialize;

/// Raw order row as the fulfillment provider serializes it. Status fields
/// stay strings here; normalization into the canonical enums happens at the
/// response boundary so unknown values can be rejected explicitly.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub order_id: String,
    pub customer_name: String,
    #[serde(default)]
    pub items: Vec<LineItemRecord>,
    pub total: f64,
    pub status: String,
    pub payment_status: String,
    pub source: String,
    #[serde(default)]
    pub awb_code: Option<String>,
    #[serde(default)]
    pub courier_name: Option<String>,
    pub order_date: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItemRecord {
    pub name: String,
    pub quantity: u32,
    pub total: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OrderSummaryMeta {
    pub shiprocket: i64,
    pub total: i64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FulfillmentEnvelope {
    pub success: bool,
    #[serde(default)]
    pub data: Vec<OrderRecord>,
    #[serde(default)]
    pub pagination: Option<PageMeta>,
    #[serde(default)]
    pub summary: Option<OrderSummaryMeta>,
    #[serde(default)]
    pub error: Option<String>,
}
