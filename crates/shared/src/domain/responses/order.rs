use crate::{
    errors::NormalizationError,
    model::{LineItemRecord, OrderRecord},
    utils::parse_datetime,
};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
    Paid,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Processing => "processing",
            Self::Shipped => "shipped",
            Self::Delivered => "delivered",
            Self::Cancelled => "cancelled",
            Self::Paid => "paid",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = NormalizationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "shipped" => Ok(Self::Shipped),
            "delivered" => Ok(Self::Delivered),
            "cancelled" => Ok(Self::Cancelled),
            "paid" => Ok(Self::Paid),
            other => Err(NormalizationError::UnknownOrderStatus(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    PaidOnline,
    Cod,
    Pending,
}

impl FromStr for PaymentStatus {
    type Err = NormalizationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "paid_online" => Ok(Self::PaidOnline),
            "cod" => Ok(Self::Cod),
            "pending" => Ok(Self::Pending),
            other => Err(NormalizationError::UnknownPaymentStatus(other.to_string())),
        }
    }
}

/// Single provider today; the enum exists so more sources can be added
/// without reshaping the order record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum OrderSource {
    Shiprocket,
}

impl OrderSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shiprocket => "shiprocket",
        }
    }
}

impl FromStr for OrderSource {
    type Err = NormalizationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "shiprocket" => Ok(Self::Shiprocket),
            other => Err(NormalizationError::UnknownOrderSource(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LineItemResponse {
    pub name: String,
    pub quantity: u32,
    pub total: f64,
}

impl From<LineItemRecord> for LineItemResponse {
    fn from(record: LineItemRecord) -> Self {
        Self {
            name: record.name,
            quantity: record.quantity,
            total: record.total,
        }
    }
}

/// Canonical fulfillment record. Shipping fields are present only once the
/// order has shipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: String,
    pub customer_name: String,
    pub items: Vec<LineItemResponse>,
    pub total: f64,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub source: OrderSource,
    pub awb_code: Option<String>,
    pub courier_name: Option<String>,
    pub order_date: String,
    pub updated_at: Option<String>,
}

impl TryFrom<OrderRecord> for OrderResponse {
    type Error = NormalizationError;

    fn try_from(record: OrderRecord) -> Result<Self, Self::Error> {
        let status = record.status.parse::<OrderStatus>()?;
        let payment_status = record.payment_status.parse::<PaymentStatus>()?;
        let source = record.source.parse::<OrderSource>()?;

        let order_date = parse_datetime(&record.order_date).unwrap_or(record.order_date);
        let updated_at = record
            .updated_at
            .and_then(|value| parse_datetime(&value).or(Some(value)));

        Ok(Self {
            order_id: record.order_id,
            customer_name: record.customer_name,
            items: record.items.into_iter().map(LineItemResponse::from).collect(),
            total: record.total,
            status,
            payment_status,
            source,
            awb_code: record.awb_code,
            courier_name: record.courier_name,
            order_date,
            updated_at,
        })
    }
}

/// Per-source counts for the active filter combination. `total` is the
/// provider-reported total; with a single source the two are equal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct OrderSummaryResponse {
    pub shiprocket: i64,
    pub total: i64,
}
