use crate::{
    abstract_trait::order::{DynFulfillmentClient, OrderQueryServiceTrait},
    domain::{
        requests::{
            order::{FindAllOrders, OrderProviderQuery},
            scope::DashboardScope,
        },
        responses::{
            ApiResponsePagination, OrderResponse, OrderSource, OrderStatus, OrderSummaryResponse,
            Pagination,
        },
    },
    errors::{NormalizationError, ServiceError},
    service::refine::refine,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info, warn};

/// Pulls order pages from the fulfillment provider and normalizes them into
/// canonical shape. Status and source filters go to the provider so they
/// apply before pagination; free-text search stays local to the fetched
/// page.
pub struct OrderQueryService {
    client: DynFulfillmentClient,
}

impl OrderQueryService {
    pub fn new(client: DynFulfillmentClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl OrderQueryServiceTrait for OrderQueryService {
    async fn find_all(
        &self,
        scope: DashboardScope,
        req: &FindAllOrders,
    ) -> Result<ApiResponsePagination<Vec<OrderResponse>, OrderSummaryResponse>, ServiceError> {
        let page = if req.page > 0 { req.page } else { 1 };
        let limit = if req.limit > 0 { req.limit } else { 10 };

        let status = parse_filter::<OrderStatus>(req.status.as_deref())?;
        let source = parse_filter::<OrderSource>(req.source.as_deref())?;

        info!(
            "🔍 Fetching orders | scope: {scope}, page: {page}, limit: {limit}, status: {:?}, source: {:?}",
            req.status, req.source
        );

        let query = OrderProviderQuery {
            page,
            limit,
            status,
            source,
        };

        let envelope = self.client.fetch_orders(&query).await.map_err(|e| {
            error!("❌ Failed to fetch orders for scope {scope}: {e}");
            ServiceError::Fetch(e)
        })?;

        let orders: Vec<OrderResponse> = envelope
            .data
            .into_iter()
            .map(OrderResponse::try_from)
            .collect::<Result<_, NormalizationError>>()
            .map_err(|e| {
                error!("❌ Order normalization failed for scope {scope}: {e}");
                ServiceError::Normalization(e)
            })?;

        for order in &orders {
            if !order.items.is_empty() {
                let items_total: f64 = order.items.iter().map(|item| item.total).sum();
                if (order.total - items_total).abs() > 0.005 {
                    warn!(
                        "⚠️ Order {} total {} does not match items sum {}",
                        order.order_id, order.total, items_total
                    );
                }
            }
        }

        let pagination = match &envelope.pagination {
            Some(meta) => Pagination::new(meta.page, meta.limit, meta.total),
            None => Pagination::new(page, limit, orders.len() as i64),
        };

        let summary = match &envelope.summary {
            Some(meta) => OrderSummaryResponse {
                shiprocket: meta.shiprocket,
                total: meta.total,
            },
            None => OrderSummaryResponse {
                shiprocket: pagination.total,
                total: pagination.total,
            },
        };

        let data = match req.search.as_deref() {
            Some(query) if !query.trim().is_empty() => refine(&orders, query),
            _ => orders,
        };

        info!("✅ Returning {} orders for scope {scope}", data.len());

        Ok(ApiResponsePagination {
            status: "success".to_string(),
            message: "Orders retrieved successfully".to_string(),
            data,
            pagination,
            summary,
        })
    }
}

/// Parses a user-supplied filter value. `None` and the sentinel "all" mean
/// no filter; anything that fails to parse is a request error, not a
/// provider data-quality problem.
pub(crate) fn parse_filter<T>(value: Option<&str>) -> Result<Option<T>, ServiceError>
where
    T: std::str::FromStr<Err = NormalizationError>,
{
    match value {
        None => Ok(None),
        Some("all") => Ok(None),
        Some(raw) => raw
            .parse::<T>()
            .map(Some)
            .map_err(|e| ServiceError::Validation(vec![e.to_string()])),
    }
}
