use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Query},
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::order::DynOrderQueryService,
    domain::{
        requests::{order::FindAllOrders, scope::DashboardScope},
        responses::{ApiResponsePagination, OrderResponse, OrderSummaryResponse},
    },
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/merchant/orders",
    tag = "Order",
    params(FindAllOrders),
    responses(
        (status = 200, description = "Page of merchant orders", body = ApiResponsePagination<Vec<OrderResponse>, OrderSummaryResponse>),
        (status = 400, description = "Unparseable status or source filter"),
        (status = 502, description = "Fulfillment provider failure")
    )
)]
pub async fn get_merchant_orders(
    Extension(service): Extension<DynOrderQueryService>,
    Query(params): Query<FindAllOrders>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_all(DashboardScope::Merchant, &params).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/fashion-creator/orders",
    tag = "Order",
    params(FindAllOrders),
    responses(
        (status = 200, description = "Page of fashion-creator orders", body = ApiResponsePagination<Vec<OrderResponse>, OrderSummaryResponse>),
        (status = 400, description = "Unparseable status or source filter"),
        (status = 502, description = "Fulfillment provider failure")
    )
)]
pub async fn get_creator_orders(
    Extension(service): Extension<DynOrderQueryService>,
    Query(params): Query<FindAllOrders>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service
        .find_all(DashboardScope::FashionCreator, &params)
        .await?;
    Ok(Json(response))
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/merchant/orders", get(get_merchant_orders))
        .route("/api/fashion-creator/orders", get(get_creator_orders))
        .layer(Extension(app_state.di_container.order_service.clone()))
}
