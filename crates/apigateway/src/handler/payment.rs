use crate::state::AppState;
use axum::{
    Json,
    extract::{Extension, Query},
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::payment::DynPaymentQueryService,
    domain::{
        requests::{payment::FindAllPayments, scope::DashboardScope},
        responses::{
            ApiResponse, ApiResponsePagination, BalanceSnapshotResponse, PaymentSummaryResponse,
            TransactionResponse,
        },
    },
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/merchant/payments",
    tag = "Payment",
    params(FindAllPayments),
    responses(
        (status = 200, description = "Page of merchant transactions", body = ApiResponsePagination<Vec<TransactionResponse>, PaymentSummaryResponse>),
        (status = 400, description = "Unparseable status filter"),
        (status = 502, description = "Payment gateway failure")
    )
)]
pub async fn get_merchant_payments(
    Extension(service): Extension<DynPaymentQueryService>,
    Query(params): Query<FindAllPayments>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_all(DashboardScope::Merchant, &params).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/merchant/payments/balance",
    tag = "Payment",
    params(FindAllPayments),
    responses(
        (status = 200, description = "Balance snapshot over the selected transactions page", body = ApiResponse<BalanceSnapshotResponse>),
        (status = 502, description = "Payment gateway failure")
    )
)]
pub async fn get_merchant_balance(
    Extension(service): Extension<DynPaymentQueryService>,
    Query(params): Query<FindAllPayments>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.balance(DashboardScope::Merchant, &params).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/fashion-creator/payments",
    tag = "Payment",
    params(FindAllPayments),
    responses(
        (status = 200, description = "Page of fashion-creator transactions", body = ApiResponsePagination<Vec<TransactionResponse>, PaymentSummaryResponse>),
        (status = 400, description = "Unparseable status filter"),
        (status = 502, description = "Payment gateway failure")
    )
)]
pub async fn get_creator_payments(
    Extension(service): Extension<DynPaymentQueryService>,
    Query(params): Query<FindAllPayments>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service
        .find_all(DashboardScope::FashionCreator, &params)
        .await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/fashion-creator/payments/balance",
    tag = "Payment",
    params(FindAllPayments),
    responses(
        (status = 200, description = "Balance snapshot over the selected transactions page", body = ApiResponse<BalanceSnapshotResponse>),
        (status = 502, description = "Payment gateway failure")
    )
)]
pub async fn get_creator_balance(
    Extension(service): Extension<DynPaymentQueryService>,
    Query(params): Query<FindAllPayments>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service
        .balance(DashboardScope::FashionCreator, &params)
        .await?;
    Ok(Json(response))
}

pub fn payment_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/merchant/payments", get(get_merchant_payments))
        .route("/api/merchant/payments/balance", get(get_merchant_balance))
        .route("/api/fashion-creator/payments", get(get_creator_payments))
        .route(
            "/api/fashion-creator/payments/balance",
            get(get_creator_balance),
        )
        .layer(Extension(app_state.di_container.payment_service.clone()))
}
