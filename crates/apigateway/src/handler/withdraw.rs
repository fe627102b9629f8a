use crate::state::AppState;
use axum::{
    Json,
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::post,
};
use shared::{
    abstract_trait::{payment::DynPaymentQueryService, withdraw::DynWithdrawCommandService},
    domain::{
        requests::{
            payment::FindAllPayments, scope::DashboardScope, withdraw::CreateWithdrawRequest,
        },
        responses::{ApiResponse, WithdrawTicketResponse},
    },
    errors::{AppErrorHttp, ServiceError, format_validation_errors},
};
use std::sync::Arc;
use validator::Validate;
use utoipa_axum::router::OpenApiRouter;

/// The snapshot that gates a withdrawal is derived from the first
/// transactions page, mirroring what the dashboard shows when the button is
/// pressed.
async fn submit_withdrawal(
    scope: DashboardScope,
    payments: DynPaymentQueryService,
    withdraws: DynWithdrawCommandService,
    body: CreateWithdrawRequest,
) -> Result<ApiResponse<WithdrawTicketResponse>, AppErrorHttp> {
    body.validate().map_err(|e| {
        AppErrorHttp(ServiceError::Validation(vec![format_validation_errors(&e)]))
    })?;

    let snapshot = payments
        .balance(scope, &FindAllPayments::default())
        .await?
        .data;

    let response = withdraws.request(scope, &body, &snapshot).await?;
    Ok(response)
}

#[utoipa::path(
    post,
    path = "/api/merchant/withdrawals",
    tag = "Withdraw",
    request_body = CreateWithdrawRequest,
    responses(
        (status = 201, description = "Withdrawal ticket accepted", body = ApiResponse<WithdrawTicketResponse>),
        (status = 400, description = "Non-positive amount or insufficient balance"),
        (status = 502, description = "Collaborator failure")
    )
)]
pub async fn create_merchant_withdrawal(
    Extension(payments): Extension<DynPaymentQueryService>,
    Extension(withdraws): Extension<DynWithdrawCommandService>,
    Json(body): Json<CreateWithdrawRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response =
        submit_withdrawal(DashboardScope::Merchant, payments, withdraws, body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/fashion-creator/withdrawals",
    tag = "Withdraw",
    request_body = CreateWithdrawRequest,
    responses(
        (status = 201, description = "Withdrawal ticket accepted", body = ApiResponse<WithdrawTicketResponse>),
        (status = 400, description = "Non-positive amount or insufficient balance"),
        (status = 502, description = "Collaborator failure")
    )
)]
pub async fn create_creator_withdrawal(
    Extension(payments): Extension<DynPaymentQueryService>,
    Extension(withdraws): Extension<DynWithdrawCommandService>,
    Json(body): Json<CreateWithdrawRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response =
        submit_withdrawal(DashboardScope::FashionCreator, payments, withdraws, body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub fn withdraw_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/merchant/withdrawals", post(create_merchant_withdrawal))
        .route(
            "/api/fashion-creator/withdrawals",
            post(create_creator_withdrawal),
        )
        .layer(Extension(app_state.di_container.payment_service.clone()))
        .layer(Extension(app_state.di_container.withdraw_service.clone()))
}
