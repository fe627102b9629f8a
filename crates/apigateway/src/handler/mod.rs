mod order;
mod payment;
mod withdraw;

use crate::state::AppState;
use anyhow::Result;
use axum::extract::DefaultBodyLimit;
use shared::utils::shutdown_signal;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::limit::RequestBodyLimitLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_swagger_ui::SwaggerUi;

pub use self::order::order_routes;
pub use self::payment::payment_routes;
pub use self::withdraw::withdraw_routes;

#[derive(OpenApi)]
#[openapi(
    paths(
        order::get_merchant_orders,
        order::get_creator_orders,

        payment::get_merchant_payments,
        payment::get_merchant_balance,
        payment::get_creator_payments,
        payment::get_creator_balance,

        withdraw::create_merchant_withdrawal,
        withdraw::create_creator_withdrawal,
    ),
    tags(
        (name = "Order", description = "Fulfillment provider order pages"),
        (name = "Payment", description = "Payment gateway transaction pages and balance snapshots"),
        (name = "Withdraw", description = "Withdrawal request workflow")
    )
)]
pub struct ApiDoc;

pub struct AppRouter;

impl AppRouter {
    pub async fn serve(port: u16, app_state: AppState) -> Result<()> {
        let shared_state = Arc::new(app_state);

        let api_router = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(order_routes(shared_state.clone()))
            .merge(payment_routes(shared_state.clone()))
            .merge(withdraw_routes(shared_state.clone()));

        let router_with_layers = api_router
            .layer(DefaultBodyLimit::disable())
            .layer(RequestBodyLimitLayer::new(250 * 1024 * 1024));

        let (app_router, api) = router_with_layers.split_for_parts();

        let app = app_router
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api.clone()));

        let addr = format!("0.0.0.0:{port}");
        let listener = TcpListener::bind(&addr).await?;

        println!("🚀 Server running on http://{}", listener.local_addr()?);
        println!("📚 API Documentation available at:");
        println!("   📖 Swagger UI: http://localhost:{port}/swagger-ui");

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}
