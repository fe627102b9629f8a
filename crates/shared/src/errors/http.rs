use crate::errors::{ErrorResponse, ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, warn};

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl From<ServiceError> for AppErrorHttp {
    fn from(err: ServiceError) -> Self {
        Self(err)
    }
}

impl AppErrorHttp {
    fn log(&self) {
        match &self.0 {
            ServiceError::Validation(_) | ServiceError::Withdrawal(_) => warn!("⚠️ {}", self.0),
            _ => error!("🚨 {}", self.0),
        }
    }
}

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        self.log();

        let (status, msg) = match self.0 {
            ServiceError::Fetch(err) => (StatusCode::BAD_GATEWAY, err.to_string()),

            ServiceError::Normalization(err) => (StatusCode::BAD_GATEWAY, err.to_string()),

            ServiceError::Withdrawal(err) => (StatusCode::BAD_REQUEST, err.to_string()),

            ServiceError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, format!("Validation failed: {errors:?}"))
            }

            ServiceError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),

            ServiceError::Custom(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message: msg,
        });

        (status, body).into_response()
    }
}
