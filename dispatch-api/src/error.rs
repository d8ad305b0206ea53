use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dispatch_core::DeliveryError;
use serde_json::json;

#[derive(Debug)]
pub enum AppError {
    ValidationError(String),
    NotFoundError(String),
    ConflictError(String),
    UnprocessableError(String),
    BadGatewayError(String),
    InternalServerError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFoundError(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::ConflictError(msg) => (StatusCode::CONFLICT, msg),
            AppError::UnprocessableError(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::BadGatewayError(msg) => {
                tracing::error!("Delivery gateway error: {}", msg);
                (StatusCode::BAD_GATEWAY, msg)
            },
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal Server Error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error".to_string())
            },
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

impl From<DeliveryError> for AppError {
    fn from(err: DeliveryError) -> Self {
        let message = err.to_string();
        match err {
            DeliveryError::GatewayNotFound { .. } => AppError::UnprocessableError(message),
            DeliveryError::UndefinedDeliveryOrder { .. } => AppError::ConflictError(message),
            DeliveryError::MerchantOrderNotFound(_) => AppError::NotFoundError(message),
            DeliveryError::DeliveryOrderRequest { source, .. } => {
                AppError::BadGatewayError(format!("{}: {}", message, source))
            }
            DeliveryError::Repository(source) => AppError::InternalServerError(source.to_string()),
        }
    }
}
