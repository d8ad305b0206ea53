use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{post, put},
    Json, Router,
};
use dispatch_core::{DeliveryOrderRequest, MerchantOrder};
use serde::Deserialize;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct DeliveryOrderBody {
    pub order: MerchantOrder,
    pub gateway_code: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct GatewaySelection {
    #[serde(default)]
    pub gateway_code: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/delivery-orders", post(create_delivery_order))
        .route("/v1/delivery-orders/{number}", put(update_delivery_order))
        .route("/v1/delivery-orders/{number}/prepaid", post(prepaid_delivery_order))
}

/// POST /v1/delivery-orders
async fn create_delivery_order(
    State(state): State<AppState>,
    Json(body): Json<DeliveryOrderBody>,
) -> Result<(StatusCode, Json<MerchantOrder>), AppError> {
    let mut order = body.order;
    if let Some(stored) = stored_order(&state, &order.number).await? {
        if stored.has_delivery_order() {
            return Err(AppError::ConflictError(format!(
                "Order {} already has a delivery order",
                order.number
            )));
        }
    }
    order.adopt_provider_fields(None);

    let settings = state.delivery.settings_for(body.gateway_code);
    let order = state
        .facade
        .create_delivery_order(DeliveryOrderRequest::new(order, settings))
        .await?;

    Ok((StatusCode::CREATED, Json(order)))
}

/// PUT /v1/delivery-orders/{number}
async fn update_delivery_order(
    State(state): State<AppState>,
    Path(number): Path<String>,
    Json(body): Json<DeliveryOrderBody>,
) -> Result<Json<MerchantOrder>, AppError> {
    if body.order.number != number {
        return Err(AppError::ValidationError(format!(
            "Order number {} does not match path {}",
            body.order.number, number
        )));
    }

    let mut order = body.order;
    let stored = stored_order(&state, &number).await?;
    order.adopt_provider_fields(stored.as_ref());

    let settings = state.delivery.settings_for(body.gateway_code);
    let order = state
        .facade
        .update_delivery_order(DeliveryOrderRequest::new(order, settings))
        .await?;

    Ok(Json(order))
}

/// POST /v1/delivery-orders/{number}/prepaid
async fn prepaid_delivery_order(
    State(state): State<AppState>,
    Path(number): Path<String>,
    Json(selection): Json<GatewaySelection>,
) -> Result<Json<MerchantOrder>, AppError> {
    let order = stored_order(&state, &number)
        .await?
        .ok_or_else(|| AppError::NotFoundError(format!("Order not found: {}", number)))?;

    let settings = state.delivery.settings_for(selection.gateway_code);
    let order = state
        .facade
        .prepaid_delivery_order(DeliveryOrderRequest::new(order, settings))
        .await?;

    Ok(Json(order))
}

async fn stored_order(state: &AppState, number: &str) -> Result<Option<MerchantOrder>, AppError> {
    state
        .order_repo
        .find_by_number(number)
        .await
        .map_err(|e| AppError::InternalServerError(e.to_string()))
}
