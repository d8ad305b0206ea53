use axum::{
    extract::State,
    routing::post,
    Json, Router,
};
use dispatch_core::MerchantOrder;
use serde::Deserialize;
use crate::error::AppError;
use crate::state::AppState;

/// Status notification pushed by a delivery gateway
#[derive(Debug, Deserialize)]
pub struct DeliveryCallback {
    pub order_number: String,
    pub gateway_code: Option<String>,
    #[serde(default)]
    pub event: Option<String>,
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/v1/webhooks/delivery", post(handle_delivery_callback))
}

/// POST /v1/webhooks/delivery
async fn handle_delivery_callback(
    State(state): State<AppState>,
    Json(payload): Json<DeliveryCallback>,
) -> Result<Json<MerchantOrder>, AppError> {
    tracing::info!(
        "Received delivery callback {} for order {}",
        payload.event.as_deref().unwrap_or("order_updated"),
        payload.order_number
    );

    let settings = state.delivery.settings_for(payload.gateway_code);
    let order = state
        .facade
        .reconcile_callback_for_order(&payload.order_number, settings)
        .await?;

    Ok(Json(order))
}
