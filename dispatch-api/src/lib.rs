use axum::{
    http::Method,
    routing::get,
    Router,
};
use dispatch_core::{OrderRepository, ProviderClient, SandboxProviderClient, TracingLogger};
use dispatch_order::{build_facade, GatewayRegistry};
use dispatch_store::{Config, DeliveryConfig, InMemoryOrderRepository, ProviderKind};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod delivery_orders;
pub mod error;
pub mod state;
pub mod webhooks;

pub use state::{AppState, DeliveryDefaults};

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::OPTIONS])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(|| async { "OK" }))
        .merge(delivery_orders::routes())
        .merge(webhooks::routes())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Build one client per configured gateway code
pub fn build_registry(config: &DeliveryConfig) -> GatewayRegistry {
    config
        .gateways
        .iter()
        .fold(GatewayRegistry::builder(), |builder, gateway| {
            let client: Arc<dyn ProviderClient> = match gateway.provider {
                ProviderKind::Sandbox => Arc::new(SandboxProviderClient::new(&gateway.code)),
            };
            builder.register(gateway.code.clone(), client)
        })
        .build()
}

pub fn build_state(config: &Config) -> AppState {
    let registry = build_registry(&config.delivery);
    if !registry.contains(&config.delivery.default_gateway) {
        tracing::warn!(
            "Default delivery gateway '{}' is not configured (known: {:?})",
            config.delivery.default_gateway,
            registry.gateway_codes()
        );
    }

    let order_repo: Arc<dyn OrderRepository> = Arc::new(InMemoryOrderRepository::new());
    let facade = build_facade(registry, order_repo.clone(), Arc::new(TracingLogger));

    AppState {
        facade: Arc::new(facade),
        order_repo,
        delivery: DeliveryDefaults::from(&config.delivery),
    }
}
