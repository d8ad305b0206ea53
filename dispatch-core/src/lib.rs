pub mod models;
pub mod payload;
pub mod provider;
pub mod repository;
pub mod logger;

pub use models::{
    Address, Contact, DeliveryAction, DeliveryOrderRequest, DeliverySettings, DeliveryStatus,
    MerchantOrder, Parcel, ProviderOrder,
};
pub use payload::{NotificationPayload, ProviderCreatePayload, ProviderUpdatePayload, ShipmentPayload};
pub use provider::{ProviderClient, SandboxProviderClient};
pub use repository::OrderRepository;
pub use logger::{DeliveryLogger, LifecycleEvent, LifecycleStage, TracingLogger};

/// Opaque failure raised by a gateway client or a repository
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("Cannot find delivery gateway with code '{gateway_code}' for order {order_number}.")]
    GatewayNotFound {
        gateway_code: String,
        order_number: String,
    },

    #[error("Delivery order is not defined for order {}", .order.number)]
    UndefinedDeliveryOrder {
        order: Box<MerchantOrder>,
    },

    #[error("Delivery order request '{action}' failed for order {order_number}")]
    DeliveryOrderRequest {
        action: DeliveryAction,
        order_number: String,
        #[source]
        source: BoxError,
    },

    #[error("Merchant order not found: {0}")]
    MerchantOrderNotFound(String),

    #[error("Order repository failure: {0}")]
    Repository(#[source] BoxError),
}

impl DeliveryError {
    pub fn undefined_delivery_order(order: &MerchantOrder) -> Self {
        DeliveryError::UndefinedDeliveryOrder {
            order: Box::new(order.clone()),
        }
    }
}

pub type DeliveryResult<T> = Result<T, DeliveryError>;
