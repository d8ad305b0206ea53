use serde::{Deserialize, Serialize};
use std::fmt;

/// Delivery status as reported by a provider gateway
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryStatus {
    New,
    Prepaid,
    InProgress,
    Delivered,
    Canceled,
    Returned,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    pub country: String,
    pub city: String,
    pub street: String,
    pub postal_code: String,
}

/// Person the parcels are shipped to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: Option<String>,
    pub address: Address,
}

/// A physical package of the order. Weight in grams, dimensions in millimetres.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Parcel {
    pub weight_grams: u32,
    pub length_mm: u32,
    pub width_mm: u32,
    pub height_mm: u32,
}

/// The merchant's own order record a delivery order is attached to.
///
/// `provider_order_id` stays `None` until a create call against a gateway has
/// succeeded; it is only ever set from a [`ProviderOrder`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MerchantOrder {
    pub number: String,
    #[serde(default)]
    pub provider_order_id: Option<String>,
    #[serde(default)]
    pub provider_order_number: Option<String>,
    #[serde(default)]
    pub delivery_status: Option<DeliveryStatus>,
    pub shipment_method: String,
    pub receiver: Contact,
    #[serde(default)]
    pub parcels: Vec<Parcel>,
}

impl MerchantOrder {
    pub fn new(number: impl Into<String>, shipment_method: impl Into<String>, receiver: Contact) -> Self {
        Self {
            number: number.into(),
            provider_order_id: None,
            provider_order_number: None,
            delivery_status: None,
            shipment_method: shipment_method.into(),
            receiver,
            parcels: Vec::new(),
        }
    }

    pub fn add_parcel(&mut self, parcel: Parcel) {
        self.parcels.push(parcel);
    }

    pub fn has_delivery_order(&self) -> bool {
        self.provider_order_id.is_some()
    }

    /// Attach the identifiers a gateway assigned on create
    pub fn assign_provider_order(&mut self, delivery_order: &ProviderOrder) {
        self.provider_order_id = Some(delivery_order.id.clone());
        self.provider_order_number = Some(delivery_order.number.clone());
    }

    /// Overwrite every provider-derived field with the provider's view.
    /// Applying the same provider order twice leaves the order unchanged.
    pub fn apply_provider_state(&mut self, delivery_order: &ProviderOrder) {
        self.assign_provider_order(delivery_order);
        self.delivery_status = Some(delivery_order.status);
    }

    /// Take the provider-derived fields from the stored copy of this order,
    /// or clear them when nothing is stored yet. Callers outside the core
    /// never get to set these fields themselves.
    pub fn adopt_provider_fields(&mut self, stored: Option<&MerchantOrder>) {
        match stored {
            Some(stored) => {
                self.provider_order_id = stored.provider_order_id.clone();
                self.provider_order_number = stored.provider_order_number.clone();
                self.delivery_status = stored.delivery_status;
            }
            None => {
                self.provider_order_id = None;
                self.provider_order_number = None;
                self.delivery_status = None;
            }
        }
    }
}

/// Which gateway and project a request is executed against
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DeliverySettings {
    pub gateway_code: String,
    pub project_id: String,
    #[serde(default)]
    pub test_mode: bool,
    #[serde(default)]
    pub callback_url: Option<String>,
}

impl DeliverySettings {
    pub fn new(gateway_code: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            gateway_code: gateway_code.into(),
            project_id: project_id.into(),
            test_mode: false,
            callback_url: None,
        }
    }
}

/// Input of every orchestration operation. Built per call, never persisted.
#[derive(Debug, Clone)]
pub struct DeliveryOrderRequest {
    pub order: MerchantOrder,
    pub settings: DeliverySettings,
}

impl DeliveryOrderRequest {
    pub fn new(order: MerchantOrder, settings: DeliverySettings) -> Self {
        Self { order, settings }
    }

    pub fn order_number(&self) -> &str {
        &self.order.number
    }
}

/// The delivery order as tracked by the provider gateway
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProviderOrder {
    pub id: String,
    pub number: String,
    pub status: DeliveryStatus,
}

/// Lifecycle operations performed against a gateway
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryAction {
    Create,
    Update,
    Prepaid,
    Get,
}

impl fmt::Display for DeliveryAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DeliveryAction::Create => "create",
            DeliveryAction::Update => "update",
            DeliveryAction::Prepaid => "prepaid",
            DeliveryAction::Get => "get",
        };
        f.write_str(name)
    }
}
